mod analyze;
mod audit;
mod compare;

pub use analyze::run_analyze;
pub use audit::run_audit;
pub use compare::run_compare;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ucc_lib::{load_sources, Snapshot, UccError, UccOutput};

use crate::cli::ReportArgs;
use crate::formatting::{exit_code_for_summary, render_error, write_output};
use crate::settings::{
    format_effective_config, load_config, resolve_report_settings, ResolvedReportSettings,
};

/// Load config and snapshots shared by every mode.
fn prepare(
    config_path: Option<&Path>,
    verbose: bool,
    report: &ReportArgs,
    inputs: &[PathBuf],
) -> Result<(ResolvedReportSettings, Vec<Snapshot>), UccError> {
    if report.max_issues == Some(0) {
        return Err(UccError::config("--max-issues must be at least 1"));
    }
    let config = load_config(config_path)?;
    let settings = resolve_report_settings(report, &config);
    if verbose {
        eprintln!("{}", format_effective_config(&settings, config_path));
        eprintln!("Loading snapshots from {} source(s)\u{2026}", inputs.len());
    }
    let snapshots = load_sources(inputs)?;
    if verbose {
        eprintln!("Loaded {} snapshot(s)", snapshots.len());
    }
    Ok((settings, snapshots))
}

/// Truncate, write and map the report to an exit code.
fn finish(
    mut body: UccOutput,
    settings: &ResolvedReportSettings,
    report: ReportArgs,
    verbose: bool,
) -> ExitCode {
    let Some(summary) = body.summary() else {
        return ExitCode::from(2);
    };
    if let Some(max) = settings.max_issues {
        body.limit_issues(max);
    }
    if verbose {
        eprintln!(
            "Found {} issue(s): {} error, {} warning, {} info (fail-on {})",
            summary.total, summary.errors, summary.warnings, summary.info, settings.fail_on
        );
    }
    if let Err(err) = write_output(&body, report.format, report.output.clone()) {
        return render_error(UccError::Unknown(err.to_string()), report.format, report.output);
    }
    exit_code_for_summary(&summary, settings.fail_on)
}
