use std::path::PathBuf;
use std::process::ExitCode;

use ucc_lib::{audit_snapshots, AuditOutput, PageReport, UccOutput};

use super::{finish, prepare};
use crate::cli::ReportArgs;
use crate::formatting::render_error;

/// Run the audit command: every page on its own, then the whole session.
pub fn run_audit(
    config_path: Option<PathBuf>,
    verbose: bool,
    inputs: Vec<PathBuf>,
    report: ReportArgs,
) -> ExitCode {
    let (settings, snapshots) =
        match prepare(config_path.as_deref(), verbose, &report, &inputs) {
            Ok(prepared) => prepared,
            Err(err) => return render_error(err, report.format, report.output),
        };

    let (page_issues, session_issues) = audit_snapshots(&snapshots, settings.thresholds);
    if verbose && snapshots.len() < 2 {
        eprintln!("Only one snapshot loaded; skipping cross-page checks");
    }
    let pages: Vec<PageReport> = snapshots
        .iter()
        .zip(page_issues)
        .map(|(snapshot, issues)| PageReport::new(snapshot, issues))
        .collect();

    let body = UccOutput::Audit(AuditOutput::new(pages, session_issues));
    finish(body, &settings, report, verbose)
}
