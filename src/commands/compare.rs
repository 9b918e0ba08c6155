use std::path::PathBuf;
use std::process::ExitCode;

use ucc_lib::{CompareOutput, SnapshotComparator, UccError, UccOutput};

use super::{finish, prepare};
use crate::cli::ReportArgs;
use crate::formatting::render_error;

/// Run the compare command.
pub fn run_compare(
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
    if snapshots.len() < 2 {
        let err = UccError::snapshot(format!(
            "compare needs at least two snapshots, got {}",
            snapshots.len()
        ));
        return render_error(err, report.format, report.output);
    }

    let issues = SnapshotComparator::new(settings.thresholds).compare(&snapshots);
    if verbose {
        eprintln!(
            "Compared {} snapshot(s): {} cross-page issue(s)",
            snapshots.len(),
            issues.len()
        );
    }

    let body = UccOutput::Compare(CompareOutput::new(&snapshots, issues));
    finish(body, &settings, report, verbose)
}
