use std::path::PathBuf;
use std::process::ExitCode;

use ucc_lib::{AnalyzeOutput, PageAnalyzer, PageReport, UccOutput};

use super::{finish, prepare};
use crate::cli::ReportArgs;
use crate::formatting::render_error;

/// Run the analyze command.
pub fn run_analyze(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: PathBuf,
    report: ReportArgs,
) -> ExitCode {
    let inputs = [input];
    let (settings, snapshots) =
        match prepare(config_path.as_deref(), verbose, &report, &inputs) {
            Ok(prepared) => prepared,
            Err(err) => return render_error(err, report.format, report.output),
        };

    let analyzer = PageAnalyzer::new(settings.thresholds);
    let pages: Vec<PageReport> = snapshots
        .iter()
        .map(|snapshot| {
            let issues = analyzer.analyze(snapshot);
            if verbose {
                eprintln!("Analyzed {}: {} issue(s)", snapshot.url, issues.len());
            }
            PageReport::new(snapshot, issues)
        })
        .collect();

    let body = UccOutput::Analyze(AnalyzeOutput::new(pages));
    finish(body, &settings, report, verbose)
}
