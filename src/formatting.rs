use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ucc_lib::output::UCC_OUTPUT_VERSION;
use ucc_lib::{
    group_issues_by_category, ErrorOutput, Issue, IssueSummary, PageReport, Severity, UccError,
    UccOutput,
};

use crate::cli::OutputFormat;

/// Issues shown per category in the human summary.
const MAX_PRETTY_PER_CATEGORY: usize = 5;

/// Write output in the requested format.
pub fn write_output(
    body: &UccOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: UccError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = UccOutput::Error(ErrorOutput {
        version: UCC_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    // Exit code 2 is reserved for fatal errors; findings use 1.
    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &UccOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &UccOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &UccOutput, colorize: bool) -> String {
    let mut buf = String::new();
    match body {
        UccOutput::Analyze(out) => {
            let header = color("[ANALYZE]", "36", colorize);
            writeln!(
                buf,
                "{} {} page(s): {}",
                header,
                out.pages.len(),
                format_summary(&out.summary, colorize)
            )
            .ok();
            for page in &out.pages {
                write_page(&mut buf, page, colorize);
            }
            write_omitted(&mut buf, out.omitted_issues);
        }
        UccOutput::Compare(out) => {
            let header = color("[COMPARE]", "35", colorize);
            writeln!(
                buf,
                "{} {} page(s): {}",
                header,
                out.pages.len(),
                format_summary(&out.summary, colorize)
            )
            .ok();
            write_issue_groups(&mut buf, &out.issues, colorize);
            write_omitted(&mut buf, out.omitted_issues);
        }
        UccOutput::Audit(out) => {
            let header = color("[AUDIT]", "34", colorize);
            writeln!(
                buf,
                "{} {} page(s): {}",
                header,
                out.pages.len(),
                format_summary(&out.summary, colorize)
            )
            .ok();
            for page in &out.pages {
                write_page(&mut buf, page, colorize);
            }
            writeln!(
                buf,
                "Session: {}",
                format_summary(&out.session.summary, colorize)
            )
            .ok();
            write_issue_groups(&mut buf, &out.session.issues, colorize);
            write_omitted(&mut buf, out.omitted_issues);
        }
        UccOutput::Error(out) => {
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
        }
    }
    buf
}

fn write_page(buf: &mut String, page: &PageReport, colorize: bool) {
    let name = if page.title.is_empty() {
        page.url.clone()
    } else {
        format!("{} ({})", page.url, page.title)
    };
    writeln!(buf, "Page {}: {}", name, format_summary(&page.summary, colorize)).ok();
    write_issue_groups(buf, &page.issues, colorize);
}

fn write_issue_groups(buf: &mut String, issues: &[Issue], colorize: bool) {
    for group in group_issues_by_category(issues) {
        writeln!(buf, "  {} ({}):", group.category, group.issues.len()).ok();
        for issue in group.issues.iter().take(MAX_PRETTY_PER_CATEGORY) {
            let tag = color(
                &format!("[{}]", issue.severity),
                severity_color_code(issue.severity),
                colorize,
            );
            writeln!(buf, "  - {} {}", tag, issue.message).ok();
        }
        let hidden = group.issues.len().saturating_sub(MAX_PRETTY_PER_CATEGORY);
        if hidden > 0 {
            writeln!(buf, "  - \u{2026} {} more", hidden).ok();
        }
    }
}

fn write_omitted(buf: &mut String, omitted: usize) {
    if omitted > 0 {
        writeln!(buf, "{} issue(s) omitted by --max-issues", omitted).ok();
    }
}

fn format_summary(summary: &IssueSummary, colorize: bool) -> String {
    if summary.total == 0 {
        return color("no issues", "32", colorize);
    }
    format!(
        "{} issue(s): {} error, {} warning, {} info",
        summary.total,
        color(&summary.errors.to_string(), "31", colorize && summary.errors > 0),
        color(&summary.warnings.to_string(), "33", colorize && summary.warnings > 0),
        summary.info
    )
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Map severity to ANSI color code.
fn severity_color_code(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "31",   // red
        Severity::Warning => "33", // yellow
        Severity::Info => "36",    // cyan
    }
}

/// Exit code 1 when any issue reaches `fail_on`.
pub fn exit_code_for_summary(summary: &IssueSummary, fail_on: Severity) -> ExitCode {
    match summary.highest() {
        Some(highest) if highest >= fail_on => ExitCode::from(1),
        _ => ExitCode::SUCCESS,
    }
}
