use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use ucc_lib::Severity;

#[derive(Parser)]
#[command(name = "ucc")]
#[command(
    version,
    about = "UI Consistency Checker - Find UI inconsistencies in page snapshots",
    long_about = "UI Consistency Checker (UCC)\n\nModes:\n- analyze: run the single-page checks on every snapshot in a file.\n- compare: look for drift across a session of snapshots (oldest first).\n- audit: analyze every snapshot, then compare them.\n\nSnapshot files are JSON or YAML holding one snapshot or an array; pass - to read JSON from stdin.\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) with [thresholds] and [report] sections; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the single-page checks on each snapshot
    Analyze {
        #[arg(long, short, value_name = "FILE", help = "Snapshot file (JSON/YAML) or - for stdin")]
        input: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Compare a session of snapshots for cross-page drift
    Compare {
        #[arg(
            long,
            short,
            value_name = "FILE",
            num_args = 1..,
            required = true,
            help = "Snapshot files in session order; each may hold one snapshot or an array"
        )]
        input: Vec<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Analyze each snapshot and compare the session
    Audit {
        #[arg(
            long,
            short,
            value_name = "FILE",
            num_args = 1..,
            required = true,
            help = "Snapshot files in session order; each may hold one snapshot or an array"
        )]
        input: Vec<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Output flags shared by every mode.
#[derive(Args, Clone, Default)]
pub struct ReportArgs {
    #[arg(long, value_enum, default_value = "json", help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, short, help = "Output file path (stdout if omitted)")]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "SEVERITY",
        help = "Exit with code 1 when an issue at or above this severity is found (error|warning|info; default error)"
    )]
    pub fail_on: Option<Severity>,

    #[arg(long, value_name = "N", help = "Include at most N issues in the report")]
    pub max_issues: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
