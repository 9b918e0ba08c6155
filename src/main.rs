mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_analyze, run_audit, run_compare};

fn main() -> ExitCode {
    let args = cli::parse();

    match args.command {
        Commands::Analyze { input, report } => {
            run_analyze(args.config, args.verbose, input, report)
        }
        Commands::Compare { input, report } => {
            run_compare(args.config, args.verbose, input, report)
        }
        Commands::Audit { input, report } => run_audit(args.config, args.verbose, input, report),
    }
}
