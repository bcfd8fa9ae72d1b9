// File: crates/benchplot/src/main.rs
// Summary: Binary entry point: `benchplot <file1.csv> [file2.csv ...]`.

use std::process::ExitCode;

use benchplot::cli::{self, Cli};
use benchplot::logging::init_logging;
use clap::{CommandFactory, Parser};

/// Exit status when no input files are given.
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    let args = Cli::parse();
    if let Err(err) = args.validate() {
        eprintln!("{err}");
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(USAGE_EXIT);
    }

    if let Err(err) = init_logging("info") {
        eprintln!("warning: {err:#}");
    }

    match cli::run(&args.files) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(summary) => {
            summary.report_failures();
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
