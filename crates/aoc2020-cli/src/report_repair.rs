//! Report repair CLI (Day 1)
//!
//! Usage: report_repair [INPUT] [PART]
//! Example:
//!   report_repair
//!   report_repair input 2
//!
//! PART 1 multiplies the two entries summing to 2020, PART 2 the three
//! entries. Any other PART prints nothing.

mod logging;

use aoc2020_solvers::DEFAULT_INPUT_PATH;
use aoc2020_solvers::InputError;
use aoc2020_solvers::app::report_repair::{Part, run_report_repair};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "report_repair")]
#[command(about = "Find the expense report entries that sum to 2020")]
struct Cli {
    /// Report file, one integer per line
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Puzzle part: 1 (pair) or 2 (triple)
    #[arg(default_value = "1")]
    part: String,
}

fn format_input_error(err: &InputError) -> String {
    match err {
        InputError::Io { path, source } => {
            format!("Failed to open file: {} ({})", path.display(), source)
        }
        InputError::InvalidNumber { line, value } => format!(
            "Invalid report: line {} is not an integer: '{}'",
            line, value
        ),
        other => other.to_string(),
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let part = Part::from_arg(&cli.part);

    match run_report_repair(&cli.input, part) {
        Ok(answer) => {
            if let (Some(part), Some(answer)) = (part, answer) {
                println!("{}: {}", part.label(), answer);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", format_input_error(&e));
            std::process::exit(1);
        }
    }
}
