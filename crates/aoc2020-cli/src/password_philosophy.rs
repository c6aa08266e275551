//! Password philosophy CLI (Day 2)
//!
//! Usage: password_philosophy [--input <PATH>] [--policy <occurrence|position>]
//! Example:
//!   password_philosophy
//!   password_philosophy --policy occurrence
//!
//! Prints the number of valid passwords. With no options, reads `input` from
//! the working directory and applies the positional policy.

mod logging;

use aoc2020_solvers::app::password_check::run_password_check;
use aoc2020_solvers::{DEFAULT_INPUT_PATH, InputError, Policy};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Character count within the rule's range
    Occurrence,
    /// Character at exactly one of the rule's two positions
    Position,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Occurrence => Policy::OccurrenceCount,
            PolicyArg::Position => Policy::PositionXor,
        }
    }
}

#[derive(Parser)]
#[command(name = "password_philosophy")]
#[command(about = "Count passwords that satisfy their rule")]
struct Cli {
    /// Password list file
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Validation policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Position)]
    policy: PolicyArg,
}

fn format_input_error(err: &InputError) -> String {
    match err {
        InputError::Io { path, source } => {
            format!("Failed to open file: {} ({})", path.display(), source)
        }
        InputError::InvalidEntry { line, source } => format!(
            "Invalid entry on line {}: {}.\nExpected '<low>-<high> <char>: <password>'.",
            line, source
        ),
        other => other.to_string(),
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    match run_password_check(&cli.input, cli.policy.into()) {
        Ok(count) => println!("{}", count),
        Err(e) => {
            eprintln!("Error: {}", format_input_error(&e));
            std::process::exit(1);
        }
    }
}
