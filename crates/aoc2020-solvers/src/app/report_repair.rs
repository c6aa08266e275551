//! Report repair workflow
//!
//! Loads a report file and runs the solver for the requested part.

use crate::domain::input_format::InputError;
use crate::domain::report::{ReportSet, solve1, solve2};
use crate::infra::report_io::load_report;
use std::path::Path;

/// Puzzle part selecting the solver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    /// Pair summing to 2020
    One,
    /// Triple summing to 2020
    Two,
}

impl Part {
    /// Parse a part number argument (`"1"` or `"2"`)
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "1" => Some(Self::One),
            "2" => Some(Self::Two),
            _ => None,
        }
    }

    /// Label printed in front of the answer
    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "Solver1",
            Self::Two => "Solver2",
        }
    }

    /// Run this part's solver over `values`
    pub fn solve(&self, values: &ReportSet) -> i64 {
        match self {
            Self::One => solve1(values),
            Self::Two => solve2(values),
        }
    }
}

/// Load the report at `path` and solve `part`
///
/// The report is loaded even without a part, so load errors still surface.
pub fn run_report_repair(
    path: impl AsRef<Path>,
    part: Option<Part>,
) -> Result<Option<i64>, InputError> {
    let values = load_report(path)?;
    Ok(part.map(|part| part.solve(&values)))
}
