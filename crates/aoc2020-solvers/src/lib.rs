//! aoc2020-solvers - Advent of Code 2020 puzzle solvers
//!
//! This crate provides functionality to:
//! - Find the pair and triple of expense report entries summing to 2020 (Day 1)
//! - Validate password entries against two alternative policies (Day 2)

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use constants::*;
pub use domain::input_format::{EntryParseError, InputError};
pub use domain::password::{Entry, Policy, Rule, count_valid};
pub use domain::report::{ReportSet, find_pair, find_triple, solve1, solve2};
