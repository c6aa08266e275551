//! Puzzle constants

// =============================================================================
// Report repair (Day 1)
// =============================================================================

/// Sum the report entries must add up to
pub const TARGET_SUM: i64 = 2020;

/// Result returned by the solvers when no qualifying entries exist
pub const NOT_FOUND: i64 = -1;

// =============================================================================
// Input files
// =============================================================================

/// Input file name used when none is given on the command line
pub const DEFAULT_INPUT_PATH: &str = "input";
