//! Domain layer - Pure computational logic
//!
//! This module contains parsers and solvers without I/O dependencies.

pub mod input_format;
pub mod password;
pub mod report;
