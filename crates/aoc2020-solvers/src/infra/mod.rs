//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles reading puzzle input files.

pub mod password_io;
pub mod report_io;
