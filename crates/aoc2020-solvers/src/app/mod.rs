//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to implement use cases.

pub mod password_check;
pub mod report_repair;
