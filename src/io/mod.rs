//! Input/Output operations for energy calculations
//!
//! This module handles logging setup and the written energy report.

mod output;

pub use output::{setup_output, write_report};
