//! CLI command implementations.

pub mod report;

pub use report::{run_report, ReportConfig};
