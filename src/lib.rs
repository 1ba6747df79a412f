// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    chain::{detect_chains, Chain},
    errors::{Error, Result},
    parser::parse_component_csv,
    ComponentTally, CveRecord, RangeCollection, ReleaseRange, Severity, SeverityTally,
};

pub use crate::io::walker::InputScanner;
pub use crate::io::writers::{ChainSummaryWriter, HtmlReportWriter, JsonWriter, TextReportWriter};
