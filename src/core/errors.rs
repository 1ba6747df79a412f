//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cvemap operations.
///
/// Both parse variants are fatal: a malformed component file aborts the
/// whole run rather than being skipped, since the input set is small,
/// hand-curated, and a silent gap in a CVE report is worse than a failed
/// run.
#[derive(Debug, Error)]
pub enum Error {
    /// First line of a component file did not match the expected header
    #[error(
        "malformed header in {}: expected \"Package,CVE String,Severity\", found \"{found}\"",
        .file.display()
    )]
    MalformedHeader { file: PathBuf, found: String },

    /// A data row did not split into exactly three fields
    #[error(
        "malformed record at {}:{line}: expected 3 fields, found {fields} in \"{content}\"",
        .file.display()
    )]
    MalformedRecord {
        file: PathBuf,
        line: usize,
        fields: usize,
        content: String,
    },

    /// IO errors from reading input or writing reports
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
