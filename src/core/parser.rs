//! Parser for per-component CVE inventory files.
//!
//! A component file is a small CSV with the fixed header
//! `Package,CVE String,Severity` and three-field data rows. The parser
//! is pure: it is handed pre-read file content by the scanner and
//! performs no I/O itself.

use crate::core::errors::{Error, Result};
use crate::core::{ComponentTally, CveRecord, Severity, SeverityTally};
use std::path::Path;

/// Exact header expected on line 1 of every component file
pub const EXPECTED_HEADER: &str = "Package,CVE String,Severity";

/// Parse one component file's content into a [`ComponentTally`].
///
/// `file` is used only for diagnostics. Fails fast on a bad header or a
/// row that does not split into exactly three fields; record order is
/// preserved.
pub fn parse_component_csv(name: &str, content: &str, file: &Path) -> Result<ComponentTally> {
    let mut lines = content.lines();

    let header = lines.next().unwrap_or("").trim();
    if header != EXPECTED_HEADER {
        return Err(Error::MalformedHeader {
            file: file.to_path_buf(),
            found: header.to_string(),
        });
    }

    let mut records = Vec::new();
    let mut tally = SeverityTally::default();

    for (index, raw_line) in lines.enumerate() {
        let line = index + 2; // 1-based, after the header

        // A trailing comma would otherwise produce a phantom empty field
        let trimmed = raw_line.strip_suffix(',').unwrap_or(raw_line);
        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();

        if fields.len() != 3 {
            return Err(Error::MalformedRecord {
                file: file.to_path_buf(),
                line,
                fields: fields.len(),
                content: raw_line.to_string(),
            });
        }

        let severity_label = fields[2].to_string();
        let severity = Severity::classify(&severity_label);
        tally.record(severity);

        records.push(CveRecord {
            package: fields[0].to_string(),
            id: fields[1].to_string(),
            severity_label,
            severity,
        });
    }

    Ok(ComponentTally {
        name: name.to_string(),
        records,
        tally,
    })
}
