//! Input directory scanning.
//!
//! The input root is scanned exactly one level deep for range
//! directories named `D_D_D-to-D_D_D`; each range directory is scanned
//! one level deep for qualifying component CSV files. Non-matching
//! entries are logged and skipped, never errors. Any parse failure in a
//! component file aborts the scan.

use crate::core::errors::Result;
use crate::core::{parser, RangeCollection, ReleaseRange};
use log::{debug, info};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files are excluded when their name carries this marker, regardless
/// of extension. The upstream scanner emits such an index file next to
/// the per-component exports.
const EXCLUDED_FILE_MARKER: &str = "Images with serious defects";

pub struct InputScanner {
    root: PathBuf,
    range_pattern: Regex,
}

impl InputScanner {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            // Single-digit major/minor/patch with underscore separators
            range_pattern: Regex::new(r"(?i)^\d_\d_\d-to-\d_\d_\d$").unwrap(),
        }
    }

    /// Walk the input root and build the range collection, parsing every
    /// qualifying component file along the way.
    pub fn scan(&self) -> Result<RangeCollection> {
        let mut collection = RangeCollection::new(self.root.clone());

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_dir() {
                debug!("ignoring non-directory entry {}", entry.path().display());
                continue;
            }

            let dir_name = entry.file_name().to_string_lossy().to_string();
            match self.parse_range_dir_name(&dir_name) {
                Some((reference, target)) => {
                    let range = self.scan_range_dir(entry.path(), reference, target)?;
                    collection.push(range);
                }
                None => {
                    debug!("ignoring directory {}: not a release range", dir_name);
                }
            }
        }

        Ok(collection)
    }

    /// Extract the release labels from a validated directory name.
    ///
    /// Validation happens first; the fixed-offset slices below are only
    /// sound on a name the pattern accepted.
    fn parse_range_dir_name(&self, name: &str) -> Option<(String, String)> {
        if !self.range_pattern.is_match(name) {
            return None;
        }
        let reference = name[0..5].replace('_', ".");
        let target = name[9..14].replace('_', ".");
        Some((reference, target))
    }

    fn scan_range_dir(&self, dir: &Path, reference: String, target: String) -> Result<ReleaseRange> {
        info!(
            "parsing range directory {} ({} -> {})",
            dir.display(),
            reference,
            target
        );

        let mut range = ReleaseRange::new(reference, target);

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                debug!("ignoring non-file entry {}", path.display());
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();
            match component_name(&file_name) {
                Some(name) => {
                    let content = std::fs::read_to_string(path)?;
                    range.push_component(parser::parse_component_csv(name, &content, path)?);
                }
                None => {
                    debug!("ignoring file {}", path.display());
                }
            }
        }

        Ok(range)
    }
}

/// Component name for a qualifying file, or `None` when the file is not
/// a component inventory.
///
/// Qualification is a substring check, not a true extension check:
/// `x.csvold` qualifies and its component name is `x`. That mirrors the
/// files the upstream scanner actually produces.
pub fn component_name(file_name: &str) -> Option<&str> {
    if file_name.contains(EXCLUDED_FILE_MARKER) {
        return None;
    }
    file_name.find(".csv").map(|at| &file_name[..at])
}
