pub mod chain;
pub mod errors;
pub mod parser;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity buckets for a CVE record.
///
/// Resolved once per record by substring containment against the four
/// known labels, first match wins in the order below. Labels matching
/// none of them land in `Unknown` and count toward no bucket. The raw
/// label text is kept on the record for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    /// Classify a raw severity label. Matching is case-sensitive, so
    /// `"critical"` resolves to `Unknown` — input files use the
    /// capitalized scanner vocabulary.
    pub fn classify(label: &str) -> Self {
        if label.contains("Critical") {
            Severity::Critical
        } else if label.contains("High") {
            Severity::High
        } else if label.contains("Medium") {
            Severity::Medium
        } else if label.contains("Low") {
            Severity::Low
        } else {
            Severity::Unknown
        }
    }
}

/// One parsed row of a component CVE inventory. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CveRecord {
    pub package: String,
    pub id: String,
    /// Raw severity text as it appeared in the file
    pub severity_label: String,
    pub severity: Severity,
}

/// Counts per severity bucket. `Unknown` records count toward none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityTally {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityTally {
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
            Severity::Unknown => {}
        }
    }

    pub fn merge(&mut self, other: &SeverityTally) {
        self.critical += other.critical;
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
    }

    /// Total records that resolved to a known bucket
    pub fn known_total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Per-component inventory: every record from one CSV file plus the
/// derived severity counts. Frozen after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTally {
    pub name: String,
    pub records: Vec<CveRecord>,
    pub tally: SeverityTally,
}

/// One reference→target release interval and the component inventories
/// found in its directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRange {
    pub reference_release: String,
    pub target_release: String,
    pub components: Vec<ComponentTally>,
    pub totals: SeverityTally,
    /// Longest component name seen, for text-report column alignment
    pub widest_component_name: usize,
}

impl ReleaseRange {
    pub fn new(reference_release: String, target_release: String) -> Self {
        Self {
            reference_release,
            target_release,
            components: Vec::new(),
            totals: SeverityTally::default(),
            widest_component_name: 0,
        }
    }

    /// Append a component inventory, keeping `totals` and the alignment
    /// width consistent.
    pub fn push_component(&mut self, component: ComponentTally) {
        self.totals.merge(&component.tally);
        self.widest_component_name = self.widest_component_name.max(component.name.len());
        self.components.push(component);
    }

    /// Release labels with underscores, as used in output file names
    /// (e.g. `5_0_1-to-5_1_0`)
    pub fn file_stem(&self) -> String {
        format!(
            "{}-to-{}",
            self.reference_release.replace('.', "_"),
            self.target_release.replace('.', "_")
        )
    }
}

/// Every discovered range, in directory listing order. Built once per
/// run and read-only afterward; chain detection and the grand total are
/// computed from it on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeCollection {
    pub input_root: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub ranges: Vec<ReleaseRange>,
}

impl RangeCollection {
    pub fn new(input_root: PathBuf) -> Self {
        Self {
            input_root,
            timestamp: Utc::now(),
            ranges: Vec::new(),
        }
    }

    pub fn push(&mut self, range: ReleaseRange) {
        self.ranges.push(range);
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Severity totals across every range, reduced on demand
    pub fn grand_total(&self) -> SeverityTally {
        let mut total = SeverityTally::default();
        for range in &self.ranges {
            total.merge(&range.totals);
        }
        total
    }

    /// Every continuous span of adjacent ranges (see [`chain::detect_chains`])
    pub fn chains(&self) -> Vec<chain::Chain> {
        chain::detect_chains(&self.ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(severity: &str) -> CveRecord {
        CveRecord {
            package: "pkg".to_string(),
            id: "CVE-2024-0001".to_string(),
            severity_label: severity.to_string(),
            severity: Severity::classify(severity),
        }
    }

    #[test]
    fn classify_resolves_known_labels() {
        assert_eq!(Severity::classify("Critical"), Severity::Critical);
        assert_eq!(Severity::classify("High"), Severity::High);
        assert_eq!(Severity::classify("Medium"), Severity::Medium);
        assert_eq!(Severity::classify("Low"), Severity::Low);
    }

    #[test]
    fn classify_is_case_sensitive() {
        assert_eq!(Severity::classify("critical"), Severity::Unknown);
        assert_eq!(Severity::classify("HIGH"), Severity::Unknown);
        assert_eq!(Severity::classify(""), Severity::Unknown);
    }

    #[test]
    fn classify_matches_substrings() {
        // Scanner exports sometimes decorate the label
        assert_eq!(Severity::classify("High (fixed in 1.2)"), Severity::High);
    }

    #[test]
    fn classify_first_match_wins() {
        // A label naming two buckets resolves to the earlier one
        assert_eq!(Severity::classify("Critical/High"), Severity::Critical);
    }

    #[test]
    fn push_component_keeps_totals_consistent() {
        let mut range = ReleaseRange::new("5.0.0".to_string(), "5.1.0".to_string());

        let mut tally = SeverityTally::default();
        tally.record(Severity::Critical);
        tally.record(Severity::High);
        range.push_component(ComponentTally {
            name: "gatekeeper".to_string(),
            records: vec![record("Critical"), record("High")],
            tally,
        });

        let mut tally = SeverityTally::default();
        tally.record(Severity::High);
        range.push_component(ComponentTally {
            name: "etcd".to_string(),
            records: vec![record("High")],
            tally,
        });

        assert_eq!(range.totals.critical, 1);
        assert_eq!(range.totals.high, 2);
        assert_eq!(range.totals.medium, 0);
        assert_eq!(range.totals.low, 0);
        assert_eq!(range.widest_component_name, "gatekeeper".len());
    }

    #[test]
    fn file_stem_uses_underscore_labels() {
        let range = ReleaseRange::new("5.0.1".to_string(), "5.1.0".to_string());
        assert_eq!(range.file_stem(), "5_0_1-to-5_1_0");
    }

    #[test]
    fn grand_total_reduces_over_all_ranges() {
        let mut collection = RangeCollection::new(PathBuf::from("input"));

        let mut a = ReleaseRange::new("5.0.0".to_string(), "5.1.0".to_string());
        a.totals = SeverityTally {
            critical: 1,
            high: 2,
            medium: 3,
            low: 4,
        };
        let mut b = ReleaseRange::new("5.1.0".to_string(), "5.2.0".to_string());
        b.totals = SeverityTally {
            critical: 10,
            high: 20,
            medium: 30,
            low: 40,
        };
        collection.push(a);
        collection.push(b);

        let total = collection.grand_total();
        assert_eq!(total.critical, 11);
        assert_eq!(total.high, 22);
        assert_eq!(total.medium, 33);
        assert_eq!(total.low, 44);
    }
}
