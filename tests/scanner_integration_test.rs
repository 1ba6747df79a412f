use cvemap::{InputScanner, Severity};
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_component(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn sample_csv() -> &'static str {
    indoc! {"
        Package,CVE String,Severity
        openssl,CVE-2023-0464,High
        zlib,CVE-2022-37434,Critical
        curl,GHSA-qq97-vm5h-rrhg,Medium
    "}
}

#[test]
fn scan_builds_ranges_from_matching_directories_only() {
    let root = TempDir::new().unwrap();
    let range_dir = root.path().join("5_0_1-to-5_1_0");
    fs::create_dir(&range_dir).unwrap();
    write_component(&range_dir, "istio.csv", sample_csv());

    // None of these may contribute anything
    fs::create_dir(root.path().join("notarange")).unwrap();
    write_component(
        &root.path().join("notarange"),
        "istio.csv",
        sample_csv(),
    );
    fs::write(root.path().join("stray.csv"), sample_csv()).unwrap();

    let collection = InputScanner::new(root.path().to_path_buf()).scan().unwrap();

    assert_eq!(collection.ranges.len(), 1);
    let range = &collection.ranges[0];
    assert_eq!(range.reference_release, "5.0.1");
    assert_eq!(range.target_release, "5.1.0");
    assert_eq!(range.components.len(), 1);
    assert_eq!(range.components[0].name, "istio");
    assert_eq!(range.totals.critical, 1);
    assert_eq!(range.totals.high, 1);
    assert_eq!(range.totals.medium, 1);
    assert_eq!(range.totals.low, 0);

    let grand = collection.grand_total();
    assert_eq!(grand.known_total(), 3);
}

#[test]
fn non_qualifying_files_are_skipped_without_error() {
    let root = TempDir::new().unwrap();
    let range_dir = root.path().join("5_0_0-to-5_1_0");
    fs::create_dir(&range_dir).unwrap();

    write_component(&range_dir, "istio.csv", sample_csv());
    write_component(&range_dir, "README.txt", "not a csv at all");
    write_component(
        &range_dir,
        "Images with serious defects.csv",
        "Package,CVE String,Severity\nbad,not,parsed,extra",
    );
    fs::create_dir(range_dir.join("nested")).unwrap();

    let collection = InputScanner::new(root.path().to_path_buf()).scan().unwrap();
    assert_eq!(collection.ranges[0].components.len(), 1);
}

#[test]
fn csv_substring_in_file_name_qualifies() {
    let root = TempDir::new().unwrap();
    let range_dir = root.path().join("5_0_0-to-5_1_0");
    fs::create_dir(&range_dir).unwrap();
    write_component(&range_dir, "backup.csvold", sample_csv());

    let collection = InputScanner::new(root.path().to_path_buf()).scan().unwrap();
    assert_eq!(collection.ranges[0].components[0].name, "backup");
}

#[test]
fn range_totals_equal_sum_of_component_tallies() {
    let root = TempDir::new().unwrap();
    let range_dir = root.path().join("5_0_0-to-5_1_0");
    fs::create_dir(&range_dir).unwrap();
    write_component(&range_dir, "istio.csv", sample_csv());
    write_component(
        &range_dir,
        "etcd.csv",
        indoc! {"
            Package,CVE String,Severity
            etcd,CVE-2023-32082,Low
            etcd,CVE-2023-47108,High
        "},
    );

    let range = &InputScanner::new(root.path().to_path_buf())
        .scan()
        .unwrap()
        .ranges[0];

    let mut expected = cvemap::SeverityTally::default();
    for component in &range.components {
        expected.merge(&component.tally);
    }
    assert_eq!(range.totals, expected);
    assert_eq!(range.widest_component_name, "istio".len());
}

#[test]
fn records_keep_file_order_and_unknown_severity() {
    let root = TempDir::new().unwrap();
    let range_dir = root.path().join("5_0_0-to-5_1_0");
    fs::create_dir(&range_dir).unwrap();
    write_component(
        &range_dir,
        "istio.csv",
        indoc! {"
            Package,CVE String,Severity
            pkgA,CVE-2020-1,Critical
            pkgB,CVE-2020-2,High
            pkgC,CVE-2020-3,Negligible
        "},
    );

    let range = &InputScanner::new(root.path().to_path_buf())
        .scan()
        .unwrap()
        .ranges[0];
    let records = &range.components[0].records;

    assert_eq!(records[0].package, "pkgA");
    assert_eq!(records[1].package, "pkgB");
    assert_eq!(records[2].severity, Severity::Unknown);
    assert_eq!(range.totals.critical, 1);
    assert_eq!(range.totals.high, 1);
    assert_eq!(range.totals.known_total(), 2);
}

#[test]
fn malformed_component_file_aborts_the_scan() {
    let root = TempDir::new().unwrap();
    let range_dir = root.path().join("5_0_0-to-5_1_0");
    fs::create_dir(&range_dir).unwrap();
    write_component(&range_dir, "ok.csv", sample_csv());
    write_component(
        &range_dir,
        "zbroken.csv",
        "Package,CVE String,Severity\nonly,two-fields-missing",
    );

    let result = InputScanner::new(root.path().to_path_buf()).scan();
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("zbroken.csv"), "got: {message}");
    assert!(message.contains("expected 3 fields"), "got: {message}");
}
