//! Styled HTML range report.
//!
//! One page per release range: a component summary table whose rows
//! link into per-component detail sections, then a detail table per
//! component with severity-colored rows and identifier-aware links.
//! Everything interpolated from input files is escaped.

use crate::core::{ComponentTally, CveRecord, ReleaseRange, Severity, SeverityTally};
use crate::io::writers::PAGE_STYLE;
use anyhow::Result;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::io::Write;

const NVD_BASE_URL: &str = "https://nvd.nist.gov/vuln/detail/";
const GHSA_BASE_URL: &str = "https://github.com/advisories/";
const PRISMA_FEED_URL: &str = "https://docs.paloaltonetworks.com/prisma/prisma-cloud/prisma-cloud-admin-compute/vulnerability_management/prisma_cloud_vulnerability_feed";

pub struct HtmlReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, range: &ReleaseRange) -> Result<()> {
        self.write_header(range)?;
        self.write_component_summary(range)?;
        self.write_component_details(range)?;
        self.write_footer()?;
        Ok(())
    }

    fn write_header(&mut self, range: &ReleaseRange) -> Result<()> {
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<style>\n{PAGE_STYLE}\n</style>")?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        writeln!(
            self.writer,
            "<h1>CVE Fixed Report for {}</h1>",
            encode_text(&range.target_release)
        )?;
        writeln!(
            self.writer,
            "<p>CVE fixes between {} and {}</p>",
            encode_text(&range.reference_release),
            encode_text(&range.target_release)
        )?;
        writeln!(self.writer, "<p>")?;
        writeln!(self.writer, "<hr>")?;
        Ok(())
    }

    fn write_component_summary(&mut self, range: &ReleaseRange) -> Result<()> {
        writeln!(self.writer, "<h2>Component Summary</h2>")?;
        writeln!(self.writer, "<table border=\"2\" cellpadding=\"5\">")?;
        writeln!(self.writer, "  <tr bgcolor=\"#DCDCDC\">")?;
        writeln!(
            self.writer,
            "    <th rowspan=\"2\" style=\"font-size: 23px\">Component</th>"
        )?;
        writeln!(self.writer, "    <th colspan=\"4\">Severity</th>")?;
        writeln!(self.writer, "  </tr>")?;
        writeln!(self.writer, "  <tr bgcolor=\"#DCDCDC\">")?;
        writeln!(self.writer, "    <th>Critical</th>")?;
        writeln!(self.writer, "    <th>High</th>")?;
        writeln!(self.writer, "    <th>Medium</th>")?;
        writeln!(self.writer, "    <th>Low</th>")?;
        writeln!(self.writer, "  </tr>")?;

        for component in &range.components {
            writeln!(self.writer, "<tr>")?;
            writeln!(
                self.writer,
                "    <td><a href=\"#{}\">{}</a></td>",
                encode_double_quoted_attribute(&component.name),
                encode_text(&component.name)
            )?;
            self.write_count_cells(&component.tally)?;
            writeln!(self.writer, "</tr>")?;
        }

        writeln!(self.writer, "<tr>")?;
        writeln!(self.writer, "    <td><b>TOTAL</b></td>")?;
        writeln!(self.writer, "    <td><b>{}</b></td>", range.totals.critical)?;
        writeln!(self.writer, "    <td><b>{}</b></td>", range.totals.high)?;
        writeln!(self.writer, "    <td><b>{}</b></td>", range.totals.medium)?;
        writeln!(self.writer, "    <td><b>{}</b></td>", range.totals.low)?;
        writeln!(self.writer, "</tr>")?;
        writeln!(self.writer, "</table>")?;
        writeln!(self.writer, "<p>")?;
        writeln!(self.writer, "<hr>")?;
        Ok(())
    }

    fn write_count_cells(&mut self, tally: &SeverityTally) -> Result<()> {
        writeln!(self.writer, "    <td>{}</td>", tally.critical)?;
        writeln!(self.writer, "    <td>{}</td>", tally.high)?;
        writeln!(self.writer, "    <td>{}</td>", tally.medium)?;
        writeln!(self.writer, "    <td>{}</td>", tally.low)?;
        Ok(())
    }

    fn write_component_details(&mut self, range: &ReleaseRange) -> Result<()> {
        writeln!(self.writer, "<h2>Component Details</h2>")?;
        for component in &range.components {
            self.write_component_detail(component)?;
        }
        Ok(())
    }

    fn write_component_detail(&mut self, component: &ComponentTally) -> Result<()> {
        writeln!(
            self.writer,
            "<h3 id=\"{}\">Component : {}</h3>",
            encode_double_quoted_attribute(&component.name),
            encode_text(&component.name)
        )?;
        writeln!(self.writer, "<ul>")?;
        writeln!(self.writer, "<li>Critical : {} </li>", component.tally.critical)?;
        writeln!(self.writer, "<li>High : {} </li>", component.tally.high)?;
        writeln!(self.writer, "<li>Medium : {} </li>", component.tally.medium)?;
        writeln!(self.writer, "<li>Low : {} </li>", component.tally.low)?;
        writeln!(self.writer, "</ul>")?;

        writeln!(self.writer, "<table border=\"2\" cellpadding=\"5\">")?;
        writeln!(self.writer, "  <tr bgcolor=\"#DCDCDC\">")?;
        writeln!(self.writer, "    <th align=\"left\">Package</th>")?;
        writeln!(self.writer, "    <th align=\"left\">CVE ID</th>")?;
        writeln!(self.writer, "    <th align=\"left\">Severity</th>")?;
        writeln!(self.writer, "  </tr>")?;

        let mut footnote_needed = false;
        for record in &component.records {
            footnote_needed |= self.write_record_row(record)?;
        }
        writeln!(self.writer, "</table>")?;

        if footnote_needed {
            self.write_prisma_footnote()?;
        }
        Ok(())
    }

    /// Write one detail row; returns whether the PRISMA footnote is needed
    fn write_record_row(&mut self, record: &CveRecord) -> Result<bool> {
        match row_color(record.severity) {
            Some(color) => writeln!(self.writer, "<tr bgcolor={color}>")?,
            None => writeln!(self.writer, "<tr>")?,
        }
        writeln!(self.writer, "    <td>{}</td>", encode_text(&record.package))?;

        let mut footnote_needed = false;
        let id = encode_text(&record.id);
        if let Some(href) = advisory_url(&record.id) {
            writeln!(
                self.writer,
                "    <td><a href=\"{}\" target=\"_blank\">{}</a></td>",
                encode_double_quoted_attribute(&href),
                id
            )?;
        } else if record.id.starts_with("PRISMA-") {
            // No public detail page; flag the identifier instead
            writeln!(self.writer, "    <td>{id}<sup>&dagger;1</sup></td>")?;
            footnote_needed = true;
        } else {
            writeln!(self.writer, "    <td>{id}</td>")?;
        }

        writeln!(
            self.writer,
            "    <td>{}</td>",
            encode_text(&record.severity_label)
        )?;
        writeln!(self.writer, "</tr>")?;
        Ok(footnote_needed)
    }

    fn write_prisma_footnote(&mut self) -> Result<()> {
        writeln!(self.writer, "<p margin-top:1px>")?;
        writeln!(self.writer, "<font size=\"-2\">")?;
        writeln!(self.writer, "<em>&dagger;1</em>")?;
        writeln!(
            self.writer,
            "- PRISMA-*ID is not the same vulnerability as CVE-*ID. See"
        )?;
        writeln!(
            self.writer,
            "<a href=\"{PRISMA_FEED_URL}\" target=\"_blank\" rel=\"noopener noreferrer\">"
        )?;
        writeln!(self.writer, "PRISMA vulnerability")?;
        writeln!(self.writer, "</a>")?;
        writeln!(self.writer, "for more info.")?;
        writeln!(self.writer, "</font>")?;
        writeln!(self.writer, "</p>")?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<()> {
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        Ok(())
    }
}

/// Background color for a detail row, by resolved severity
fn row_color(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Critical => Some("#CD6155"),
        Severity::High => Some("#F5B7B1"),
        Severity::Medium => Some("#F9E79F"),
        Severity::Low | Severity::Unknown => None,
    }
}

/// Public advisory page for a linkable identifier. PRISMA identifiers
/// have no public detail page and return `None`, as does anything
/// unrecognized.
fn advisory_url(id: &str) -> Option<String> {
    if id.starts_with("CVE-") {
        Some(format!("{NVD_BASE_URL}{id}"))
    } else if id.starts_with("GHSA-") {
        Some(format!("{GHSA_BASE_URL}{id}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_component_csv;
    use indoc::indoc;
    use std::path::PathBuf;

    fn render(content: &str) -> String {
        let mut range = ReleaseRange::new("5.0.0".to_string(), "5.1.0".to_string());
        range.push_component(
            parse_component_csv("istio", content, &PathBuf::from("istio.csv")).unwrap(),
        );
        let mut buffer = Vec::new();
        HtmlReportWriter::new(&mut buffer)
            .write_report(&range)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn advisory_url_covers_known_prefixes() {
        assert_eq!(
            advisory_url("CVE-2023-0464").as_deref(),
            Some("https://nvd.nist.gov/vuln/detail/CVE-2023-0464")
        );
        assert_eq!(
            advisory_url("GHSA-qq97-vm5h-rrhg").as_deref(),
            Some("https://github.com/advisories/GHSA-qq97-vm5h-rrhg")
        );
        assert_eq!(advisory_url("PRISMA-2022-0227"), None);
        assert_eq!(advisory_url("ALAS-2023-1"), None);
    }

    #[test]
    fn severity_rows_are_colored() {
        let html = render(indoc! {"
            Package,CVE String,Severity
            openssl,CVE-2023-0464,Critical
            zlib,CVE-2022-37434,High
            curl,CVE-2023-27533,Medium
            bash,CVE-2022-3715,Low
        "});
        assert!(html.contains("<tr bgcolor=#CD6155>"));
        assert!(html.contains("<tr bgcolor=#F5B7B1>"));
        assert!(html.contains("<tr bgcolor=#F9E79F>"));
    }

    #[test]
    fn summary_links_to_detail_anchor() {
        let html = render("Package,CVE String,Severity\npkg,CVE-2024-1,Low");
        assert!(html.contains("<a href=\"#istio\">istio</a>"));
        assert!(html.contains("<h3 id=\"istio\">Component : istio</h3>"));
    }

    #[test]
    fn prisma_identifier_gets_footnote_once() {
        let html = render(indoc! {"
            Package,CVE String,Severity
            console,PRISMA-2022-0227,High
            twistlock,PRISMA-2023-0120,Low
        "});
        assert!(html.contains("PRISMA-2022-0227<sup>&dagger;1</sup>"));
        assert_eq!(html.matches("PRISMA vulnerability").count(), 1);
    }

    #[test]
    fn unrecognized_identifier_stays_plain() {
        let html = render("Package,CVE String,Severity\npkg,ALAS-2023-1,Low");
        assert!(html.contains("<td>ALAS-2023-1</td>"));
    }

    #[test]
    fn input_text_is_escaped() {
        let html = render("Package,CVE String,Severity\n<script>alert(1)</script>,CVE-2024-1,Low");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
