//! Plain-text range report.
//!
//! Layout: a summary block with the four totals, a fixed-width table of
//! per-component counts aligned to the widest component name, then a
//! detail section listing every record of every component.

use crate::core::{ComponentTally, ReleaseRange};
use anyhow::Result;
use std::io::Write;

pub struct TextReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, range: &ReleaseRange) -> Result<()> {
        self.write_summary(range)?;
        self.write_component_table(range)?;
        self.write_details(range)?;
        Ok(())
    }

    fn write_summary(&mut self, range: &ReleaseRange) -> Result<()> {
        writeln!(self.writer, "========================================")?;
        writeln!(self.writer, "CVE Fixed Report for {}", range.target_release)?;
        writeln!(
            self.writer,
            "CVE fixes between {} and {}",
            range.reference_release, range.target_release
        )?;
        writeln!(
            self.writer,
            "Total # of components: {}",
            range.components.len()
        )?;
        writeln!(self.writer, " Total # of Critical: {}", range.totals.critical)?;
        writeln!(self.writer, " Total # of High: {}", range.totals.high)?;
        writeln!(self.writer, " Total # of Medium: {}", range.totals.medium)?;
        writeln!(self.writer, " Total # of Low: {}", range.totals.low)?;
        writeln!(self.writer, "========================================")?;
        Ok(())
    }

    fn write_component_table(&mut self, range: &ReleaseRange) -> Result<()> {
        // Never narrower than its own header
        let width = range.widest_component_name.max("Component".len());

        writeln!(
            self.writer,
            "{:<width$} Crit High  Med  Low",
            "Component"
        )?;
        writeln!(self.writer, "{} ---- ---- ---- ----", "-".repeat(width))?;

        for component in &range.components {
            writeln!(
                self.writer,
                "{:<width$} {:>4} {:>4} {:>4} {:>4}",
                component.name,
                component.tally.critical,
                component.tally.high,
                component.tally.medium,
                component.tally.low,
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_details(&mut self, range: &ReleaseRange) -> Result<()> {
        writeln!(self.writer, "\n============ DETAILS =========================\n")?;
        for component in &range.components {
            self.write_component_detail(component)?;
        }
        Ok(())
    }

    fn write_component_detail(&mut self, component: &ComponentTally) -> Result<()> {
        writeln!(self.writer, "=============================")?;
        writeln!(self.writer, "Container Image: {}", component.name)?;
        writeln!(self.writer, "  Critical: {}", component.tally.critical)?;
        writeln!(self.writer, "  High:     {}", component.tally.high)?;
        writeln!(self.writer, "  Medium:   {}", component.tally.medium)?;
        writeln!(self.writer, "  Low:      {}", component.tally.low)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{:<45} {:<20} {:<8}",
            "Package", "CVE ID", "Severity"
        )?;
        writeln!(
            self.writer,
            "{} {} {}",
            "-".repeat(45),
            "-".repeat(20),
            "-".repeat(8)
        )?;
        for record in &component.records {
            writeln!(
                self.writer,
                "{:<45} {:<20} {:<8}",
                record.package, record.id, record.severity_label
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
