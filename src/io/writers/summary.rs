//! Combined summary page for a chain of adjacent release ranges.
//!
//! One table row per range in the span plus a TOTAL row carrying the
//! chain's combined severity counts.

use crate::core::chain::Chain;
use crate::core::ReleaseRange;
use crate::io::writers::PAGE_STYLE;
use anyhow::Result;
use html_escape::encode_text;
use std::io::Write;

pub struct ChainSummaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> ChainSummaryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// `ranges` is the full collection the chain's indices refer into.
    pub fn write_summary(&mut self, chain: &Chain, ranges: &[ReleaseRange]) -> Result<()> {
        self.write_header(chain)?;
        self.write_range_table(chain, ranges)?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        Ok(())
    }

    fn write_header(&mut self, chain: &Chain) -> Result<()> {
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<style>\n{PAGE_STYLE}\n</style>")?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        writeln!(self.writer, "<h1>Overall CVE Fixed Report</h1>")?;
        writeln!(
            self.writer,
            "<p>CVE fixes between {} and {}</p>",
            encode_text(&chain.start_release),
            encode_text(&chain.end_release)
        )?;
        writeln!(self.writer, "<p>")?;
        writeln!(self.writer, "<hr>")?;
        Ok(())
    }

    fn write_range_table(&mut self, chain: &Chain, ranges: &[ReleaseRange]) -> Result<()> {
        writeln!(self.writer, "<table border=\"2\" cellpadding=\"5\">")?;
        writeln!(self.writer, "  <tr bgcolor=\"#DCDCDC\">")?;
        writeln!(
            self.writer,
            "    <th rowspan=\"2\" style=\"font-size: 23px\">Release Range</th>"
        )?;
        writeln!(self.writer, "    <th colspan=\"4\">Severity</th>")?;
        writeln!(self.writer, "  </tr>")?;
        writeln!(self.writer, "  <tr bgcolor=\"#DCDCDC\">")?;
        writeln!(self.writer, "    <th>Critical</th>")?;
        writeln!(self.writer, "    <th>High</th>")?;
        writeln!(self.writer, "    <th>Medium</th>")?;
        writeln!(self.writer, "    <th>Low</th>")?;
        writeln!(self.writer, "  </tr>")?;

        for range in &ranges[chain.start..=chain.end] {
            writeln!(self.writer, "<tr>")?;
            writeln!(
                self.writer,
                "    <td>Between {} and {}</td>",
                encode_text(&range.reference_release),
                encode_text(&range.target_release)
            )?;
            writeln!(self.writer, "    <td>{}</td>", range.totals.critical)?;
            writeln!(self.writer, "    <td>{}</td>", range.totals.high)?;
            writeln!(self.writer, "    <td>{}</td>", range.totals.medium)?;
            writeln!(self.writer, "    <td>{}</td>", range.totals.low)?;
            writeln!(self.writer, "</tr>")?;
        }

        writeln!(self.writer, "<tr>")?;
        writeln!(self.writer, "    <td><b>TOTAL</b></td>")?;
        writeln!(self.writer, "    <td><b>{}</b></td>", chain.totals.critical)?;
        writeln!(self.writer, "    <td><b>{}</b></td>", chain.totals.high)?;
        writeln!(self.writer, "    <td><b>{}</b></td>", chain.totals.medium)?;
        writeln!(self.writer, "    <td><b>{}</b></td>", chain.totals.low)?;
        writeln!(self.writer, "</tr>")?;
        writeln!(self.writer, "</table>")?;
        writeln!(self.writer, "<p>")?;
        writeln!(self.writer, "<hr>")?;
        Ok(())
    }
}
