//! JSON dump of the full aggregation model, for downstream tooling.

use crate::core::RangeCollection;
use anyhow::Result;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_collection(&mut self, collection: &RangeCollection) -> Result<()> {
        let json = serde_json::to_string_pretty(collection)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
