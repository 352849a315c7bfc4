use crate::error::Result;
use crate::interfaces::summary::QuoteSummary;
use std::io::Write;

/// Writes a quote summary as a single pretty-printed JSON object.
pub struct JsonQuoteWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonQuoteWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_summary(&mut self, summary: &QuoteSummary) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, summary)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
