use crate::domain::catalog::OptionKind;
use crate::domain::price_table::{PriceEntry, PriceTable};
use crate::error::Result;
use crate::interfaces::summary::QuoteSummary;
use std::io::Write;

/// Writes quotes and price lists as CSV.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// One `item,amount` row per figure in the summary.
    pub fn write_summary(&mut self, summary: &QuoteSummary) -> Result<()> {
        self.writer.write_record(["item", "amount"])?;
        for (item, amount) in summary.rows() {
            self.writer.write_record([item, amount.to_string().as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Price list grouped by option kind, or only the rows of `kind`.
    pub fn write_price_table(
        &mut self,
        table: &PriceTable,
        kind: Option<OptionKind>,
    ) -> Result<()> {
        let entries: Vec<&PriceEntry> = match kind {
            Some(kind) => table.entries_of_kind(kind).collect(),
            None => table.entries_by_kind().collect(),
        };

        self.writer.write_record(["key", "label", "price"])?;
        for entry in entries {
            self.writer.write_record([
                entry.key.as_str(),
                entry.label.as_str(),
                entry.price.value().to_string().as_str(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
