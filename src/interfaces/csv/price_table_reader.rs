use crate::domain::price_table::{PriceEntry, PriceTable};
use crate::error::{QuoteError, Result};
use serde::Deserialize;
use std::io::Read;

/// Raw CSV row. The price stays text until [`PriceEntry::from_text`] checks it.
#[derive(Debug, Deserialize)]
struct PriceRow {
    key: String,
    label: String,
    price: String,
}

/// Reads a price table from CSV with a `key,label,price` header.
///
/// Whitespace around fields is trimmed; prices are VAT-exclusive VND.
pub struct PriceTableReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PriceTableReader<R> {
    /// Creates a new `PriceTableReader` from any `Read` source (e.g. File, bytes).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily deserializes price rows.
    pub fn entries(self) -> impl Iterator<Item = Result<PriceEntry>> {
        self.reader.into_deserialize::<PriceRow>().map(|result| {
            let row = result.map_err(QuoteError::from)?;
            PriceEntry::from_text(row.key, row.label, &row.price)
        })
    }

    /// Reads every row and validates the result as a whole table.
    pub fn read_table(self) -> Result<PriceTable> {
        let entries = self.entries().collect::<Result<Vec<_>>>()?;
        let table = PriceTable::from_entries(entries)?;
        tracing::debug!(options = table.len(), "price table loaded");
        Ok(table)
    }
}
