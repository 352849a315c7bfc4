use quote_engine::application::engine::QuoteEngine;
use quote_engine::application::session::QuoteSession;
use quote_engine::config::builtin_price_table;
use quote_engine::domain::catalog::OptionKey;
use quote_engine::domain::money::Money;
use quote_engine::domain::price_table::{PriceEntry, PriceTable};
use std::io::Error;
use std::path::Path;

/// Writes a `key,label,price` CSV with the given rows.
pub fn write_price_csv(path: &Path, rows: &[(&str, &str, &str)]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["key", "label", "price"])?;
    for (key, label, price) in rows {
        wtr.write_record([*key, *label, *price])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn table(rows: &[(&str, Money)]) -> PriceTable {
    PriceTable::from_entries(rows.iter().map(|(key, price)| PriceEntry {
        key: OptionKey::from(*key),
        label: key.to_string(),
        price: *price,
    }))
    .expect("valid price table")
}

pub fn builtin_session() -> QuoteSession {
    let table = builtin_price_table().expect("bundled price table parses");
    QuoteSession::new(QuoteEngine::new(table))
}
