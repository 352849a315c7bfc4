use super::catalog::{OptionKey, OptionKind};
use super::money::Money;
use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

/// Highest price a single option may carry, in đồng.
pub const MAX_PRICE: Money = Money(dec!(1000000000000000));

/// One row of the price table. `price` is VAT-exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceEntry {
    pub key: OptionKey,
    pub label: String,
    pub price: Money,
}

impl PriceEntry {
    /// Builds an entry from its textual price, which must be a whole number of
    /// đồng written as plain digits.
    pub fn from_text(
        key: impl Into<OptionKey>,
        label: impl Into<String>,
        price: &str,
    ) -> Result<Self> {
        let key = key.into();
        let digits = price.strip_prefix('-').unwrap_or(price);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QuoteError::PriceTableError(format!(
                "Price for '{key}' must be a whole number of đồng, got '{price}'"
            )));
        }
        let price = Decimal::from_str_exact(price).map_err(|_| {
            QuoteError::PriceTableError(format!("Price for '{key}' is out of range"))
        })?;
        Ok(Self {
            key,
            label: label.into(),
            price: Money::new(price),
        })
    }
}

/// Immutable mapping from option key to base price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    entries: BTreeMap<OptionKey, PriceEntry>,
}

impl PriceTable {
    /// Builds a table, rejecting blank keys, duplicates, and prices that are
    /// negative or above [`MAX_PRICE`].
    pub fn from_entries(entries: impl IntoIterator<Item = PriceEntry>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for entry in entries {
            if entry.key.as_str().trim().is_empty() {
                return Err(QuoteError::PriceTableError(
                    "Option key must not be blank".to_string(),
                ));
            }
            if entry.price < Money::ZERO {
                return Err(QuoteError::PriceTableError(format!(
                    "Price for '{}' must not be negative",
                    entry.key
                )));
            }
            if entry.price > MAX_PRICE {
                return Err(QuoteError::PriceTableError(format!(
                    "Price for '{}' exceeds {}",
                    entry.key, MAX_PRICE
                )));
            }
            if table.contains_key(&entry.key) {
                return Err(QuoteError::PriceTableError(format!(
                    "Duplicate option key '{}'",
                    entry.key
                )));
            }
            table.insert(entry.key.clone(), entry);
        }
        Ok(Self { entries: table })
    }

    /// Base price for `key`. Unknown keys cost nothing.
    pub fn lookup(&self, key: &str) -> Money {
        self.entries
            .get(key)
            .map(|entry| entry.price)
            .unwrap_or(Money::ZERO)
    }

    pub fn get(&self, key: &str) -> Option<&PriceEntry> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &PriceEntry> {
        self.entries.values()
    }

    pub fn entries_of_kind(&self, kind: OptionKind) -> impl Iterator<Item = &PriceEntry> {
        self.entries
            .values()
            .filter(move |entry| entry.key.kind() == Some(kind))
    }

    /// Every entry, packages first, then add-ons, hosting and domains. Keys
    /// without a known prefix come last.
    pub fn entries_by_kind(&self) -> impl Iterator<Item = &PriceEntry> {
        OptionKind::ALL
            .into_iter()
            .flat_map(move |kind| self.entries_of_kind(kind))
            .chain(self.entries().filter(|entry| entry.key.kind().is_none()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
