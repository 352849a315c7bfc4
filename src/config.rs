//! Runtime configuration.
//!
//! Values come from environment variables with sensible defaults; command-line
//! flags override them in the binary.

use crate::domain::price_table::PriceTable;
use crate::error::Result;
use crate::interfaces::OutputFormat;
use crate::interfaces::csv::price_table_reader::PriceTableReader;
use clap::ValueEnum;
use std::env;
use std::fs::File;
use std::path::PathBuf;

/// Price list shipped with the crate.
pub const BUILTIN_PRICE_TABLE: &str = include_str!("../config/prices.csv");

pub const PRICE_TABLE_ENV: &str = "QUOTE_PRICE_TABLE";
pub const OUTPUT_FORMAT_ENV: &str = "QUOTE_OUTPUT_FORMAT";
pub const LOG_ENV: &str = "QUOTE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Price table to load instead of the built-in one.
    pub price_table_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            price_table_path: None,
            output_format: OutputFormat::Csv,
            log_filter: "warn".to_string(),
        }
    }
}

impl QuoteConfig {
    /// Reads configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            price_table_path: lookup(PRICE_TABLE_ENV)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            output_format: lookup(OUTPUT_FORMAT_ENV)
                .and_then(|format| OutputFormat::from_str(&format, true).ok())
                .unwrap_or(defaults.output_format),
            log_filter: lookup(LOG_ENV).unwrap_or(defaults.log_filter),
        }
    }

    /// Loads the configured price table, or the built-in one.
    pub fn load_price_table(&self) -> Result<PriceTable> {
        match &self.price_table_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading price table");
                PriceTableReader::new(File::open(path)?).read_table()
            }
            None => builtin_price_table(),
        }
    }
}

pub fn builtin_price_table() -> Result<PriceTable> {
    PriceTableReader::new(BUILTIN_PRICE_TABLE.as_bytes()).read_table()
}
