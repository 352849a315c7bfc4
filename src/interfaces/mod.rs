//! Input and output formats around the quote engine.

pub mod csv;
pub mod json;
pub mod summary;

/// How quotes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}
