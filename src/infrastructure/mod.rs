//! Adapters for the quote-request sink port.

pub mod in_memory;
pub mod json_lines;
