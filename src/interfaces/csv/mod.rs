pub mod price_table_reader;
pub mod quote_writer;
