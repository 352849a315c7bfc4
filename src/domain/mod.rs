//! Domain model: prices, selections, discounts and the figures derived from them.

pub mod breakdown;
pub mod catalog;
pub mod discount;
pub mod installment;
pub mod money;
pub mod ports;
pub mod price_table;
pub mod quote;
pub mod selection;
