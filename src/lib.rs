//! Quote engine for the website design service: prices a customer's package,
//! add-on, hosting and domain choices, applies discount codes and VAT, and
//! splits the result into a three-installment payment plan.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
