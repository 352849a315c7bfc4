//! Application layer containing the quote pricing orchestration.
//!
//! `QuoteEngine` holds the pricing rules over a price table; `QuoteSession`
//! tracks one customer's choices and keeps the breakdown current after each
//! change.

pub mod engine;
pub mod session;
