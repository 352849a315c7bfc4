//! Discount codes.
//!
//! Codes follow a small grammar over the trimmed, uppercased input:
//!
//! ```text
//! code    := "FI" percent "PT" | "FI" cash "TR"
//! percent := decimal
//! cash    := decimal with "TR" standing in for the decimal point, in millions
//! decimal := digits [ "." digits ]
//! ```
//!
//! Anything that fits the shape is accepted; there is no issuer check.

use super::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

const PREFIX: &str = "FI";
const PERCENT_SUFFIX: &str = "PT";
const CASH_SUFFIX: &str = "TR";
const CASH_UNIT: Decimal = dec!(1000000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountParseError {
    #[error("Please enter a code.")]
    Empty,
    #[error("Invalid percent code.")]
    InvalidPercent,
    #[error("Invalid cash code.")]
    InvalidCash,
    #[error("Invalid code.")]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", content = "amount", rename_all = "lowercase")]
pub enum Discount {
    #[default]
    None,
    Percent(Decimal),
    Fixed(Money),
}

impl Discount {
    /// Parses a raw code into a discount.
    pub fn from_code(raw: &str) -> Result<Self, DiscountParseError> {
        let code = raw.trim().to_uppercase();
        match CodeShape::of(&code) {
            CodeShape::Empty => Err(DiscountParseError::Empty),
            CodeShape::Percent(body) => parse_positive(body)
                .map(Discount::Percent)
                .ok_or(DiscountParseError::InvalidPercent),
            CodeShape::Cash(body) => parse_positive(&body.replace(CASH_SUFFIX, "."))
                .and_then(|millions| millions.checked_mul(CASH_UNIT))
                .map(|amount| Discount::Fixed(Money::new(amount)))
                .ok_or(DiscountParseError::InvalidCash),
            CodeShape::Unrecognized => Err(DiscountParseError::Unrecognized),
        }
    }

    /// Amount taken off `design_base`, never more than `design_base` itself.
    pub fn amount_for(&self, design_base: Money) -> Money {
        let raw = match self {
            Discount::None => Some(Money::ZERO),
            Discount::Percent(percent) => design_base
                .checked_scale(*percent)
                .map(|scaled| Money::new(scaled.value() / Decimal::ONE_HUNDRED)),
            Discount::Fixed(amount) => Some(*amount),
        };
        raw.map_or(design_base, |raw| raw.min(design_base))
    }
}

enum CodeShape<'a> {
    Empty,
    Percent(&'a str),
    Cash(&'a str),
    Unrecognized,
}

impl<'a> CodeShape<'a> {
    fn of(code: &'a str) -> Self {
        if code.is_empty() {
            return CodeShape::Empty;
        }
        let Some(body) = code.strip_prefix(PREFIX) else {
            return CodeShape::Unrecognized;
        };
        if let Some(percent) = body.strip_suffix(PERCENT_SUFFIX) {
            CodeShape::Percent(percent)
        } else if let Some(cash) = body.strip_suffix(CASH_SUFFIX) {
            CodeShape::Cash(cash)
        } else {
            CodeShape::Unrecognized
        }
    }
}

fn parse_positive(text: &str) -> Option<Decimal> {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(text),
    };
    if !well_formed {
        return None;
    }
    Decimal::from_str(text)
        .ok()
        .filter(|value| *value > Decimal::ZERO)
}

/// Parsed discount plus the status line shown next to the code input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiscountInfo {
    pub discount: Discount,
    pub message: String,
}

impl DiscountInfo {
    /// Never fails: a bad code yields no discount and an explanatory message.
    pub fn parse(code: &str) -> Self {
        match Discount::from_code(code) {
            Ok(discount) => Self {
                message: confirmation(&discount),
                discount,
            },
            Err(err) => {
                tracing::warn!(code, error = %err, "discount code rejected");
                Self {
                    discount: Discount::None,
                    message: err.to_string(),
                }
            }
        }
    }
}

fn confirmation(discount: &Discount) -> String {
    match discount {
        Discount::None => String::new(),
        Discount::Percent(percent) => format!("Applied a {}% discount.", percent.normalize()),
        Discount::Fixed(amount) => format!("Applied a discount of {amount}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_code() {
        let info = DiscountInfo::parse("FI20PT");
        assert_eq!(info.discount, Discount::Percent(dec!(20)));
        assert_eq!(info.message, "Applied a 20% discount.");
    }

    #[test]
    fn test_cash_code_with_decimal_marker() {
        let info = DiscountInfo::parse("FI1TR5TR");
        assert_eq!(info.discount, Discount::Fixed(Money::new(dec!(1500000))));
        assert!(info.message.contains("1.500.000"));
    }

    #[test]
    fn test_cash_code_whole_millions() {
        assert_eq!(
            Discount::from_code("FI2TR"),
            Ok(Discount::Fixed(Money::new(dec!(2000000))))
        );
    }

    #[test]
    fn test_code_is_trimmed_and_uppercased() {
        assert_eq!(
            Discount::from_code("  fi10pt \n"),
            Ok(Discount::Percent(dec!(10)))
        );
    }

    #[test]
    fn test_empty_code() {
        let info = DiscountInfo::parse("   ");
        assert_eq!(info.discount, Discount::None);
        assert_eq!(info.message, "Please enter a code.");
        assert_eq!(Discount::from_code(""), Err(DiscountParseError::Empty));
    }

    #[test]
    fn test_number_must_be_plain_digits() {
        for code in ["FI1_0PT", "FI+5PT", "FI5.PT", "FI.5PT", "FI-5PT", "FI1 0PT"] {
            assert_eq!(
                Discount::from_code(code),
                Err(DiscountParseError::InvalidPercent),
                "{code}"
            );
        }
        for code in ["FI1_0TR", "FI+1TR", "FI1TRTR", "FITR5TR"] {
            assert_eq!(
                Discount::from_code(code),
                Err(DiscountParseError::InvalidCash),
                "{code}"
            );
        }
        assert_eq!(
            Discount::from_code("FI12.5PT"),
            Ok(Discount::Percent(dec!(12.5)))
        );
    }

    #[test]
    fn test_unrecognized_code() {
        let info = DiscountInfo::parse("RANDOM");
        assert_eq!(info.discount, Discount::None);
        assert_eq!(info.message, "Invalid code.");
    }

    #[test]
    fn test_short_codes_match_neither_shape() {
        for code in ["F", "FI", "FIP", "FIT", "PT", "TR"] {
            assert_eq!(
                Discount::from_code(code),
                Err(DiscountParseError::Unrecognized),
                "{code}"
            );
        }
    }

    #[test]
    fn test_empty_numeric_section() {
        assert_eq!(
            Discount::from_code("FIPT"),
            Err(DiscountParseError::InvalidPercent)
        );
        assert_eq!(
            Discount::from_code("FITR"),
            Err(DiscountParseError::InvalidCash)
        );
    }

    #[test]
    fn test_non_numeric_or_non_positive_sections() {
        assert_eq!(
            Discount::from_code("FIABCPT"),
            Err(DiscountParseError::InvalidPercent)
        );
        assert_eq!(
            Discount::from_code("FI0PT"),
            Err(DiscountParseError::InvalidPercent)
        );
        assert_eq!(
            Discount::from_code("FI-5PT"),
            Err(DiscountParseError::InvalidPercent)
        );
        assert_eq!(
            Discount::from_code("FI1TR5TR3TR"),
            Err(DiscountParseError::InvalidCash)
        );
        assert_eq!(
            Discount::from_code("FIXTR"),
            Err(DiscountParseError::InvalidCash)
        );
    }

    #[test]
    fn test_overflowing_cash_code_is_invalid() {
        let code = format!("FI{}TR", "9".repeat(28));
        assert_eq!(
            Discount::from_code(&code),
            Err(DiscountParseError::InvalidCash)
        );
    }

    #[test]
    fn test_amount_for_clamps_to_design_base() {
        let base = Money::new(dec!(9500000));
        assert_eq!(Discount::None.amount_for(base), Money::ZERO);
        assert_eq!(
            Discount::Percent(dec!(10)).amount_for(base),
            Money::new(dec!(950000))
        );
        assert_eq!(Discount::Percent(dec!(9999999)).amount_for(base), base);
        assert_eq!(
            Discount::Fixed(Money::new(dec!(20000000))).amount_for(base),
            base
        );
        assert_eq!(
            Discount::Fixed(Money::new(dec!(1500000))).amount_for(Money::ZERO),
            Money::ZERO
        );
    }

    #[test]
    fn test_overflowing_percent_clamps() {
        let base = Money::new(dec!(9500000));
        let huge = Decimal::MAX;
        assert_eq!(Discount::Percent(huge).amount_for(base), base);
    }
}
