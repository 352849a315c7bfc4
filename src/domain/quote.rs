use super::breakdown::CostBreakdown;
use super::discount::DiscountInfo;
use super::installment::InstallmentSchedule;
use super::price_table::PriceTable;
use super::selection::Selection;
use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};

/// A finalized quote: the selection it was priced from plus its figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub selection: Selection,
    pub discount: DiscountInfo,
    pub breakdown: CostBreakdown,
    pub schedule: InstallmentSchedule,
}

/// Payload handed to the form-submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: String,
    pub note: String,
}

impl QuoteRequest {
    pub fn new(name: &str, phone: &str, quote: &Quote, prices: &PriceTable) -> Result<Self> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() {
            return Err(QuoteError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        if phone.is_empty() {
            return Err(QuoteError::ValidationError(
                "phone must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
            note: render_note(quote, prices),
        })
    }
}

fn render_note(quote: &Quote, prices: &PriceTable) -> String {
    let selection = &quote.selection;
    let breakdown = &quote.breakdown;
    let describe = |key: &str| match prices.get(key) {
        Some(entry) => format!("{} ({})", entry.label, entry.price),
        None => key.to_string(),
    };

    let mut lines = Vec::new();
    if let Some(package) = &selection.package {
        lines.push(format!("Package: {}", describe(package.as_str())));
    }
    lines.push(format!("Industry: {}", selection.industry));
    if !selection.addons.is_empty() {
        let addons: Vec<String> = selection
            .addons
            .iter()
            .map(|addon| describe(addon.as_str()))
            .collect();
        lines.push(format!("Add-ons: {}", addons.join(", ")));
    }
    if let Some(hosting) = &selection.hosting {
        lines.push(format!("Hosting: {}", describe(hosting.as_str())));
    }
    if let Some(domain) = &selection.domain {
        lines.push(format!("Domain: {}", describe(domain.as_str())));
    }
    if !breakdown.discount_amount.is_zero() {
        lines.push(format!(
            "Discount ({}): -{}",
            selection.discount_code.trim().to_uppercase(),
            breakdown.discount_amount
        ));
    }
    lines.push(format!("VAT: {}", breakdown.vat_amount));
    lines.push(format!("Total (VAT included): {}", breakdown.total_cost));
    for (i, installment) in quote.schedule.installments().iter().enumerate() {
        lines.push(format!(
            "Installment {} ({}): {}",
            i + 1,
            installment.milestone.label(),
            installment.amount
        ));
    }

    lines.iter().map(|line| format!("{line}\n")).collect()
}
