use super::engine::QuoteEngine;
use crate::domain::breakdown::CostBreakdown;
use crate::domain::catalog::{Industry, OptionKey};
use crate::domain::discount::DiscountInfo;
use crate::domain::ports::QuoteRequestSink;
use crate::domain::quote::{Quote, QuoteRequest};
use crate::domain::selection::Selection;
use crate::error::Result;

/// A single customer's quote in progress.
///
/// Owns the selection and the current discount, and recomputes the breakdown
/// synchronously after every mutation, so [`QuoteSession::breakdown`] is never
/// stale.
pub struct QuoteSession {
    engine: QuoteEngine,
    selection: Selection,
    discount: DiscountInfo,
    breakdown: CostBreakdown,
}

impl QuoteSession {
    pub fn new(engine: QuoteEngine) -> Self {
        let selection = Selection::new();
        let discount = DiscountInfo::default();
        let breakdown = engine.aggregate(&selection, &discount);
        Self {
            engine,
            selection,
            discount,
            breakdown,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn discount(&self) -> &DiscountInfo {
        &self.discount
    }

    pub fn breakdown(&self) -> &CostBreakdown {
        &self.breakdown
    }

    pub fn select_package(&mut self, key: impl Into<OptionKey>) -> &CostBreakdown {
        self.selection.select_package(key);
        self.recompute()
    }

    pub fn clear_package(&mut self) -> &CostBreakdown {
        self.selection.clear_package();
        self.recompute()
    }

    pub fn set_industry(&mut self, industry: Industry) -> &CostBreakdown {
        self.selection.set_industry(industry);
        self.recompute()
    }

    pub fn toggle_addon(&mut self, key: impl Into<OptionKey>, checked: bool) -> &CostBreakdown {
        self.selection.toggle_addon(key, checked);
        self.recompute()
    }

    pub fn select_hosting(&mut self, key: Option<OptionKey>) -> &CostBreakdown {
        self.selection.select_hosting(key);
        self.recompute()
    }

    pub fn select_domain(&mut self, key: Option<OptionKey>) -> &CostBreakdown {
        self.selection.select_domain(key);
        self.recompute()
    }

    /// Stores and parses `code`. A rejected code leaves no discount in effect.
    pub fn apply_discount(&mut self, code: &str) -> &DiscountInfo {
        self.selection.set_discount_code(code);
        self.discount = DiscountInfo::parse(code);
        self.recompute();
        &self.discount
    }

    /// Locks in the current figures as a quote with its payment plan.
    pub fn finalize(&self) -> Result<Quote> {
        let schedule = self.engine.split(&self.breakdown)?;
        tracing::info!(
            package = ?self.selection.package,
            total = %self.breakdown.total_cost,
            "quote finalized"
        );
        Ok(Quote {
            selection: self.selection.clone(),
            discount: self.discount.clone(),
            breakdown: self.breakdown.clone(),
            schedule,
        })
    }

    /// Finalizes the quote and forwards it to `sink` with the contact details.
    pub async fn submit(
        &self,
        sink: &dyn QuoteRequestSink,
        name: &str,
        phone: &str,
    ) -> Result<QuoteRequest> {
        let quote = self.finalize()?;
        let request = QuoteRequest::new(name, phone, &quote, self.engine.price_table())?;
        sink.submit(request.clone()).await?;
        tracing::info!(name = %request.name, "quote request submitted");
        Ok(request)
    }

    fn recompute(&mut self) -> &CostBreakdown {
        self.breakdown = self.engine.aggregate(&self.selection, &self.discount);
        tracing::debug!(total = %self.breakdown.total_cost, "breakdown recomputed");
        &self.breakdown
    }
}
