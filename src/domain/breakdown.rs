use super::catalog::OptionKey;
use super::money::Money;
use serde::Serialize;

/// Snapshot of every cost line for the current selection.
///
/// Always replaced wholesale on recompute, never patched. Hosting and domain
/// costs are VAT-inclusive; package, add-on and discount figures are not taxed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    /// Package the figures were computed for; `None` means nothing selected.
    pub package: Option<OptionKey>,
    pub package_cost: Money,
    pub addon_cost: Money,
    pub hosting_cost: Money,
    pub domain_cost: Money,
    pub discount_amount: Money,
    /// Informational; already folded into `hosting_cost` and `domain_cost`.
    pub vat_amount: Money,
    pub total_cost: Money,
}

impl CostBreakdown {
    pub fn design_cost(&self) -> Money {
        self.package_cost + self.addon_cost
    }

    pub fn design_after_discount(&self) -> Money {
        self.design_cost() - self.discount_amount
    }

    pub fn infrastructure_cost(&self) -> Money {
        self.hosting_cost + self.domain_cost
    }
}
