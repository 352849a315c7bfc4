use crate::domain::breakdown::CostBreakdown;
use crate::domain::discount::DiscountInfo;
use crate::domain::installment::InstallmentSchedule;
use crate::domain::money::Money;
use crate::domain::price_table::PriceTable;
use crate::domain::selection::Selection;
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// VAT charged on hosting and domain plans. Design work is not taxed.
pub const VAT_RATE: Decimal = dec!(0.08);

/// Prices a selection against a fixed price table.
///
/// Every operation is a pure function of its arguments and the table, so the
/// engine is cheap to clone and share.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    price_table: Arc<PriceTable>,
}

impl QuoteEngine {
    /// Creates a new `QuoteEngine` over `price_table`.
    pub fn new(price_table: PriceTable) -> Self {
        Self {
            price_table: Arc::new(price_table),
        }
    }

    pub fn price_table(&self) -> &PriceTable {
        &self.price_table
    }

    /// Computes the full cost breakdown for `selection` with `discount` applied.
    ///
    /// The discount only ever reduces the design portion (package and add-ons)
    /// and is clamped so that portion never goes negative. Nothing is rounded
    /// here.
    pub fn aggregate(&self, selection: &Selection, discount: &DiscountInfo) -> CostBreakdown {
        let table = &self.price_table;

        let package_base = selection
            .package
            .as_ref()
            .map_or(Money::ZERO, |key| table.lookup(key.as_str()));
        let addons_base: Money = selection
            .addons
            .iter()
            .map(|key| table.lookup(key.as_str()))
            .sum();
        let hosting_base = selection
            .hosting
            .as_ref()
            .map_or(Money::ZERO, |key| table.lookup(key.as_str()));
        let domain_base = selection
            .domain
            .as_ref()
            .map_or(Money::ZERO, |key| table.lookup(key.as_str()));

        let design_base = package_base + addons_base;
        let discount_amount = discount.discount.amount_for(design_base);
        let design_after_discount = design_base - discount_amount;

        let with_vat = Decimal::ONE + VAT_RATE;
        let hosting_with_vat = hosting_base.scale(with_vat);
        let domain_with_vat = domain_base.scale(with_vat);
        let vat_amount = (hosting_base + domain_base).scale(VAT_RATE);

        CostBreakdown {
            package: selection.package.clone(),
            package_cost: package_base,
            addon_cost: addons_base,
            hosting_cost: hosting_with_vat,
            domain_cost: domain_with_vat,
            discount_amount,
            vat_amount,
            total_cost: design_after_discount + hosting_with_vat + domain_with_vat,
        }
    }

    /// Splits a breakdown into the three-installment payment plan.
    pub fn split(&self, breakdown: &CostBreakdown) -> Result<InstallmentSchedule> {
        InstallmentSchedule::split(breakdown)
    }
}
