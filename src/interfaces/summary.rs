use crate::domain::breakdown::CostBreakdown;
use crate::domain::discount::DiscountInfo;
use crate::domain::installment::InstallmentSchedule;
use rust_decimal::Decimal;
use serde::Serialize;

/// Presentation view of a quote: every figure rounded to whole VND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub package: Option<String>,
    pub package_cost: Decimal,
    pub addon_cost: Decimal,
    pub discount_amount: Decimal,
    pub hosting_cost: Decimal,
    pub domain_cost: Decimal,
    pub vat_amount: Decimal,
    pub total_cost: Decimal,
    pub discount_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<[Decimal; 3]>,
}

impl QuoteSummary {
    pub fn new(
        breakdown: &CostBreakdown,
        discount: &DiscountInfo,
        schedule: Option<&InstallmentSchedule>,
    ) -> Self {
        Self {
            package: breakdown.package.as_ref().map(|key| key.to_string()),
            package_cost: breakdown.package_cost.rounded(),
            addon_cost: breakdown.addon_cost.rounded(),
            discount_amount: breakdown.discount_amount.rounded(),
            hosting_cost: breakdown.hosting_cost.rounded(),
            domain_cost: breakdown.domain_cost.rounded(),
            vat_amount: breakdown.vat_amount.rounded(),
            total_cost: breakdown.total_cost.rounded(),
            discount_message: discount.message.clone(),
            installments: schedule.map(|s| {
                [
                    s.signing.rounded(),
                    s.infrastructure.rounded(),
                    s.handover.rounded(),
                ]
            }),
        }
    }

    /// `(item, amount)` rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, Decimal)> {
        let mut rows = vec![
            ("package", self.package_cost),
            ("addons", self.addon_cost),
            ("discount", self.discount_amount),
            ("hosting", self.hosting_cost),
            ("domain", self.domain_cost),
            ("vat", self.vat_amount),
            ("total", self.total_cost),
        ];
        if let Some([first, second, third]) = self.installments {
            rows.push(("installment_1", first));
            rows.push(("installment_2", second));
            rows.push(("installment_3", third));
        }
        rows
    }
}
