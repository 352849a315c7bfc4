use super::breakdown::CostBreakdown;
use super::money::Money;
use crate::error::{QuoteError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    ContractSigning,
    InfrastructureDeployment,
    Handover,
}

impl Milestone {
    pub fn label(&self) -> &'static str {
        match self {
            Milestone::ContractSigning => "on contract signing",
            Milestone::InfrastructureDeployment => "on infrastructure deployment",
            Milestone::Handover => "on handover",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Installment {
    pub milestone: Milestone,
    pub amount: Money,
}

/// Three-part payment plan. The discounted design cost is split evenly
/// between signing and handover; infrastructure is paid in full in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallmentSchedule {
    pub signing: Money,
    pub infrastructure: Money,
    pub handover: Money,
}

impl InstallmentSchedule {
    /// Fails when no package is selected rather than quoting a zero design.
    pub fn split(breakdown: &CostBreakdown) -> Result<Self> {
        if breakdown.package.is_none() {
            return Err(QuoteError::ValidationError(
                "no package selected".to_string(),
            ));
        }

        let design_half = breakdown.design_after_discount().half();
        Ok(Self {
            signing: design_half,
            infrastructure: breakdown.infrastructure_cost(),
            handover: design_half,
        })
    }

    pub fn installments(&self) -> [Installment; 3] {
        [
            Installment {
                milestone: Milestone::ContractSigning,
                amount: self.signing,
            },
            Installment {
                milestone: Milestone::InfrastructureDeployment,
                amount: self.infrastructure,
            },
            Installment {
                milestone: Milestone::Handover,
                amount: self.handover,
            },
        ]
    }

    pub fn total(&self) -> Money {
        self.signing + self.infrastructure + self.handover
    }
}
