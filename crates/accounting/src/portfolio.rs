//! Receivable/payable portfolio figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::title::{FinancialTitle, TitleKind};

/// Outstanding exposure across all titles of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub receivable_total: Decimal,
    pub payable_total: Decimal,
    /// `receivable_total - payable_total`.
    pub net_exposure: Decimal,
}

impl PortfolioSummary {
    pub fn from_titles(titles: &[FinancialTitle]) -> Self {
        let total = |kind: TitleKind| -> Decimal {
            titles
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };

        let receivable_total = total(TitleKind::Receivable);
        let payable_total = total(TitleKind::Payable);

        Self {
            receivable_total,
            payable_total,
            net_exposure: receivable_total - payable_total,
        }
    }
}
