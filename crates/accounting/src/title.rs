use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use erpcore_core::{
    AccountId, CompanyId, CostCenterId, DomainError, DomainResult, Entity, TitleId, Validate,
    require_text,
};

/// Largest amount a single title may carry (10^15).
///
/// Keeps every per-account and portfolio total far below `Decimal::MAX`.
pub const MAX_TITLE_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Direction of the obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    /// Accounts payable: the company owes the party.
    Payable,
    /// Accounts receivable: the party owes the company.
    Receivable,
}

impl core::fmt::Display for TitleKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TitleKind::Payable => f.write_str("AP"),
            TitleKind::Receivable => f.write_str("AR"),
        }
    }
}

/// Title status lifecycle.
///
/// Only `Open` is ever assigned; settlement and cancellation are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleStatus {
    #[default]
    Open,
    Paid,
    Cancelled,
}

/// A payable or receivable obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTitle {
    pub id: TitleId,
    pub company_id: CompanyId,
    pub kind: TitleKind,
    pub party_name: String,
    pub doc_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Always strictly positive.
    pub amount: Decimal,
    pub cost_center_id: Option<CostCenterId>,
    pub account_id: AccountId,
    pub status: TitleStatus,
}

impl Entity for FinancialTitle {
    type Id = TitleId;

    fn id(&self) -> &TitleId {
        &self.id
    }
}

/// Title creation request, as received from the surrounding layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTitle {
    pub company_id: CompanyId,
    pub kind: TitleKind,
    pub party_name: String,
    pub doc_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub cost_center_id: Option<CostCenterId>,
    pub account_id: AccountId,
}

impl Validate for NewTitle {
    fn validate(&self) -> DomainResult<()> {
        if self.amount <= Decimal::ZERO {
            return Err(DomainError::invalid_input("title amount must be positive"));
        }
        if self.amount > MAX_TITLE_AMOUNT {
            return Err(DomainError::invalid_input(format!(
                "title amount must not exceed {MAX_TITLE_AMOUNT}, got {}",
                self.amount
            )));
        }
        require_text("doc_number", &self.doc_number)
    }
}

impl NewTitle {
    pub fn into_record(self, id: TitleId) -> FinancialTitle {
        FinancialTitle {
            id,
            company_id: self.company_id,
            kind: self.kind,
            party_name: self.party_name,
            doc_number: self.doc_number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            amount: self.amount,
            cost_center_id: self.cost_center_id,
            account_id: self.account_id,
            status: TitleStatus::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: Decimal) -> NewTitle {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        NewTitle {
            company_id: CompanyId::new(1),
            kind: TitleKind::Payable,
            party_name: "Supplier Ltd".into(),
            doc_number: "NF-100".into(),
            issue_date: day,
            due_date: day,
            amount,
            cost_center_id: None,
            account_id: AccountId::new(1),
        }
    }

    #[test]
    fn zero_and_negative_amounts_are_invalid() {
        assert!(matches!(
            request(Decimal::ZERO).validate(),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(request(Decimal::new(-1, 0)).validate().is_err());
    }

    #[test]
    fn amounts_above_the_cap_are_invalid() {
        assert_eq!(MAX_TITLE_AMOUNT, Decimal::from(1_000_000_000_000_000i64));
        assert!(request(MAX_TITLE_AMOUNT).validate().is_ok());
        assert!(matches!(
            request(MAX_TITLE_AMOUNT + Decimal::new(1, 2)).validate(),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(request(Decimal::MAX).validate().is_err());
    }

    #[test]
    fn empty_doc_number_is_invalid() {
        let mut req = request(Decimal::new(100, 0));
        req.doc_number = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn new_titles_start_open() {
        let title = request(Decimal::new(100, 0)).into_record(TitleId::new(5));
        assert_eq!(title.status, TitleStatus::Open);
        assert_eq!(title.id, TitleId::new(5));
    }
}
