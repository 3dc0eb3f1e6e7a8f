//! Single-leg ledger posting.
//!
//! Every financial title produces exactly one entry against the account the
//! user picked: receivables are credited, payables are debited. The contra
//! leg (customers/suppliers) is not modelled, and the trial balance relies on
//! that convention.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use erpcore_core::{CompanyId, CostCenterId, DomainError, DomainResult, Entity, LedgerEntryId};
use erpcore_masterdata::Account;

use crate::title::{FinancialTitle, MAX_TITLE_AMOUNT, TitleKind};

/// `origin_type` tag of entries derived from financial titles.
pub const TITLE_ORIGIN: &str = "FinancialTitle";

/// One immutable ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: LedgerEntryId,
    pub company_id: CompanyId,
    pub date: NaiveDate,
    pub account_code: String,
    pub cost_center_id: Option<CostCenterId>,
    pub debit: Decimal,
    pub credit: Decimal,
    pub history: String,
    pub origin_type: String,
    pub origin_id: Option<u64>,
}

impl LedgerEntry {
    /// Signed effect on the account (debit-positive).
    pub fn net(&self) -> Decimal {
        self.debit - self.credit
    }
}

impl Entity for LedgerEntry {
    type Id = LedgerEntryId;

    fn id(&self) -> &LedgerEntryId {
        &self.id
    }
}

/// Derive the ledger entry for a freshly created title.
///
/// `account` must be the account referenced by `title.account_id`.
pub fn post_for_title(
    title: &FinancialTitle,
    account: &Account,
    entry_id: LedgerEntryId,
) -> DomainResult<LedgerEntry> {
    if account.id != title.account_id {
        return Err(DomainError::posting_failed(format!(
            "title {} references account {}, got {}",
            title.id, title.account_id, account.id
        )));
    }
    if account.code.trim().is_empty() {
        return Err(DomainError::posting_failed(format!(
            "account {} has no code",
            account.id
        )));
    }

    let (debit, credit, history) = match title.kind {
        TitleKind::Receivable => (
            Decimal::ZERO,
            title.amount,
            format!("revenue recognition for title {}", title.doc_number),
        ),
        TitleKind::Payable => (
            title.amount,
            Decimal::ZERO,
            format!("expense recognition for title {}", title.doc_number),
        ),
    };

    Ok(LedgerEntry {
        id: entry_id,
        company_id: title.company_id,
        date: title.issue_date,
        account_code: account.code.clone(),
        cost_center_id: title.cost_center_id,
        debit,
        credit,
        history,
        origin_type: TITLE_ORIGIN.to_string(),
        origin_id: Some(title.id.into()),
    })
}

/// Append-only collection of ledger entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, enforcing the single-leg convention.
    ///
    /// Rejections are `PostingFailed`; the ledger is unchanged on error.
    pub fn append(&mut self, entry: LedgerEntry) -> DomainResult<()> {
        if entry.debit < Decimal::ZERO || entry.credit < Decimal::ZERO {
            return Err(DomainError::posting_failed("debit and credit must not be negative"));
        }
        if entry.debit > MAX_TITLE_AMOUNT || entry.credit > MAX_TITLE_AMOUNT {
            return Err(DomainError::posting_failed(format!(
                "entry amount exceeds {MAX_TITLE_AMOUNT}"
            )));
        }
        if entry.debit.is_zero() == entry.credit.is_zero() {
            return Err(DomainError::posting_failed(
                "exactly one of debit/credit must be non-zero",
            ));
        }
        if let Some(last) = self.entries.last() {
            if entry.id <= last.id {
                return Err(DomainError::posting_failed(format!(
                    "entry id {} does not follow {}",
                    entry.id, last.id
                )));
            }
        }
        if let Some(origin_id) = entry.origin_id {
            if self.by_origin(&entry.origin_type, origin_id).is_some() {
                return Err(DomainError::posting_failed(format!(
                    "{} {} is already posted",
                    entry.origin_type, origin_id
                )));
            }
        }

        tracing::debug!(
            entry_id = %entry.id,
            account_code = %entry.account_code,
            debit = %entry.debit,
            credit = %entry.credit,
            "ledger entry appended"
        );
        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_origin(&self, origin_type: &str, origin_id: u64) -> Option<&LedgerEntry> {
        self.entries
            .iter()
            .find(|e| e.origin_type == origin_type && e.origin_id == Some(origin_id))
    }
}
