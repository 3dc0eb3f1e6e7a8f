//! Per-account aggregation of ledger entries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::LedgerEntry;

/// Totals for one account code. `balance` is debit-positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account_code: String,
    pub debit_total: Decimal,
    pub credit_total: Decimal,
    pub balance: Decimal,
}

/// Group entries by exact `account_code` and total both sides.
///
/// Rows come out in ascending `account_code` order. Codes are compared
/// byte-for-byte: no trimming, no case folding.
pub fn trial_balance(entries: &[LedgerEntry]) -> Vec<TrialBalanceRow> {
    let mut totals: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();

    for entry in entries {
        let (debit, credit) = totals
            .entry(entry.account_code.as_str())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        *debit += entry.debit;
        *credit += entry.credit;
    }

    totals
        .into_iter()
        .map(|(code, (debit_total, credit_total))| TrialBalanceRow {
            account_code: code.to_string(),
            debit_total,
            credit_total,
            balance: debit_total - credit_total,
        })
        .collect()
}
