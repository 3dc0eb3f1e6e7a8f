//! Accounting module: financial titles, single-leg ledger posting, trial
//! balance and portfolio figures.
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod ledger;
pub mod portfolio;
pub mod title;
pub mod trial_balance;

pub use ledger::{Ledger, LedgerEntry, TITLE_ORIGIN, post_for_title};
pub use portfolio::PortfolioSummary;
pub use title::{FinancialTitle, MAX_TITLE_AMOUNT, NewTitle, TitleKind, TitleStatus};
pub use trial_balance::{TrialBalanceRow, trial_balance};
