//! Fiscal module: tax rules and tax computation.

pub mod tax;

pub use tax::{NewTaxRule, TaxRule, TaxType, calculate_tax};
