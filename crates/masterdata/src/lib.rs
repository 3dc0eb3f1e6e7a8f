//! Master data (companies, chart of accounts, cost centers, customers,
//! products, users).
//!
//! These are reference records: registered once through a validated request,
//! then only read by identifier.

pub mod account;
pub mod company;
pub mod cost_center;
pub mod customer;
pub mod product;
pub mod user;

pub use account::{Account, AccountKind, NewAccount};
pub use company::{Company, NewCompany, TaxRegime};
pub use cost_center::{CostCenter, NewCostCenter};
pub use customer::{Customer, CustomerKind, NewCustomer};
pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
