//! `erpcore-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the entity trait and the shared error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod validate;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{
    AccountId, AuditId, CompanyId, CostCenterId, CustomerId, EntityKind, EventId, LedgerEntryId,
    ProductId, SequentialId, SessionId, TaxRuleId, TitleId, UserId, WorkflowRuleId,
};
pub use validate::{Validate, require_text};
