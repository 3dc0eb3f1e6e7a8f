//! Strongly-typed identifiers used across the domain.
//!
//! Records inside a session are numbered per [`EntityKind`] by the journal
//! (1, 2, 3, ...). The session itself is identified by a UUID.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Kinds of records that receive their own identifier sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Company,
    CostCenter,
    Account,
    Customer,
    Product,
    FinancialTitle,
    LedgerEntry,
    TaxRule,
    WorkflowRule,
    User,
    Audit,
    Event,
}

impl EntityKind {
    /// Label used as `entity_type` on journal events.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Company => "Company",
            EntityKind::CostCenter => "CostCenter",
            EntityKind::Account => "Account",
            EntityKind::Customer => "Customer",
            EntityKind::Product => "Product",
            EntityKind::FinancialTitle => "FinancialTitle",
            EntityKind::LedgerEntry => "LedgerEntry",
            EntityKind::TaxRule => "TaxRule",
            EntityKind::WorkflowRule => "WorkflowRule",
            EntityKind::User => "User",
            EntityKind::Audit => "Audit",
            EntityKind::Event => "Event",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier drawn from a per-kind integer sequence.
pub trait SequentialId: Copy + From<u64> + Into<u64> {
    const KIND: EntityKind;

    fn get(self) -> u64 {
        self.into()
    }
}

macro_rules! impl_seq_newtype {
    ($t:ident, $kind:expr) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(u64);

        impl $t {
            pub fn new(value: u64) -> Self {
                Self(value)
            }
        }

        impl SequentialId for $t {
            const KIND: EntityKind = $kind;
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_seq_newtype!(CompanyId, EntityKind::Company);
impl_seq_newtype!(CostCenterId, EntityKind::CostCenter);
impl_seq_newtype!(AccountId, EntityKind::Account);
impl_seq_newtype!(CustomerId, EntityKind::Customer);
impl_seq_newtype!(ProductId, EntityKind::Product);
impl_seq_newtype!(TitleId, EntityKind::FinancialTitle);
impl_seq_newtype!(LedgerEntryId, EntityKind::LedgerEntry);
impl_seq_newtype!(TaxRuleId, EntityKind::TaxRule);
impl_seq_newtype!(WorkflowRuleId, EntityKind::WorkflowRule);
impl_seq_newtype!(UserId, EntityKind::User);
impl_seq_newtype!(AuditId, EntityKind::Audit);
impl_seq_newtype!(EventId, EntityKind::Event);

/// Identifier of a session (the ownership boundary for all records).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("SessionId: {e}")))?;
        Ok(Self(uuid))
    }
}
