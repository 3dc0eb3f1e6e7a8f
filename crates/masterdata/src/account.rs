use serde::{Deserialize, Serialize};

use erpcore_core::{AccountId, DomainResult, Entity, Validate, require_text};

/// High-level account kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

/// Chart-of-accounts entry.
///
/// `code` is human-assigned (e.g. "1.1.1.01") and unique within a session;
/// postings reference accounts by code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub code: String,
    pub name: String,
    pub kind: AccountKind,
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &AccountId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub code: String,
    pub name: String,
    pub kind: AccountKind,
}

impl Validate for NewAccount {
    fn validate(&self) -> DomainResult<()> {
        require_text("account code", &self.code)
    }
}

impl NewAccount {
    pub fn into_record(self, id: AccountId) -> Account {
        Account {
            id,
            code: self.code,
            name: self.name,
            kind: self.kind,
        }
    }
}
