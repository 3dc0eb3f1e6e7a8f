use serde::{Deserialize, Serialize};

use erpcore_core::{DomainResult, Entity, UserId, Validate, require_text};

/// Directory entry only; no access control is enforced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: String,
    pub is_admin: bool,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub role: String,
    pub is_admin: bool,
}

impl Validate for NewUser {
    fn validate(&self) -> DomainResult<()> {
        require_text("user name", &self.name)
    }
}

impl NewUser {
    pub fn into_record(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            role: self.role,
            is_admin: self.is_admin,
        }
    }
}
