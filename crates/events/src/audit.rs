//! Manually recorded audit trail entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpcore_core::{AuditId, DomainResult, Entity, Validate, require_text};

/// Entity type recorded when the caller names none.
pub const GENERIC_ENTITY_TYPE: &str = "GENERIC";

/// Who did what to which record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: AuditId,
    pub timestamp: DateTime<Utc>,
    pub user_name: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<u64>,
}

impl Entity for AuditRecord {
    type Id = AuditId;

    fn id(&self) -> &AuditId {
        &self.id
    }
}

/// Request to record an audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewAudit {
    pub user_name: String,
    pub action: String,
    pub entity_type: Option<String>,
    /// `Some(0)` is treated the same as `None`.
    pub entity_id: Option<u64>,
}

impl Validate for NewAudit {
    fn validate(&self) -> DomainResult<()> {
        require_text("user_name", &self.user_name)?;
        require_text("action", &self.action)
    }
}

impl NewAudit {
    pub fn into_record(self, id: AuditId, timestamp: DateTime<Utc>) -> AuditRecord {
        let entity_type = self
            .entity_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ENTITY_TYPE.to_string());

        AuditRecord {
            id,
            timestamp,
            user_name: self.user_name,
            action: self.action,
            entity_type,
            entity_id: self.entity_id.filter(|id| *id > 0),
        }
    }
}
