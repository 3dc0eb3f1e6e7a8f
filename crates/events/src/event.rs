use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use erpcore_core::{Entity, EventId};

/// An immutable fact recorded by the journal.
///
/// `entity_type` is free-form: most events use an [`erpcore_core::EntityKind`]
/// label, but callers may journal arbitrary kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEvent {
    pub id: EventId,
    pub timestamp: DateTime<Utc>,
    pub entity_type: String,
    pub entity_id: Option<u64>,
    pub description: String,
}

impl JournalEvent {
    /// Payload shape handed to external integrations (webhooks, brokers).
    pub fn to_webhook_payload(&self) -> serde_json::Value {
        json!({
            "event_id": self.id,
            "timestamp": self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            "entity_type": self.entity_type,
            "entity_id": self.entity_id,
            "description": self.description,
        })
    }
}

impl Entity for JournalEvent {
    type Id = EventId;

    fn id(&self) -> &EventId {
        &self.id
    }
}
