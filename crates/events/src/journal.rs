//! Identifier allocation + append-only event journal.
//!
//! Identifiers are issued per [`EntityKind`], start at 1 and are never reused.
//! Multi-step mutations go through a [`JournalTxn`]: identifiers and events are
//! staged on a copy of the sequence and only become visible on `commit`, so a
//! failed operation leaves no gap and no orphan event behind.

use std::collections::BTreeMap;

use chrono::Utc;

use erpcore_core::{EntityKind, EventId, SequentialId};

use crate::event::JournalEvent;

/// Per-kind monotonically increasing counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    next: BTreeMap<EntityKind, u64>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next identifier for `kind`.
    pub fn next_id(&mut self, kind: EntityKind) -> u64 {
        let slot = self.next.entry(kind).or_insert(1);
        let id = *slot;
        *slot += 1;
        id
    }

    /// Typed variant of [`IdSequence::next_id`].
    pub fn allocate<I: SequentialId>(&mut self) -> I {
        I::from(self.next_id(I::KIND))
    }

    fn stamp(
        &mut self,
        description: String,
        entity_type: String,
        entity_id: Option<u64>,
    ) -> JournalEvent {
        JournalEvent {
            id: self.allocate::<EventId>(),
            timestamp: Utc::now(),
            entity_type,
            entity_id,
            description,
        }
    }
}

/// Owned journal: identifier sequence + committed events.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    sequence: IdSequence,
    events: Vec<JournalEvent>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, kind: EntityKind) -> u64 {
        self.sequence.next_id(kind)
    }

    pub fn allocate<I: SequentialId>(&mut self) -> I {
        self.sequence.allocate()
    }

    /// Append an event immediately. Never fails.
    pub fn append_event(
        &mut self,
        description: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: Option<u64>,
    ) -> JournalEvent {
        let event = self
            .sequence
            .stamp(description.into(), entity_type.into(), entity_id);
        self.events.push(event.clone());
        event
    }

    pub fn events(&self) -> &[JournalEvent] {
        &self.events
    }

    /// Start staging identifiers and events for one logical operation.
    pub fn begin(&mut self) -> JournalTxn<'_> {
        let sequence = self.sequence.clone();
        JournalTxn {
            journal: self,
            sequence,
            pending: Vec::new(),
        }
    }
}

/// Staged journal writes. Dropping without [`JournalTxn::commit`] discards them.
#[derive(Debug)]
pub struct JournalTxn<'a> {
    journal: &'a mut Journal,
    sequence: IdSequence,
    pending: Vec<JournalEvent>,
}

impl JournalTxn<'_> {
    pub fn next_id(&mut self, kind: EntityKind) -> u64 {
        self.sequence.next_id(kind)
    }

    pub fn allocate<I: SequentialId>(&mut self) -> I {
        self.sequence.allocate()
    }

    pub fn append_event(
        &mut self,
        description: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: Option<u64>,
    ) -> JournalEvent {
        let event = self
            .sequence
            .stamp(description.into(), entity_type.into(), entity_id);
        self.pending.push(event.clone());
        event
    }

    /// Publish staged identifiers and events; returns the committed events.
    pub fn commit(self) -> Vec<JournalEvent> {
        self.journal.sequence = self.sequence;
        self.journal.events.extend(self.pending.iter().cloned());
        tracing::trace!(events = self.pending.len(), "journal transaction committed");
        self.pending
    }
}
