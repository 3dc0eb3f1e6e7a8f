//! Identifier journal, domain events and audit records.
//!
//! Every mutation in a session draws its identifier from the [`Journal`] and
//! leaves an immutable [`JournalEvent`] behind. Committed events can be fanned
//! out to subscribers through an [`EventBus`].

pub mod audit;
pub mod bus;
pub mod event;
pub mod in_memory_bus;
pub mod journal;

pub use audit::{AuditRecord, GENERIC_ENTITY_TYPE, NewAudit};
pub use bus::{EventBus, Subscription};
pub use event::JournalEvent;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use journal::{IdSequence, Journal, JournalTxn};
