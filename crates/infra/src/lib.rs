//! Infrastructure layer: the in-memory session store, its configuration and
//! the wiring between domain crates.

pub mod config;
pub mod session;


pub use config::SessionConfig;
pub use session::Session;
