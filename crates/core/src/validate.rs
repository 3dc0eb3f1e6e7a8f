//! Boundary validation for untrusted record requests.

use crate::error::{DomainError, DomainResult};

/// A request that must be checked before any identifier is allocated for it.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

/// Reject empty or whitespace-only required text fields.
pub fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(())
}
