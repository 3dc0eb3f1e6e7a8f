//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Linear lookup of an entity by identifier.
///
/// Collections in a session are small, append-only vectors ordered by id, so a
/// scan is all that is needed.
pub fn find_by_id<'a, T: Entity>(rows: &'a [T], id: &T::Id) -> Option<&'a T> {
    rows.iter().find(|row| row.id() == id)
}
