//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every backend-owned record (inventory item, field, equipment, staff
/// member) has a stable id for its lifetime; generic helpers such as
/// id-based lookup in a fetched collection are written against this trait.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Find an entity by id in a fetched collection.
pub fn find_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<&E> {
    items.iter().find(|e| e.id() == id)
}
