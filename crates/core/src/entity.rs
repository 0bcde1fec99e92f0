//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An order keeps its identity while its status changes; two orders with the
/// same contents but different ids are different entities.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
