//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Employees, contracts and invoices are entities: two records with the same
/// id are the same thing regardless of field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
