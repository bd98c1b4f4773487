//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; they
/// have no identity of their own. `DatePeriod` is the canonical example here:
/// two periods with the same bounds are interchangeable. Entities (employee,
/// contract, invoice) are the opposite — see [`crate::entity::Entity`].
///
/// To "modify" a value object, build a new one. This keeps them trivially
/// shareable across threads and safe to copy into validation snapshots.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
