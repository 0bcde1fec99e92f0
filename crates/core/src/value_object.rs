//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A product line
/// in one order and an identical line in another order are the same product:
/// that equality is what lets products be counted and grouped.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (`Product`, `Money`)
/// - **Entity**: Has identity (`Order`, keyed by `OrderId`)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Product {
///     name: String,
///     price: Money,
///     category: String,
/// }
///
/// impl ValueObject for Product {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
