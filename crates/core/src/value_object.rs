//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are defined entirely by their attribute values and carry no
/// identity of their own. A line item is the canonical example here: two
/// items with the same description, quantity, and price are the same value,
/// while two invoices with the same fields are still distinct entities.
///
/// Implementors are expected to be immutable in spirit: "modify" one by
/// building a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
