//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity. A validated [`Sku`](crate::Sku) is the
/// canonical example here: two SKUs holding the same text are the same SKU.
///
/// Implementors are expected to be immutable; "changing" one means building a
/// new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
