//! Entity trait defining the common abstraction over Games, Authors and Reviews

use crate::core::field::FieldValue;

/// Base trait for every entity held by the store.
///
/// All entities carry a string identifier that is unique within their own
/// collection. Other fields are reachable by name through
/// [`field_value`](Entity::field_value), which is how foreign keys are
/// compared without the store knowing the concrete type.
///
/// Implementations are normally generated with [`impl_entity!`](crate::impl_entity).
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "games", "reviews")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "game", "review")
    fn resource_name_singular() -> &'static str;

    /// Unique identifier of this entity instance
    fn id(&self) -> &str;

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
