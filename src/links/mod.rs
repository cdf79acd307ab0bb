//! Relationship navigation between games, authors and reviews

pub mod registry;
pub mod resolver;

pub use registry::{RELATIONS, RelationDefinition, RelationDirection, RelationRegistry};
pub use resolver::{Node, Related, RelationshipResolver};
