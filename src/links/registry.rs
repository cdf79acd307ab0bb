//! Relationship registry for graph navigation
//!
//! Maps `(entity_type, relation_name)` pairs to the foreign key that backs
//! them and the direction the key is followed in.

use crate::core::error::{EntityError, GameReviewsResult};

/// How a relationship is derived from a foreign key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationDirection {
    /// The parent holds the key: look up the single target whose id equals it
    Outgoing,
    /// The targets hold the key: collect every target whose key equals the parent id
    Incoming,
}

/// A named relationship from one entity type to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDefinition {
    /// Singular type of the parent (e.g., "review")
    pub source_type: &'static str,

    /// Field name as exposed to clients (e.g., "game")
    pub name: &'static str,

    /// Singular type of the related entities
    pub target_type: &'static str,

    /// Foreign key field, on the parent for `Outgoing`, on the target for `Incoming`
    pub foreign_key: &'static str,

    pub direction: RelationDirection,
}

/// The relationships of the game/review/author graph
pub const RELATIONS: [RelationDefinition; 4] = [
    RelationDefinition {
        source_type: "game",
        name: "reviews",
        target_type: "review",
        foreign_key: "game_id",
        direction: RelationDirection::Incoming,
    },
    RelationDefinition {
        source_type: "author",
        name: "reviews",
        target_type: "review",
        foreign_key: "author_id",
        direction: RelationDirection::Incoming,
    },
    RelationDefinition {
        source_type: "review",
        name: "game",
        target_type: "game",
        foreign_key: "game_id",
        direction: RelationDirection::Outgoing,
    },
    RelationDefinition {
        source_type: "review",
        name: "author",
        target_type: "author",
        foreign_key: "author_id",
        direction: RelationDirection::Outgoing,
    },
];

/// Lookup table over a set of relation definitions
///
/// Linear lookup; the graph has a handful of relations.
#[derive(Debug, Clone)]
pub struct RelationRegistry {
    relations: Vec<RelationDefinition>,
}

impl RelationRegistry {
    pub fn new(definitions: impl IntoIterator<Item = RelationDefinition>) -> Self {
        Self {
            relations: definitions.into_iter().collect(),
        }
    }

    /// Resolve a relation name for a given entity type
    pub fn resolve(
        &self,
        entity_type: &str,
        name: &str,
    ) -> GameReviewsResult<&RelationDefinition> {
        self.relations
            .iter()
            .find(|def| def.source_type == entity_type && def.name == name)
            .ok_or_else(|| {
                EntityError::UnknownRelation {
                    entity_type: entity_type.to_string(),
                    relation: name.to_string(),
                }
                .into()
            })
    }
}

impl Default for RelationRegistry {
    fn default() -> Self {
        Self::new(RELATIONS)
    }
}
