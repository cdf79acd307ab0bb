//! Relationship resolution over the entity store
//!
//! Related entities are derived on demand by scanning the target collection
//! for foreign-key equality. Every call is O(n) in the size of that
//! collection and nothing is cached or batched, so a query touching `k`
//! parents costs `k` full scans. That is fine for a few dozen records and
//! would dominate at larger scale, where an index or dataloader-style
//! batching would be needed.

use crate::core::entity::Entity;
use crate::core::error::{EntityError, GameReviewsResult};
use crate::core::field::FieldValue;
use crate::entities::{Author, Game, Review};
use crate::links::registry::{RelationDefinition, RelationDirection, RelationRegistry};
use crate::storage::EntityStore;
use std::sync::Arc;

/// Any entity of the graph
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Game(Game),
    Author(Author),
    Review(Review),
}

impl Node {
    /// Singular type name, as used by the relation registry
    pub fn entity_type(&self) -> &'static str {
        match self {
            Node::Game(_) => Game::resource_name_singular(),
            Node::Author(_) => Author::resource_name_singular(),
            Node::Review(_) => Review::resource_name_singular(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Node::Game(g) => g.id(),
            Node::Author(a) => a.id(),
            Node::Review(r) => r.id(),
        }
    }

    pub fn field_value(&self, field: &str) -> Option<FieldValue> {
        match self {
            Node::Game(g) => g.field_value(field),
            Node::Author(a) => a.field_value(field),
            Node::Review(r) => r.field_value(field),
        }
    }
}

/// Result of following one relationship
#[derive(Debug, Clone, PartialEq)]
pub enum Related {
    /// A to-one relationship; `None` when the key points at nothing
    One(Option<Node>),
    /// A to-many relationship, in collection order
    Many(Vec<Node>),
}

impl Related {
    /// Flatten into a sequence: zero or one element for `One`
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Related::One(node) => node.into_iter().collect(),
            Related::Many(nodes) => nodes,
        }
    }
}

/// Derives related entities for a parent by foreign-key scan
#[derive(Clone)]
pub struct RelationshipResolver {
    store: Arc<EntityStore>,
    registry: Arc<RelationRegistry>,
}

impl RelationshipResolver {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self::with_registry(store, RelationRegistry::default())
    }

    pub fn with_registry(store: Arc<EntityStore>, registry: RelationRegistry) -> Self {
        Self {
            store,
            registry: Arc::new(registry),
        }
    }

    /// Reviews written about `game`
    pub fn game_reviews(&self, game: &Game) -> GameReviewsResult<Vec<Review>> {
        self.store.reviews().filter_by_foreign_key("game_id", &game.id)
    }

    /// Reviews written by `author`
    pub fn author_reviews(&self, author: &Author) -> GameReviewsResult<Vec<Review>> {
        self.store
            .reviews()
            .filter_by_foreign_key("author_id", &author.id)
    }

    /// Author of `review`, or `None` if that author no longer exists
    pub fn review_author(&self, review: &Review) -> GameReviewsResult<Option<Author>> {
        self.store.authors().find_by_id(&review.author_id)
    }

    /// Game reviewed by `review`, or `None` if that game was deleted
    pub fn review_game(&self, review: &Review) -> GameReviewsResult<Option<Game>> {
        self.store.games().find_by_id(&review.game_id)
    }

    /// Follow the relationship called `relation` from `parent`
    ///
    /// Fails with `UnknownRelation` when the parent's type has no such
    /// relationship. A dangling key is not an error: it yields `One(None)`.
    pub fn resolve(&self, parent: &Node, relation: &str) -> GameReviewsResult<Related> {
        let def = self.registry.resolve(parent.entity_type(), relation)?;

        tracing::debug!(
            entity_type = parent.entity_type(),
            id = parent.id(),
            relation,
            "resolving relationship"
        );

        match def.direction {
            RelationDirection::Incoming => Ok(Related::Many(self.scan_incoming(def, parent.id())?)),
            RelationDirection::Outgoing => {
                let key = parent
                    .field_value(def.foreign_key)
                    .and_then(|v| v.as_string().map(str::to_string));
                match key {
                    Some(key) => Ok(Related::One(self.find_target(def, &key)?)),
                    None => Ok(Related::One(None)),
                }
            }
        }
    }

    fn scan_incoming(
        &self,
        def: &RelationDefinition,
        parent_id: &str,
    ) -> GameReviewsResult<Vec<Node>> {
        let store = &self.store;
        let nodes = match def.target_type {
            "game" => store
                .games()
                .filter_by_foreign_key(def.foreign_key, parent_id)?
                .into_iter()
                .map(Node::Game)
                .collect(),
            "author" => store
                .authors()
                .filter_by_foreign_key(def.foreign_key, parent_id)?
                .into_iter()
                .map(Node::Author)
                .collect(),
            "review" => store
                .reviews()
                .filter_by_foreign_key(def.foreign_key, parent_id)?
                .into_iter()
                .map(Node::Review)
                .collect(),
            other => return Err(Self::unknown_target(def, other)),
        };
        Ok(nodes)
    }

    fn find_target(&self, def: &RelationDefinition, id: &str) -> GameReviewsResult<Option<Node>> {
        let store = &self.store;
        let node = match def.target_type {
            "game" => store.games().find_by_id(id)?.map(Node::Game),
            "author" => store.authors().find_by_id(id)?.map(Node::Author),
            "review" => store.reviews().find_by_id(id)?.map(Node::Review),
            other => return Err(Self::unknown_target(def, other)),
        };
        Ok(node)
    }

    fn unknown_target(
        def: &RelationDefinition,
        target: &str,
    ) -> crate::core::error::GameReviewsError {
        EntityError::UnknownRelation {
            entity_type: target.to_string(),
            relation: def.name.to_string(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::registry::RELATIONS;

    fn resolver() -> (Arc<EntityStore>, RelationshipResolver) {
        let store = Arc::new(EntityStore::with_builtin_seed());
        let resolver = RelationshipResolver::new(store.clone());
        (store, resolver)
    }

    #[test]
    fn test_game_reviews() {
        let (store, resolver) = resolver();
        let game = store.games().find_by_id("2").unwrap().unwrap();
        let reviews = resolver.game_reviews(&game).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, "2");
    }

    #[test]
    fn test_review_game_after_delete_is_empty() {
        let (store, resolver) = resolver();
        let review = store.reviews().find_by_id("3").unwrap().unwrap();
        store.games().remove_matching(|g| g.id == "3").unwrap();

        assert!(resolver.review_game(&review).unwrap().is_none());
        assert_eq!(
            resolver.resolve(&Node::Review(review), "game").unwrap(),
            Related::One(None)
        );
    }

    #[test]
    fn test_generic_resolve_matches_typed_operations() {
        let (store, resolver) = resolver();
        let author = store.authors().find_by_id("4").unwrap().unwrap();

        let typed: Vec<Node> = resolver
            .author_reviews(&author)
            .unwrap()
            .into_iter()
            .map(Node::Review)
            .collect();
        let generic = resolver.resolve(&Node::Author(author), "reviews").unwrap();
        assert_eq!(generic, Related::Many(typed));
    }

    #[test]
    fn test_resolve_unknown_relation() {
        let (store, resolver) = resolver();
        let game = store.games().find_by_id("1").unwrap().unwrap();
        let err = resolver.resolve(&Node::Game(game), "author").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_RELATION");
    }

    #[test]
    fn test_custom_registry_with_unknown_target() {
        let store = Arc::new(EntityStore::with_builtin_seed());
        let mut bogus = RELATIONS[2].clone();
        bogus.target_type = "platform";
        let resolver =
            RelationshipResolver::with_registry(store.clone(), RelationRegistry::new([bogus]));

        let review = store.reviews().find_by_id("1").unwrap().unwrap();
        assert!(resolver.resolve(&Node::Review(review), "game").is_err());
    }

    #[test]
    fn test_related_into_nodes() {
        assert!(Related::One(None).into_nodes().is_empty());
        assert_eq!(Related::Many(vec![]).into_nodes().len(), 0);
    }
}
