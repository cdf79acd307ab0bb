//! Top-level read entry points

use crate::core::error::GameReviewsResult;
use crate::entities::{Author, Game, Review};
use crate::storage::EntityStore;
use std::sync::Arc;

/// Top-level lookups handed to the execution engine
///
/// Results are bare entities. Nested relationship fields are left to the
/// engine, which asks the [`RelationshipResolver`](crate::links::RelationshipResolver)
/// for them per parent.
#[derive(Clone)]
pub struct QueryFacade {
    store: Arc<EntityStore>,
}

impl QueryFacade {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    pub fn games(&self) -> GameReviewsResult<Vec<Game>> {
        self.store.games().list_all()
    }

    /// `None` when no game has this id; absence is not an error
    pub fn game(&self, id: &str) -> GameReviewsResult<Option<Game>> {
        self.store.games().find_by_id(id)
    }

    pub fn authors(&self) -> GameReviewsResult<Vec<Author>> {
        self.store.authors().list_all()
    }

    pub fn reviews(&self) -> GameReviewsResult<Vec<Review>> {
        self.store.reviews().list_all()
    }

    pub fn review(&self, id: &str) -> GameReviewsResult<Option<Review>> {
        self.store.reviews().find_by_id(id)
    }
}
