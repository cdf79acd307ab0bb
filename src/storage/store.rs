//! Aggregated store for all entities
//!
//! The store is an explicit object: built once at startup, shared through an
//! `Arc`, and dropped at shutdown. There is no ambient global state.

use super::in_memory::InMemoryCollection;
use super::seed::SeedData;
use crate::core::entity::Entity;
use crate::core::error::GameReviewsResult;
use crate::core::id::IdGenerator;
use crate::entities::{Author, Game, Review};

/// Holder of the three typed collections
pub struct EntityStore {
    games: InMemoryCollection<Game>,
    authors: InMemoryCollection<Author>,
    reviews: InMemoryCollection<Review>,
    game_ids: IdGenerator,
}

impl EntityStore {
    /// Build a store from seed data, rejecting duplicate ids
    pub fn new(seed: SeedData) -> GameReviewsResult<Self> {
        seed.check_unique_ids()?;
        Ok(Self::from_seed(seed))
    }

    /// Store holding the built-in fixtures
    pub fn with_builtin_seed() -> Self {
        Self::from_seed(SeedData::builtin())
    }

    fn from_seed(seed: SeedData) -> Self {
        let game_ids = IdGenerator::after(seed.games.iter().map(|g| g.id()));

        tracing::debug!(
            games = seed.games.len(),
            authors = seed.authors.len(),
            reviews = seed.reviews.len(),
            "seeding entity store"
        );

        Self {
            games: InMemoryCollection::from_vec(seed.games),
            authors: InMemoryCollection::from_vec(seed.authors),
            reviews: InMemoryCollection::from_vec(seed.reviews),
            game_ids,
        }
    }

    /// Store with three empty collections
    pub fn empty() -> Self {
        Self {
            games: InMemoryCollection::new(),
            authors: InMemoryCollection::new(),
            reviews: InMemoryCollection::new(),
            game_ids: IdGenerator::default(),
        }
    }

    pub fn games(&self) -> &InMemoryCollection<Game> {
        &self.games
    }

    pub fn authors(&self) -> &InMemoryCollection<Author> {
        &self.authors
    }

    pub fn reviews(&self) -> &InMemoryCollection<Review> {
        &self.reviews
    }

    /// Append a game built around a freshly allocated, unused id
    ///
    /// Allocation and append happen under one write lock.
    pub fn insert_game_with_new_id(
        &self,
        build: impl FnOnce(String) -> Game,
    ) -> GameReviewsResult<Game> {
        self.games.insert_with(|existing| {
            let id = self
                .game_ids
                .next_unused(|candidate| existing.iter().any(|g| g.id == candidate));
            build(id)
        })
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::with_builtin_seed()
    }
}
