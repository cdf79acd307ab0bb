//! # game-reviews
//!
//! An in-memory entity graph of games, authors and reviews, served over
//! GraphQL.
//!
//! ## Features
//!
//! - **Typed entities**: `Game`, `Author` and `Review` declared with [`impl_entity!`]
//! - **Ordered in-memory store**: one `RwLock` per collection, owned clones out
//! - **Relationship resolution**: foreign-key scans, typed or by relation name
//! - **Enforced id uniqueness**: duplicate inserts rejected, new ids collision-checked
//! - **GraphQL exposure**: `async-graphql` schema on an `axum` router
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use game_reviews::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(EntityStore::with_builtin_seed());
//! let resolver = RelationshipResolver::new(store.clone());
//! let mutations = MutationHandler::new(store.clone());
//!
//! let game = mutations.add_game(NewGame {
//!     title: "T".to_string(),
//!     platform: vec!["PC".to_string()],
//! })?;
//! assert!(resolver.game_reviews(&game)?.is_empty());
//!
//! // Or serve it
//! ServerBuilder::new().with_store(store).serve().await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod links;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, Entity, EntityError, FieldValue, GameReviewsError, GameReviewsResult,
        IdGenerator, MutationHandler, QueryFacade, StorageError, ValidationError,
    };

    // === Entities ===
    pub use crate::entities::{Author, Game, GamePatch, NewGame, Review};
    pub use crate::impl_entity;

    // === Links ===
    pub use crate::links::{
        Node, RELATIONS, Related, RelationDefinition, RelationDirection, RelationRegistry,
        RelationshipResolver,
    };

    // === Storage ===
    pub use crate::storage::{EntityStore, InMemoryCollection, SeedData};

    // === Config ===
    pub use crate::config::{AppConfig, ServerConfig};

    // === Server ===
    pub use crate::server::exposure::graphql::schema::{GameReviewsSchema, build_schema};
    pub use crate::server::{GraphQLExposure, RestExposure, ServerBuilder, ServerHost};
}
