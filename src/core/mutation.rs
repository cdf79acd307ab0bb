//! Mutations against the game collection
//!
//! Games are the only collection that changes at runtime. Authors and reviews
//! stay as seeded, and deleting a game does not touch the reviews pointing at
//! it.

use crate::core::error::{GameReviewsError, GameReviewsResult};
use crate::entities::{Game, GamePatch, NewGame};
use crate::storage::EntityStore;
use std::sync::Arc;
use validator::Validate;

/// Applies create, update and delete operations to the game collection
#[derive(Clone)]
pub struct MutationHandler {
    store: Arc<EntityStore>,
}

impl MutationHandler {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// Remove every game with `id` and return the games that remain
    ///
    /// An unknown id is a no-op, so repeating the call is harmless.
    pub fn delete_game(&self, id: &str) -> GameReviewsResult<Vec<Game>> {
        let (removed, remaining) = self.store.games().remove_matching(|g| g.id == id)?;

        if removed == 0 {
            tracing::debug!(id, "delete_game: no game with this id");
        } else {
            tracing::info!(id, remaining = remaining.len(), "game deleted");
        }

        Ok(remaining)
    }

    /// Create a game under a freshly allocated id
    pub fn add_game(&self, input: NewGame) -> GameReviewsResult<Game> {
        if let Err(errors) = input.validate() {
            tracing::warn!(?errors, "add_game rejected");
            return Err(errors.into());
        }

        let game = self
            .store
            .insert_game_with_new_id(|id| Game::from_new(id, input))?;

        tracing::info!(id = %game.id, title = %game.title, "game created");
        Ok(game)
    }

    /// Merge `patch` over the game with `id` and return the result
    ///
    /// Fails with `NotFound` when no game has that id, leaving the collection
    /// unchanged.
    pub fn edit_game(&self, id: &str, patch: GamePatch) -> GameReviewsResult<Game> {
        if let Err(errors) = patch.validate() {
            tracing::warn!(id, ?errors, "edit_game rejected");
            return Err(errors.into());
        }

        let replaced = self
            .store
            .games()
            .replace_matching(|g| g.id == id, |g| g.merged(&patch))?;

        match replaced.into_iter().next() {
            Some(game) => {
                tracing::info!(id, new_id = %game.id, "game edited");
                Ok(game)
            }
            None => {
                tracing::warn!(id, "edit_game: no game with this id");
                Err(GameReviewsError::not_found("game", id))
            }
        }
    }
}
