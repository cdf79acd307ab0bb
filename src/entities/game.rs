//! Game entity and its mutation inputs

use serde::{Deserialize, Serialize};
use validator::Validate;

impl_entity!(
    /// A game that can be reviewed
    Game,
    "game",
    "games",
    {
        title: String,
        /// Platform names in display order
        platform: Vec<String>,
    }
);

impl Game {
    /// Build a game from creation input and an allocated id
    pub fn from_new(id: String, input: NewGame) -> Self {
        Self {
            id,
            title: input.title,
            platform: input.platform,
        }
    }

    /// Apply a partial edit; fields left as `None` keep their current value
    pub fn merged(&self, patch: &GamePatch) -> Self {
        Self {
            id: patch.id.clone().unwrap_or_else(|| self.id.clone()),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            platform: patch
                .platform
                .clone()
                .unwrap_or_else(|| self.platform.clone()),
        }
    }
}

/// Input for creating a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewGame {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "at least one platform is required"))]
    pub platform: Vec<String>,
}

/// Partial update of a game
///
/// Supplying `id` renames the game; the store rejects a rename onto an id
/// that is already taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct GamePatch {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "at least one platform is required"))]
    pub platform: Option<Vec<String>>,
}

impl GamePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
