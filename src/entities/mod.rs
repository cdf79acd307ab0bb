//! Entity definitions: games, authors and reviews

#[macro_use]
pub mod macros;

pub mod author;
pub mod game;
pub mod review;

pub use author::Author;
pub use game::{Game, GamePatch, NewGame};
pub use review::Review;
