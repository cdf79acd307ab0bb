//! Seed data loaded into the store at construction

use crate::core::entity::Entity;
use crate::core::error::{ConfigError, EntityError, GameReviewsResult};
use crate::entities::{Author, Game, Review};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Initial contents of the three collections
///
/// Loadable from YAML:
///
/// ```yaml
/// games:
///   - { id: "1", title: "Game 1", platform: [PC] }
/// authors:
///   - { id: "1", name: "Author 1", verified: true }
/// reviews:
///   - { id: "1", rating: 4, content: [Good], gameId: "1", authorId: "1" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub games: Vec<Game>,

    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl SeedData {
    /// Load seed data from a YAML file
    pub fn from_yaml_file(path: &str) -> GameReviewsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, Some(path))
    }

    /// Load seed data from a YAML string
    pub fn from_yaml_str(yaml: &str) -> GameReviewsResult<Self> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<&str>) -> GameReviewsResult<Self> {
        let seed: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: file.map(str::to_string),
            message: e.to_string(),
        })?;
        seed.check_unique_ids()?;
        Ok(seed)
    }

    /// Reject seed sets where an id repeats inside one collection
    pub fn check_unique_ids(&self) -> GameReviewsResult<()> {
        first_duplicate(&self.games)?;
        first_duplicate(&self.authors)?;
        first_duplicate(&self.reviews)?;
        Ok(())
    }

    /// The eight games, authors and reviews the service ships with
    ///
    /// Review `n` is written by author `n` about game `n`.
    pub fn builtin() -> Self {
        const GAMES: [(&str, &[&str]); 8] = [
            ("Game 1", &["PC", "PlayStation"]),
            ("Game 2", &["Xbox", "Nintendo Switch"]),
            ("Game 3", &["PC", "Xbox"]),
            ("Game 4", &["PlayStation", "Nintendo Switch"]),
            ("Game 5", &["PC"]),
            ("Game 6", &["PlayStation"]),
            ("Game 7", &["Xbox"]),
            ("Game 8", &["Nintendo Switch"]),
        ];
        const REVIEWS: [(i32, [&str; 2]); 8] = [
            (4, ["Good game", "Enjoyed playing it"]),
            (5, ["Amazing game", "Highly recommended"]),
            (3, ["Decent game", "Could be better"]),
            (4, ["Solid gameplay", "Great graphics"]),
            (2, ["Not impressed", "Needs improvement"]),
            (5, ["Fantastic!", "A must-play"]),
            (4, ["Enjoyed it", "Would play again"]),
            (3, ["Mixed feelings", "Some pros and cons"]),
        ];

        let games = GAMES
            .iter()
            .enumerate()
            .map(|(i, (title, platform))| Game {
                id: (i + 1).to_string(),
                title: title.to_string(),
                platform: to_strings(platform),
            })
            .collect();

        let authors = (1..=8)
            .map(|n| Author {
                id: n.to_string(),
                name: format!("Author {}", n),
                verified: n % 2 == 1,
            })
            .collect();

        let reviews = REVIEWS
            .iter()
            .enumerate()
            .map(|(i, (rating, content))| {
                let id = (i + 1).to_string();
                Review {
                    id: id.clone(),
                    rating: *rating,
                    content: to_strings(content),
                    game_id: id.clone(),
                    author_id: id,
                }
            })
            .collect();

        Self {
            games,
            authors,
            reviews,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn first_duplicate<T: Entity>(items: &[T]) -> GameReviewsResult<()> {
    let mut seen = HashSet::new();
    match items.iter().find(|e| !seen.insert(e.id())) {
        Some(dup) => Err(EntityError::AlreadyExists {
            entity_type: T::resource_name_singular().to_string(),
            id: dup.id().to_string(),
        }
        .into()),
        None => Ok(()),
    }
}
