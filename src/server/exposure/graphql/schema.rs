//! GraphQL schema: object types, inputs and the query/mutation roots
//!
//! Object types wrap the domain entities. Relationship fields (`Game.reviews`,
//! `Author.reviews`, `Review.game`, `Review.author`) are resolved lazily by the
//! engine, one parent at a time, through the host's `RelationshipResolver`.

use crate::core::error::{GameReviewsError, GameReviewsResult, ValidationError};
use crate::entities::{Author, Game, GamePatch, NewGame, Review};
use crate::server::host::ServerHost;
use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, ID, InputObject, Object, Result, Schema,
};
use std::sync::Arc;

pub type GameReviewsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around a host
pub fn build_schema(host: Arc<ServerHost>) -> GameReviewsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(host)
        .finish()
}

fn host<'a>(ctx: &Context<'a>) -> Result<&'a Arc<ServerHost>> {
    ctx.data::<Arc<ServerHost>>()
}

/// Attach the error code as a GraphQL extension
fn extended<T>(result: GameReviewsResult<T>) -> Result<T> {
    result.map_err(|e| e.extend())
}

fn games(items: Vec<Game>) -> Vec<GameNode> {
    items.into_iter().map(GameNode).collect()
}

fn reviews(items: Vec<Review>) -> Vec<ReviewNode> {
    items.into_iter().map(ReviewNode).collect()
}

// =============================================================================
// Object types
// =============================================================================

pub struct GameNode(pub Game);

#[Object(name = "Game")]
impl GameNode {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn platform(&self) -> Vec<String> {
        self.0.platform.clone()
    }

    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<ReviewNode>>> {
        let found = extended(host(ctx)?.resolver.game_reviews(&self.0))?;
        Ok(Some(reviews(found)))
    }
}

pub struct AuthorNode(pub Author);

#[Object(name = "Author")]
impl AuthorNode {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn verified(&self) -> bool {
        self.0.verified
    }

    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<ReviewNode>>> {
        let found = extended(host(ctx)?.resolver.author_reviews(&self.0))?;
        Ok(Some(reviews(found)))
    }
}

pub struct ReviewNode(pub Review);

#[Object(name = "Review")]
impl ReviewNode {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn rating(&self) -> i32 {
        self.0.rating
    }

    async fn content(&self) -> Vec<String> {
        self.0.content.clone()
    }

    /// Null when the game was deleted after the review was written
    async fn game(&self, ctx: &Context<'_>) -> Result<Option<GameNode>> {
        Ok(extended(host(ctx)?.resolver.review_game(&self.0))?.map(GameNode))
    }

    /// Null when the author no longer exists
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<AuthorNode>> {
        Ok(extended(host(ctx)?.resolver.review_author(&self.0))?.map(AuthorNode))
    }
}

// =============================================================================
// Inputs
// =============================================================================

#[derive(Debug, InputObject)]
pub struct AddGameInput {
    pub title: String,
    pub platform: Vec<String>,
}

impl From<AddGameInput> for NewGame {
    fn from(input: AddGameInput) -> Self {
        NewGame {
            title: input.title,
            platform: input.platform,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct EditGameInput {
    pub id: Option<ID>,
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl From<EditGameInput> for GamePatch {
    fn from(input: EditGameInput) -> Self {
        GamePatch {
            id: input.id.map(|id| id.0),
            title: input.title,
            platform: input.platform,
        }
    }
}

// =============================================================================
// Roots
// =============================================================================

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<GameNode>> {
        Ok(games(extended(host(ctx)?.queries.games())?))
    }

    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<GameNode>> {
        Ok(extended(host(ctx)?.queries.game(&id))?.map(GameNode))
    }

    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<ReviewNode>> {
        Ok(reviews(extended(host(ctx)?.queries.reviews())?))
    }

    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ReviewNode>> {
        Ok(extended(host(ctx)?.queries.review(&id))?.map(ReviewNode))
    }

    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<AuthorNode>> {
        let found = extended(host(ctx)?.queries.authors())?;
        Ok(found.into_iter().map(AuthorNode).collect())
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_game(
        &self,
        ctx: &Context<'_>,
        game: Option<AddGameInput>,
    ) -> Result<Option<GameNode>> {
        let Some(game) = game else {
            let missing: GameReviewsError = ValidationError::MissingArgument {
                argument: "game".to_string(),
            }
            .into();
            return Err(missing.extend());
        };
        let created = extended(host(ctx)?.mutations.add_game(game.into()))?;
        Ok(Some(GameNode(created)))
    }

    async fn edit_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edit: EditGameInput,
    ) -> Result<Option<GameNode>> {
        let edited = extended(host(ctx)?.mutations.edit_game(&id, edit.into()))?;
        Ok(Some(GameNode(edited)))
    }

    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<Vec<GameNode>> {
        Ok(games(extended(host(ctx)?.mutations.delete_game(&id))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::storage::EntityStore;
    use serde_json::{Value, json};

    fn schema() -> GameReviewsSchema {
        let host = ServerHost::new(
            Arc::new(EntityStore::with_builtin_seed()),
            AppConfig::default(),
        );
        build_schema(Arc::new(host))
    }

    async fn run(schema: &GameReviewsSchema, query: &str) -> async_graphql::Response {
        schema.execute(query).await
    }

    fn data(response: async_graphql::Response) -> Value {
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_nested_relationships() {
        let schema = schema();
        let response = run(
            &schema,
            r#"{ review(id: "2") { rating game { title } author { name verified reviews { id } } } }"#,
        )
        .await;

        assert_eq!(
            data(response),
            json!({
                "review": {
                    "rating": 5,
                    "game": { "title": "Game 2" },
                    "author": { "name": "Author 2", "verified": false, "reviews": [{ "id": "2" }] }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_missing_game_is_null() {
        let schema = schema();
        let response = run(&schema, r#"{ game(id: "404") { id } }"#).await;
        assert_eq!(data(response), json!({ "game": null }));
    }

    #[tokio::test]
    async fn test_edit_unknown_game_reports_code() {
        let schema = schema();
        let response = run(
            &schema,
            r#"mutation { editGame(id: "404", edit: { title: "X" }) { id } }"#,
        )
        .await;

        assert_eq!(response.errors.len(), 1);
        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(
            code,
            Some(async_graphql::Value::String("ENTITY_NOT_FOUND".to_string()))
        );
    }

    #[tokio::test]
    async fn test_add_game_without_input() {
        let schema = schema();
        let response = run(&schema, "mutation { addGame { id } }").await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("game"));
    }

    #[tokio::test]
    async fn test_orphaned_review_game_is_null() {
        let schema = schema();
        data(run(&schema, r#"mutation { deleteGame(id: "1") { id } }"#).await);

        let response = run(&schema, r#"{ review(id: "1") { id game { id } } }"#).await;
        assert_eq!(
            data(response),
            json!({ "review": { "id": "1", "game": null } })
        );
    }

    #[test]
    fn test_sdl_uses_canonical_field_names() {
        let sdl = schema().sdl();
        assert!(sdl.contains("platform: [String!]!"));
        assert!(sdl.contains("content: [String!]!"));
        assert!(sdl.contains("input AddGameInput"));
        assert!(sdl.contains("input EditGameInput"));
        assert!(sdl.contains("type Mutation"));
        assert!(!sdl.contains("plartform"));
        assert!(sdl.contains("games: [Game!]!"));
        assert!(sdl.contains("reviews: [Review!]!"));
        assert!(sdl.contains("authors: [Author!]!"));
        assert!(sdl.contains("deleteGame(id: ID!): [Game!]!"));
    }
}
