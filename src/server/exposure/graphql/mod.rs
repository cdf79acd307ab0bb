//! GraphQL API exposure
//!
//! Serves the schema from [`schema`] over HTTP. Execution itself is left to
//! `async-graphql`; this module only wires routes to it.

pub mod schema;

use super::super::host::ServerHost;
use anyhow::Result;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use schema::{GameReviewsSchema, build_schema};
use std::sync::Arc;

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// Routes:
    /// - `POST /graphql` - query and mutation endpoint
    /// - `GET /graphql/schema` - SDL export
    /// - `GET /graphql/playground` - playground UI, when enabled in config
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let playground = host.config.server.playground;
        let schema = build_schema(host);

        let mut router = Router::new()
            .route("/graphql", post(graphql_handler))
            .route("/graphql/schema", get(graphql_sdl));

        if playground {
            router = router.route("/graphql/playground", get(graphql_playground));
        }

        Ok(router.with_state(schema))
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    State(schema): State<GameReviewsSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!(operation = ?request.operation_name, "executing GraphQL request");
    schema.execute(request).await.into()
}

/// Handler for GraphQL playground UI
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Handler for GraphQL schema SDL export
async fn graphql_sdl(State(schema): State<GameReviewsSchema>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        schema.sdl(),
    )
}
