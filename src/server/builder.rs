//! ServerBuilder for fluent construction of the HTTP server

use super::exposure::{GraphQLExposure, RestExposure};
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::storage::{EntityStore, SeedData};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the game-reviews HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(AppConfig::load(None)?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    store: Option<Arc<EntityStore>>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an existing store instead of seeding a new one
    ///
    /// Keeping a clone of the `Arc` lets callers inspect the store while the
    /// server runs.
    pub fn with_store(mut self, store: Arc<EntityStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the transport-agnostic host
    ///
    /// Without an explicit store, one is seeded from `config.seed_file`, or
    /// from the built-in fixtures when no seed file is configured.
    pub fn build_host(self) -> Result<ServerHost> {
        let store = match self.store {
            Some(store) => store,
            None => Arc::new(Self::seeded_store(&self.config)?),
        };
        Ok(ServerHost::new(store, self.config))
    }

    fn seeded_store(config: &AppConfig) -> Result<EntityStore> {
        match &config.seed_file {
            Some(path) => {
                tracing::info!(path = %path, "loading seed file");
                Ok(EntityStore::new(SeedData::from_yaml_file(path)?)?)
            }
            None => Ok(EntityStore::with_builtin_seed()),
        }
    }

    /// Build the complete router: health routes, GraphQL, tracing and CORS
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        Self::router_for(host)
    }

    /// Build the router for an existing host
    pub fn router_for(host: Arc<ServerHost>) -> Result<Router> {
        let app = RestExposure::build_router()
            .merge(GraphQLExposure::build_router(host)?)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());
        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `config.server`, serves until SIGINT or SIGTERM, then drains
    /// in-flight requests.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind_address();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server ready at http://{}/graphql", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
