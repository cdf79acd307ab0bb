//! Server host for transport-agnostic API exposure
//!
//! The host bundles the store and the services built on top of it. Every
//! exposure (GraphQL, health routes) is built from the same `Arc<ServerHost>`,
//! so all requests see one store.

use crate::config::AppConfig;
use crate::core::{MutationHandler, QueryFacade};
use crate::links::RelationshipResolver;
use crate::storage::EntityStore;
use std::sync::Arc;

/// Host context containing all service state
pub struct ServerHost {
    /// Effective configuration
    pub config: Arc<AppConfig>,

    /// The single store shared by every service below
    pub store: Arc<EntityStore>,

    /// Top-level lookups
    pub queries: QueryFacade,

    /// Relationship navigation for nested fields
    pub resolver: RelationshipResolver,

    /// Game mutations
    pub mutations: MutationHandler,
}

impl ServerHost {
    /// Wire every service to `store`
    pub fn new(store: Arc<EntityStore>, config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            queries: QueryFacade::new(store.clone()),
            resolver: RelationshipResolver::new(store.clone()),
            mutations: MutationHandler::new(store.clone()),
            store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NewGame;

    #[test]
    fn test_services_share_one_store() {
        let host = ServerHost::new(
            Arc::new(EntityStore::with_builtin_seed()),
            AppConfig::default(),
        );

        let created = host
            .mutations
            .add_game(NewGame {
                title: "Shared".to_string(),
                platform: vec!["PC".to_string()],
            })
            .unwrap();

        assert_eq!(host.queries.game(&created.id).unwrap(), Some(created.clone()));
        assert!(host.resolver.game_reviews(&created).unwrap().is_empty());
        assert_eq!(host.store.games().len().unwrap(), 9);
    }
}
