//! Shared application state

use crate::{
    config::{Config, DatabaseBackend},
    db::{self, PostgresCatalogStore},
    Result,
};
use sqlx::PgPool;
use std::sync::Arc;
use trivia_core::{CatalogService, CatalogStore, InMemoryStore, RandomIndex, ThreadRandom};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: CatalogService,
    /// Present only for the postgres backend.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Build state for the configured backend, connecting and migrating when needed.
    pub async fn new(config: Config) -> Result<Self> {
        match config.database.backend {
            DatabaseBackend::Memory => {
                tracing::warn!("Using in-memory catalog store; data is lost on shutdown");
                let store = Arc::new(InMemoryStore::with_default_categories());
                Ok(Self::from_store(config, store))
            }
            DatabaseBackend::Postgres => {
                let pool = db::connect(&config.database).await?;
                if config.database.run_migrations {
                    db::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                let store = Arc::new(PostgresCatalogStore::new(pool.clone()));
                let mut state = Self::from_store(config, store);
                state.db_pool = Some(pool);
                Ok(state)
            }
        }
    }

    /// Build state over an existing store.
    pub fn from_store(config: Config, store: Arc<dyn CatalogStore>) -> Self {
        Self::from_store_with_random(config, store, Arc::new(ThreadRandom))
    }

    /// Build state over an existing store with a fixed random source.
    pub fn from_store_with_random(
        config: Config,
        store: Arc<dyn CatalogStore>,
        random: Arc<dyn RandomIndex>,
    ) -> Self {
        let catalog = CatalogService::with_random(store, random, config.catalog.options());
        Self {
            config: Arc::new(config),
            catalog,
            db_pool: None,
        }
    }
}
