//! Database layer - PostgreSQL store and migrations

pub mod store;

pub use store::{connect, run_migrations, PostgresCatalogStore};
