//! Startup wiring for the dog store.

use std::sync::Arc;

use configs::{DatabaseConfig, StoreBackend};
use migration::MigratorTrait;
use tracing::{info, warn};

use crate::dog::repository::{mock::MemoryDogStore, DogStore, SeaOrmDogStore};

/// Build the store selected by `[database].backend`.
///
/// For Postgres this opens the pool and, when `auto_migrate` is set, applies
/// pending migrations before returning.
pub async fn build_store(cfg: &DatabaseConfig) -> anyhow::Result<Arc<dyn DogStore>> {
    match cfg.backend {
        StoreBackend::Memory => {
            warn!(backend = "memory", "using in-memory dog store; records are lost on exit");
            Ok(Arc::new(MemoryDogStore::new()))
        }
        StoreBackend::Postgres => {
            let db = models::db::connect_with_config(cfg).await?;
            if cfg.auto_migrate {
                migration::Migrator::up(&db, None).await?;
                info!(event = "migrations_applied", "database schema up to date");
            }
            Ok(Arc::new(SeaOrmDogStore::new(db)))
        }
    }
}
