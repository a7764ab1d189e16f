// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool and item storage for handlers

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::info;

use tasklist_items::ItemStorage;
use tasklist_storage::StorageResult;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub item_storage: Arc<ItemStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let item_storage = Arc::new(ItemStorage::new(pool.clone()));
        Self { pool, item_storage }
    }

    /// Connect to the database file, defaulting to `~/.tasklist/tasklist.db`.
    ///
    /// The schema is left alone; call [`DbState::init_schema`] before serving.
    pub async fn init_with_path(database_path: Option<PathBuf>) -> StorageResult<Self> {
        let database_path = database_path.unwrap_or_else(tasklist_core::database_file);
        let pool = tasklist_storage::connect(&database_path).await?;
        Ok(Self::new(pool))
    }

    /// Private in-memory database, used by tests
    pub async fn in_memory() -> StorageResult<Self> {
        let pool = tasklist_storage::connect_in_memory().await?;
        Ok(Self::new(pool))
    }

    /// Create or upgrade the schema. Idempotent.
    pub async fn init_schema(&self) -> StorageResult<()> {
        tasklist_storage::migrate(&self.pool).await?;
        info!("Database schema is up to date");
        Ok(())
    }
}
