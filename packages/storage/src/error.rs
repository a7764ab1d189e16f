use tasklist_core::ValidationError;
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Item {0} not found")]
    NotFound(i64),
}

pub type StorageResult<T> = Result<T, StorageError>;
