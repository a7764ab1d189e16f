// ABOUTME: Data layer and persistence for Tasklist
// ABOUTME: Storage errors, SQLite pool construction and schema migrations

pub mod db;
pub mod error;

pub use db::{connect, connect_in_memory, migrate, MIGRATOR};
pub use error::{StorageError, StorageResult};
