use std::env;
use std::path::PathBuf;

use tasklist_config::HOME;

/// File name of the SQLite database inside the Tasklist directory
pub const DATABASE_FILE_NAME: &str = "tasklist.db";

/// Get the path to the Tasklist directory (~/.tasklist)
pub fn tasklist_dir() -> PathBuf {
    // HOME wins over the platform lookup so tests can redirect it
    if let Ok(home) = env::var(HOME) {
        PathBuf::from(home).join(".tasklist")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tasklist")
    }
}

/// Get the default database path (~/.tasklist/tasklist.db)
pub fn database_file() -> PathBuf {
    tasklist_dir().join(DATABASE_FILE_NAME)
}
