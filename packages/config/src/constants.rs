// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Tasklist

// Server Configuration
pub const TASKLIST_HOST: &str = "TASKLIST_HOST";
pub const TASKLIST_PORT: &str = "TASKLIST_PORT";
pub const PORT: &str = "PORT"; // Legacy

// Storage Configuration
pub const TASKLIST_DATABASE_PATH: &str = "TASKLIST_DATABASE_PATH";

// Views & Static Assets
pub const TASKLIST_STATIC_DIR: &str = "TASKLIST_STATIC_DIR";

// CORS Configuration
pub const TASKLIST_CORS_ORIGIN: &str = "TASKLIST_CORS_ORIGIN";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// System Environment Variables
pub const HOME: &str = "HOME";
