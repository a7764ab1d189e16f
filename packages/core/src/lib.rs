// ABOUTME: Core paths and validation rules for Tasklist
// ABOUTME: Foundational package shared by the storage, items and api packages

pub mod constants;
pub mod validation;

// Re-export constants
pub use constants::{database_file, tasklist_dir, DATABASE_FILE_NAME};

// Re-export validation
pub use validation::{validate_task, ValidationError, MAX_TASK_LENGTH};
