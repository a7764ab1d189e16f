// ABOUTME: Field validation for todo items
// ABOUTME: Enforces the non-blank and length rules on task descriptions

use thiserror::Error;

/// Maximum length of a task description, in characters
pub const MAX_TASK_LENGTH: usize = 128;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task cannot be empty")]
    EmptyTask,
    #[error("Task exceeds maximum length of {max} characters (got {actual})")]
    TaskTooLong { max: usize, actual: usize },
    #[error("Task contains invalid null bytes")]
    NullByte,
}

/// Validate a task description.
///
/// The text is stored as given; surrounding whitespace only matters for the
/// blank check.
pub fn validate_task(task: &str) -> Result<(), ValidationError> {
    if task.trim().is_empty() {
        return Err(ValidationError::EmptyTask);
    }

    let length = task.chars().count();
    if length > MAX_TASK_LENGTH {
        return Err(ValidationError::TaskTooLong {
            max: MAX_TASK_LENGTH,
            actual: length,
        });
    }

    if task.contains('\0') {
        return Err(ValidationError::NullByte);
    }

    Ok(())
}
