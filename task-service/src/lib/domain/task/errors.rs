use thiserror::Error;

/// Error for TaskId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TaskTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskTitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for TaskDescription validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDescriptionError {
    #[error("Description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for TaskStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStatusError {
    #[error("Unknown task status: {0} (expected pending, in_progress, or completed)")]
    Unknown(String),
}

/// Error for TaskPriority validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskPriorityError {
    #[error("Priority out of range: must be {min}..={max}, got {actual}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Top-level error for all task operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid task ID: {0}")]
    InvalidTaskId(#[from] TaskIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TaskTitleError),

    #[error("Invalid description: {0}")]
    InvalidDescription(#[from] TaskDescriptionError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] TaskStatusError),

    #[error("Invalid priority: {0}")]
    InvalidPriority(#[from] TaskPriorityError),

    // Domain-level errors
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Task belongs to another user")]
    Forbidden,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
