use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskFilter;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::user::models::UserId;

/// Port for task domain service operations.
///
/// Every operation is scoped to the authenticated caller: reads never see
/// another user's tasks, and writes against them fail.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a new task owned by the caller.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_task(
        &self,
        command: CreateTaskCommand,
        owner: UserId,
    ) -> Result<Task, TaskError>;

    /// List the caller's tasks, optionally filtered by status and minimum
    /// priority, ordered by priority (desc) then creation time (desc).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_tasks(&self, owner: UserId, filter: TaskFilter) -> Result<Vec<Task>, TaskError>;

    /// Retrieve one of the caller's tasks.
    ///
    /// # Errors
    /// * `NotFound` - No such task, or it belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn get_task(&self, id: TaskId, owner: UserId) -> Result<Task, TaskError>;

    /// Partially update one of the caller's tasks.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `Forbidden` - Task belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_task(
        &self,
        id: TaskId,
        command: UpdateTaskCommand,
        owner: UserId,
    ) -> Result<Task, TaskError>;

    /// Delete one of the caller's tasks.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `Forbidden` - Task belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn delete_task(&self, id: TaskId, owner: UserId) -> Result<(), TaskError>;
}

/// Persistence operations for the task aggregate.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist a new task.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Retrieve task by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError>;

    /// Retrieve tasks owned by a user, filtered and ordered for listing.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(
        &self,
        owner: UserId,
        filter: TaskFilter,
    ) -> Result<Vec<Task>, TaskError>;

    /// Update an existing task in storage.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// Remove a task from storage.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: TaskId) -> Result<(), TaskError>;
}
