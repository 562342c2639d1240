use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskFilter;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of TaskServicePort.
///
/// Owns the ownership rules; the repository stays a dumb store.
/// Generic over the repository for testability.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn create_task(
        &self,
        command: CreateTaskCommand,
        owner: UserId,
    ) -> Result<Task, TaskError> {
        let now = Utc::now();

        let task = Task {
            id: TaskId::new(),
            title: command.title,
            description: command.description,
            status: command.status.unwrap_or_default(),
            priority: command.priority.unwrap_or_default(),
            owner,
            created_at: now,
            updated_at: now,
        };

        let created_task = self.repository.create(task).await?;

        tracing::info!(task_id = %created_task.id, owner = %owner, "Task created");

        Ok(created_task)
    }

    async fn list_tasks(&self, owner: UserId, filter: TaskFilter) -> Result<Vec<Task>, TaskError> {
        self.repository.find_by_owner(owner, filter).await
    }

    async fn get_task(&self, id: TaskId, owner: UserId) -> Result<Task, TaskError> {
        // Foreign tasks read as absent: existence is not revealed
        match self.repository.find_by_id(id).await? {
            Some(task) if task.owner == owner => Ok(task),
            _ => Err(TaskError::NotFound(id.to_string())),
        }
    }

    async fn update_task(
        &self,
        id: TaskId,
        command: UpdateTaskCommand,
        owner: UserId,
    ) -> Result<Task, TaskError> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))?;

        if task.owner != owner {
            return Err(TaskError::Forbidden);
        }

        if let Some(new_title) = command.title {
            task.title = new_title;
        }

        if let Some(new_description) = command.description {
            task.description = Some(new_description);
        }

        if let Some(new_status) = command.status {
            task.status = new_status;
        }

        if let Some(new_priority) = command.priority {
            task.priority = new_priority;
        }

        task.updated_at = Utc::now();

        self.repository.update(task).await
    }

    async fn delete_task(&self, id: TaskId, owner: UserId) -> Result<(), TaskError> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))?;

        if task.owner != owner {
            return Err(TaskError::Forbidden);
        }

        self.repository.delete(id).await?;

        tracing::info!(task_id = %id, owner = %owner, "Task deleted");

        Ok(())
    }
}
