use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::QueryBuilder;
use sqlx::Row;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskDescription;
use crate::domain::task::models::TaskFilter;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskPriority;
use crate::domain::task::models::TaskStatus;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::ports::TaskRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &PgRow) -> Result<Task, TaskError> {
        let id: uuid::Uuid = row
            .try_get("id")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let title: String = row
            .try_get("title")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let description: Option<String> = row
            .try_get("description")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let priority: i32 = row
            .try_get("priority")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let owner_id: uuid::Uuid = row
            .try_get("owner_id")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let created_at: chrono::DateTime<chrono::Utc> = row
            .try_get("created_at")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;
        let updated_at: chrono::DateTime<chrono::Utc> = row
            .try_get("updated_at")
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(Task {
            id: TaskId(id),
            title: TaskTitle::new(title)?,
            description: description.map(TaskDescription::new).transpose()?,
            status: TaskStatus::from_str(&status)?,
            priority: TaskPriority::new(priority)?,
            owner: UserId(owner_id),
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, description, status, priority, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(task.id.0)
        .bind(task.title.as_str())
        .bind(task.description.as_ref().map(|d| d.as_str()))
        .bind(task.status.as_str())
        .bind(task.priority.value())
        .bind(task.owner.0)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, status, priority, owner_id, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_task).transpose()
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
        filter: TaskFilter,
    ) -> Result<Vec<Task>, TaskError> {
        let mut query = QueryBuilder::<sqlx::Postgres>::new(
            "SELECT id, title, description, status, priority, owner_id, created_at, updated_at \
             FROM tasks WHERE owner_id = ",
        );
        query.push_bind(owner.0);

        if let Some(status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(status.as_str());
        }

        if let Some(min_priority) = filter.min_priority {
            query.push(" AND priority >= ");
            query.push_bind(min_priority.value());
        }

        query.push(" ORDER BY priority DESC, created_at DESC");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_task).collect()
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, status = $4, priority = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(task.id.0)
        .bind(task.title.as_str())
        .bind(task.description.as_ref().map(|d| d.as_str()))
        .bind(task.status.as_str())
        .bind(task.priority.value())
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(task.id.to_string()));
        }

        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
