use std::str::FromStr;

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::TaskData;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::TaskFilter;
use crate::domain::task::models::TaskPriority;
use crate::domain::task::models::TaskStatus;
use crate::domain::task::ports::TaskServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Optional listing filters: `?status=pending&priority=5` means
/// "pending tasks with priority at least 5".
#[derive(Debug, Clone, Deserialize)]
pub struct ListTasksQuery {
    status: Option<String>,
    priority: Option<i32>,
}

impl ListTasksQuery {
    fn try_into_filter(self) -> Result<TaskFilter, TaskError> {
        let status = self
            .status
            .as_deref()
            .map(TaskStatus::from_str)
            .transpose()?;
        let min_priority = self.priority.map(TaskPriority::new).transpose()?;

        Ok(TaskFilter {
            status,
            min_priority,
        })
    }
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Query(query): Query<ListTasksQuery>,
) -> Result<ApiSuccess<Vec<TaskData>>, ApiError> {
    let filter = query.try_into_filter()?;

    state
        .task_service
        .list_tasks(auth_user.user_id, filter)
        .await
        .map_err(ApiError::from)
        .map(|tasks| {
            ApiSuccess::new(
                StatusCode::OK,
                tasks.iter().map(TaskData::from).collect::<Vec<_>>(),
            )
        })
}
