use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_profile::get_profile;
use super::handlers::health::health_check;
use super::handlers::health::readiness_check;
use super::handlers::metrics::metrics_export;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::handlers::tasks::create_task;
use super::handlers::tasks::delete_task;
use super::handlers::tasks::get_task;
use super::handlers::tasks::list_tasks;
use super::handlers::tasks::update_task;
use super::middleware::authenticate as auth_middleware;
use super::middleware::track_metrics;
use crate::domain::task::service::TaskService;
use crate::domain::user::service::AuthService;
use crate::metrics::HttpMetrics;
use crate::outbound::repositories::PostgresTaskRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub task_service: Arc<TaskService<PostgresTaskRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub metrics: Arc<HttpMetrics>,
    pub db: PgPool,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository>>,
    task_service: Arc<TaskService<PostgresTaskRepository>>,
    authenticator: Arc<Authenticator>,
    metrics: Arc<HttpMetrics>,
    db: PgPool,
) -> Router {
    let state = AppState {
        auth_service,
        task_service,
        authenticator,
        metrics,
        db,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(sign_up))
        .route("/api/auth/signin", post(sign_in))
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/metrics", get(metrics_export));

    let protected_routes = Router::new()
        .route("/api/users/me", get(get_profile))
        .route("/api/tasks", post(create_task))
        .route("/api/tasks", get(list_tasks))
        .route("/api/tasks/:task_id", get(get_task))
        .route("/api/tasks/:task_id", patch(update_task))
        .route("/api/tasks/:task_id", delete(delete_task))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(middleware::from_fn_with_state(state.clone(), track_metrics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
