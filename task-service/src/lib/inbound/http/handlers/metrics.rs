use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::router::AppState;

/// Snapshot of the in-process metrics registry.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_requests_by_status: HashMap<String, u64>,
    pub http_request_duration_avg_ms: f64,
    pub db_pool_size: u32,
    pub db_pool_idle: u32,
    pub process_uptime_secs: u64,
}

pub async fn metrics_export(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        http_requests_total: state.metrics.requests_total(),
        http_requests_by_status: state.metrics.requests_by_status(),
        http_request_duration_avg_ms: state.metrics.average_duration_ms(),
        db_pool_size: state.db.size(),
        db_pool_idle: state.db.num_idle() as u32,
        process_uptime_secs: state.metrics.uptime_secs(),
    })
}
