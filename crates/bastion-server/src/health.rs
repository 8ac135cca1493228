use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use bastion_core::Environment;
use http::StatusCode;
use serde::Serialize;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// State for the root status endpoint
#[derive(Debug, Clone, Copy)]
pub struct StatusState {
    pub environment: Environment,
    pub started_at: Instant,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    message: &'static str,
    environment: Environment,
    uptime: String,
    timestamp: String,
}

/// `GET /`: report that the server is up, with environment and uptime
pub async fn status_handler(State(state): State<StatusState>) -> impl IntoResponse {
    let body = StatusBody {
        message: "Server is running",
        environment: state.environment,
        uptime: format!("{:.2} seconds", state.started_at.elapsed().as_secs_f64()),
        timestamp: jiff::Timestamp::now().to_string(),
    };

    Json(body)
}
