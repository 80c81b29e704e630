//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, error};

use crate::{
    render::{render_frame, Frame},
    state::{AppState, Command},
};
use super::responses::{ApiResponse, FrameQuery, HealthResponse, StatusResponse};

async fn run_command(
    state: &AppState,
    command: Command,
    message: &str,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.dispatch(command).await {
        Ok(snapshot) => Ok(Json(ApiResponse::new(message.to_string(), snapshot))),
        Err(e) => {
            error!("Failed to apply {} command: {}", command, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start or resume the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, Command::Start, "Countdown start requested").await
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, Command::Pause, "Countdown pause requested").await
}

/// Handle POST /restart - Reset the countdown to its full length
pub async fn restart_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    run_command(&state, Command::Restart, "Countdown restarted").await
}

/// Handle GET /status - Return the latest snapshot and server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer: state.get_snapshot(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /frame - Render the latest snapshot at the requested size
pub async fn frame_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FrameQuery>,
) -> Result<Json<Frame>, StatusCode> {
    let width = query.width.unwrap_or(state.frame_width);
    let height = query.height.unwrap_or(state.frame_height);

    if !is_valid_extent(width) || !is_valid_extent(height) {
        debug!("Rejecting frame request with size {}x{}", width, height);
        return Err(StatusCode::BAD_REQUEST);
    }

    let snapshot = state.get_snapshot();
    Ok(Json(render_frame(&snapshot, width, height)))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn is_valid_extent(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
