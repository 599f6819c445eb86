//! Node status endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;

use crate::dto::StatusResponse;
use crate::state::AppState;

/// Node name reported by the status endpoint.
pub const NODE_NAME: &str = "Tesseract-Node Ω";
/// Operational status string.
pub const NODE_STATUS: &str = "4D OPERATIONAL";

/// GET /status - Node status and current position.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let position = state.spacetime.read().await.position();

    Json(StatusResponse {
        node: NODE_NAME.to_string(),
        status: NODE_STATUS.to_string(),
        time: Utc::now().to_rfc3339(),
        position,
        qubits: state.config.qubits,
        offline: true,
    })
}
