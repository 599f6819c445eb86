//! Entanglement demo endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use tesseract_ir::Circuit;

use crate::api::run_single_shot;
use crate::dto::{EntangleResponse, GhzResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Width of the GHZ chain served by the node.
const GHZ_QUBITS: u32 = 4;

/// GET /entangle - Sample one shot of a Bell pair.
pub async fn entangle(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EntangleResponse>, ApiError> {
    let circuit = Circuit::bell()?;
    let bell_pair = run_single_shot(&state, circuit).await?;

    Ok(Json(EntangleResponse {
        bell_pair,
        entanglement: "ACHIEVED".to_string(),
    }))
}

/// GET /ghz - Sample one shot of a four-qubit GHZ state.
pub async fn ghz(State(state): State<Arc<AppState>>) -> Result<Json<GhzResponse>, ApiError> {
    let circuit = Circuit::ghz(GHZ_QUBITS)?;
    let ghz_state = run_single_shot(&state, circuit).await?;

    Ok(Json(GhzResponse {
        ghz_state,
        qubits: GHZ_QUBITS,
    }))
}
