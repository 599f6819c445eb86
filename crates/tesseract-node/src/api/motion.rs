//! Spacetime movement endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use crate::dto::{MoveParams, MoveResponse};
use crate::state::AppState;

/// GET /move - Shift the node's position in time and x.
///
/// The y and z axes are not reachable from this route; their deltas are
/// fixed at zero.
pub async fn shift(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MoveParams>,
) -> Json<MoveResponse> {
    let new_position = state
        .spacetime
        .write()
        .await
        .shift(params.dt, params.dx, 0.0, 0.0);

    Json(MoveResponse { new_position })
}
