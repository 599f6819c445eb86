//! API route handlers.

pub mod entangle;
pub mod motion;
pub mod search;
pub mod status;

use tesseract_ir::Circuit;

use crate::error::ApiError;
use crate::state::AppState;

/// Run a circuit for one shot and return the sampled bitstring.
pub(crate) async fn run_single_shot(state: &AppState, circuit: Circuit) -> Result<String, ApiError> {
    let job_id = state.backend.submit(&circuit, 1).await?;
    let result = state.backend.wait(&job_id).await?;
    result
        .single_bitstring()
        .map(str::to_string)
        .ok_or_else(|| ApiError::Internal("simulator returned no outcome".to_string()))
}
