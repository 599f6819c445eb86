//! Data Transfer Objects for the node API.

use serde::{Deserialize, Serialize};

use crate::spacetime::Position;

/// Response from the status endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Node name.
    pub node: String,
    /// Operational status string.
    pub status: String,
    /// Current time (RFC 3339, UTC).
    pub time: String,
    /// Current spacetime position.
    pub position: Position,
    /// Advertised qubit count.
    pub qubits: u32,
    /// Whether the node runs without external connectivity.
    pub offline: bool,
}

/// Response from the entangle endpoint.
#[derive(Debug, Serialize)]
pub struct EntangleResponse {
    /// The sampled two-bit Bell measurement.
    pub bell_pair: String,
    /// Fixed achievement flag.
    pub entanglement: String,
}

/// Response from the GHZ endpoint.
#[derive(Debug, Serialize)]
pub struct GhzResponse {
    /// The sampled GHZ measurement.
    pub ghz_state: String,
    /// Number of qubits in the GHZ chain.
    pub qubits: u32,
}

/// Query parameters for the move endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct MoveParams {
    /// Time delta; defaults to 0.
    #[serde(default)]
    pub dt: f64,
    /// X delta; defaults to 0.
    #[serde(default)]
    pub dx: f64,
}

/// Response from the move endpoint.
#[derive(Debug, Serialize)]
pub struct MoveResponse {
    /// Position after applying the deltas.
    pub new_position: Position,
}

/// Query parameters for the Grover search endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    /// 2-bit search target; defaults to "11".
    pub target: Option<String>,
}

/// Response from the Grover search endpoint.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Value stored at the origin cell, if any.
    pub found_item: Option<i64>,
    /// The sampled search result bitstring.
    pub at_binary_index: String,
    /// Fixed achievement flag.
    pub quantum_speedup: String,
}
