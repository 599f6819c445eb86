//! Application state for the node server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use tesseract_hal::Backend;
use tesseract_sim::SimulatorBackend;

use crate::memory::{HyperMemory, seed_demo_cells};
use crate::spacetime::Spacetime4D;

/// Node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Qubit count advertised by the status endpoint.
    pub qubits: u32,
    /// Period of the background drift task.
    pub drift_interval: Duration,
    /// Qubit ceiling for the local simulator.
    pub max_sim_qubits: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 8888).into(),
            qubits: 16,
            drift_interval: Duration::from_secs(10),
            max_sim_qubits: 20,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The node's 4-D coordinate.
    pub spacetime: RwLock<Spacetime4D>,
    /// Coordinate-keyed storage, seeded at startup.
    pub memory: RwLock<HyperMemory>,
    /// Circuit execution backend.
    pub backend: Arc<dyn Backend>,
    /// Node configuration.
    pub config: NodeConfig,
}

impl AppState {
    /// Create application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(NodeConfig::default())
    }

    /// Create application state with custom configuration.
    ///
    /// Seeds the demo memory cells and wires up the local simulator.
    pub fn with_config(config: NodeConfig) -> Self {
        let mut spacetime = Spacetime4D::new();
        let mut memory = HyperMemory::new();
        seed_demo_cells(&mut spacetime, &mut memory);

        let backend = Arc::new(SimulatorBackend::with_max_qubits(config.max_sim_qubits));

        Self {
            spacetime: RwLock::new(spacetime),
            memory: RwLock::new(memory),
            backend,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spacetime::Position;

    #[tokio::test]
    async fn test_state_is_seeded() {
        let state = AppState::new();

        assert_eq!(state.memory.read().await.len(), 4);
        assert_eq!(
            state.spacetime.read().await.position(),
            Position([0.0, 6.0, 0.0, 0.0])
        );
        assert!(state.backend.capabilities().is_simulator);
    }
}
