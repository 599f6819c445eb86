//! Simulator backend implementation.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use tesseract_hal::{
    Backend, Capabilities, Counts, ExecutionResult, HalError, HalResult, Job, JobId, JobStatus,
};
use tesseract_ir::Circuit;

use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator backend.
///
/// Executes circuits shot-by-shot on a dense statevector. Supports
/// circuits up to `max_qubits` qubits (limited by memory).
pub struct SimulatorBackend {
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Active jobs.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with the default qubit limit (20).
    pub fn new() -> Self {
        Self::with_max_qubits(20)
    }

    /// Create a simulator with a custom qubit limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        let instructions: Vec<_> = circuit.ops().cloned().collect();
        let mut counts = Counts::new();

        for _ in 0..shots {
            let mut sv = Statevector::new(num_qubits);
            for inst in &instructions {
                sv.apply(inst);
            }

            let outcome = sv.sample();
            counts.insert(sv.outcome_to_bitstring(outcome), 1);
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn is_available(&self) -> HalResult<bool> {
        Ok(true)
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }
        if shots == 0 || shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "shots must be in 1..={}, got {shots}",
                self.capabilities.max_shots
            )));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(self.name());

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            jobs.insert(job_id.0.clone(), SimJob { job, result: None });
        }

        debug!("Submitted job: {}", job_id);

        // The statevector runs in-process, so the job completes before
        // submit returns.
        let result = self.run_simulation(circuit, shots);

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(sim_job) = jobs.get_mut(&job_id.0) {
                sim_job.result = Some(result);
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Completed);
            }
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
            Ok(())
        } else {
            Err(HalError::JobNotFound(job_id.0.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulator_capabilities() {
        let backend = SimulatorBackend::new();
        let caps = backend.capabilities();

        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert!(backend.is_available().await.unwrap());
    }

    #[tokio::test]
    async fn test_simulator_bell_state() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::bell().unwrap();
        let job_id = backend.submit(&circuit, 1000).await.unwrap();

        let status = backend.status(&job_id).await.unwrap();
        assert!(status.is_success());

        let result = backend.result(&job_id).await.unwrap();
        assert_eq!(result.shots, 1000);

        // Bell state should produce only 00 and 11
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
    }

    #[tokio::test]
    async fn test_simulator_ghz_state() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::ghz(4).unwrap();
        let job_id = backend.submit(&circuit, 500).await.unwrap();

        let result = backend.result(&job_id).await.unwrap();

        // GHZ state should produce only all-zeros and all-ones
        let counts = &result.counts;
        assert_eq!(counts.get("0000") + counts.get("1111"), 500);
    }

    #[tokio::test]
    async fn test_simulator_grover_is_exact() {
        let backend = SimulatorBackend::new();

        for target in ["00", "01", "10", "11"] {
            let circuit = Circuit::grover(target).unwrap();
            let job_id = backend.submit(&circuit, 1).await.unwrap();
            let result = backend.wait(&job_id).await.unwrap();

            assert_eq!(result.single_bitstring(), Some(target));
        }
    }

    #[tokio::test]
    async fn test_simulator_too_many_qubits() {
        let backend = SimulatorBackend::with_max_qubits(5);

        let circuit = Circuit::with_size("test", 10, 0);
        let result = backend.submit(&circuit, 100).await;

        assert!(matches!(result, Err(HalError::CircuitTooLarge(_))));
    }

    #[tokio::test]
    async fn test_simulator_rejects_zero_shots() {
        let backend = SimulatorBackend::new();

        let circuit = Circuit::bell().unwrap();
        let result = backend.submit(&circuit, 0).await;

        assert!(matches!(result, Err(HalError::InvalidShots(_))));
    }

    #[tokio::test]
    async fn test_unknown_job() {
        let backend = SimulatorBackend::new();
        let missing = JobId::new("nope");

        assert!(matches!(
            backend.status(&missing).await,
            Err(HalError::JobNotFound(_))
        ));
        assert!(matches!(
            backend.result(&missing).await,
            Err(HalError::JobNotFound(_))
        ));
        assert!(matches!(
            backend.cancel(&missing).await,
            Err(HalError::JobNotFound(_))
        ));
    }
}
