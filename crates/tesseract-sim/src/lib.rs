//! Tesseract Local Statevector Simulator
//!
//! This crate provides the in-process quantum simulator the Tesseract node
//! runs its circuits on. It uses statevector simulation, which gives exact
//! results but is limited to ~20-25 qubits by memory.
//!
//! # Features
//!
//! - **Exact Simulation**: full statevector representation
//! - **All Node Gates**: supports every gate in `tesseract-ir`
//! - **Measurement Sampling**: probabilistic measurement with configurable shots
//! - **No External Dependencies**: pure Rust implementation
//!
//! # Example
//!
//! ```ignore
//! use tesseract_sim::SimulatorBackend;
//! use tesseract_hal::Backend;
//! use tesseract_ir::Circuit;
//!
//! # async fn run() -> tesseract_hal::HalResult<()> {
//! let backend = SimulatorBackend::new();
//!
//! let circuit = Circuit::bell()?;
//! let job_id = backend.submit(&circuit, 1000).await?;
//! let result = backend.wait(&job_id).await?;
//!
//! // Expect ~50% |00⟩ and ~50% |11⟩
//! println!("Results: {:?}", result.counts);
//! # Ok(())
//! # }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
