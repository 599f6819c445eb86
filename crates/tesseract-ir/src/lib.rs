//! Tesseract Circuit Intermediate Representation
//!
//! This crate provides the data structures for representing the fixed
//! quantum circuits the Tesseract node executes: Bell pairs, GHZ chains,
//! and small Grover searches.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical operands
//! - **Gates**: [`StandardGate`] for the built-in gate set (H, X, CX, CZ, ...)
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API with prebuilt
//!   [`Circuit::bell`], [`Circuit::ghz`], and [`Circuit::grover`] circuits
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use tesseract_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
