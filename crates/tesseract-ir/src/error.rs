//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} not found in circuit (gate: {gate_name})")]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Gate name for context.
        gate_name: &'static str,
    },

    /// Classical bit not found in circuit.
    #[error("Classical bit {clbit} not found in circuit")]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
    },

    /// Gate requires different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: &'static str,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Gate name for context.
        gate_name: &'static str,
    },

    /// Search target is not a binary string of the expected width.
    #[error("Invalid search target '{target}': expected {width} binary digits")]
    InvalidSearchTarget {
        /// The offending target string.
        target: String,
        /// Required number of digits.
        width: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
