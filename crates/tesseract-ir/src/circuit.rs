//! High-level circuit builder API.

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// This provides a high-level API for building quantum circuits,
/// with convenient methods for common gates and operations. Instructions
/// are kept in insertion order; backends replay them as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits in the circuit.
    num_qubits: u32,
    /// Number of classical bits in the circuit.
    num_clbits: u32,
    /// Instructions in application order.
    ops: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: 0,
            num_clbits: 0,
            ops: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            ops: vec![],
        }
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.num_clbits);
        self.num_clbits += 1;
        id
    }

    /// Apply an instruction, validating its operands.
    fn apply(&mut self, instruction: Instruction) -> IrResult<()> {
        let gate_name = instruction.name();

        if let InstructionKind::Gate(gate) = instruction.kind {
            let got = instruction.qubits.len() as u32;
            if got != gate.num_qubits() {
                return Err(IrError::QubitCountMismatch {
                    gate_name,
                    expected: gate.num_qubits(),
                    got,
                });
            }
        }

        for (i, qubit) in instruction.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit: *qubit,
                    gate_name,
                });
            }
            if instruction.qubits[..i].contains(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit: *qubit,
                    gate_name,
                });
            }
        }

        for clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound { clbit: *clbit });
            }
        }

        self.ops.push(instruction);
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::H, [qubit]))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::X, [qubit]))?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Y, [qubit]))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Z, [qubit]))?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::S, [qubit]))?;
        Ok(self)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Sdg, [qubit]))?;
        Ok(self)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::T, [qubit]))?;
        Ok(self)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Tdg, [qubit]))?;
        Ok(self)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CX, [control, target]))?;
        Ok(self)
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CY, [control, target]))?;
        Ok(self)
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CZ, [control, target]))?;
        Ok(self)
    }

    /// Apply controlled-Hadamard gate.
    pub fn ch(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CH, [control, target]))?;
        Ok(self)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::Swap, [q1, q2]))?;
        Ok(self)
    }

    // =========================================================================
    // Three-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CCX, [c1, c2, target]))?;
        Ok(self)
    }

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: QubitId, t1: QubitId, t2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CSwap, [control, t1, t2]))?;
        Ok(self)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Measure all qubits to corresponding classical bits.
    ///
    /// Allocates classical bits as needed so every qubit has one.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        while self.num_clbits < self.num_qubits {
            self.add_clbit();
        }
        for i in 0..self.num_qubits {
            self.apply(Instruction::measure(QubitId(i), ClbitId(i)))?;
        }
        Ok(self)
    }

    /// Reset a qubit to |0⟩.
    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::reset(qubit))?;
        Ok(self)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.apply(Instruction::barrier(qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the number of instructions.
    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    /// Iterate over the instructions in application order.
    pub fn ops(&self) -> impl Iterator<Item = &Instruction> {
        self.ops.iter()
    }

    /// Get the circuit depth (longest chain of operations on any qubit).
    pub fn depth(&self) -> usize {
        let mut qubit_depth = vec![0usize; self.num_qubits as usize];
        let mut depth = 0;
        for inst in &self.ops {
            let layer = inst
                .qubits
                .iter()
                .map(|q| qubit_depth[q.0 as usize])
                .max()
                .unwrap_or(0);
            for q in &inst.qubits {
                qubit_depth[q.0 as usize] = layer + 1;
            }
            depth = depth.max(layer + 1);
        }
        depth
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit: H(0), CX(0,1), measure both.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        circuit
            .h(QubitId(0))?
            .cx(QubitId(0), QubitId(1))?
            .measure(QubitId(0), ClbitId(0))?
            .measure(QubitId(1), ClbitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit over `n` qubits.
    pub fn ghz(n: u32) -> IrResult<Self> {
        if n == 0 {
            return Ok(Self::new("ghz_0"));
        }

        let mut circuit = Self::with_size("ghz", n, n);
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.measure(QubitId(i), ClbitId(i))?;
        }
        Ok(circuit)
    }

    /// Create a two-qubit Grover search circuit for a 2-bit target.
    ///
    /// Uniform superposition, a phase oracle marking `target`, and one
    /// diffusion round. At n=2 a single iteration amplifies the marked
    /// state to probability 1, so one shot returns `target` exactly.
    ///
    /// `target` must be exactly two binary digits; character 0 addresses
    /// qubit 0.
    pub fn grover(target: &str) -> IrResult<Self> {
        let bits = parse_target(target, 2)?;

        let mut circuit = Self::with_size("grover", 2, 2);
        let q0 = QubitId(0);
        let q1 = QubitId(1);

        // Uniform superposition
        circuit.h(q0)?.h(q1)?;

        // Phase oracle: X-conjugate the zero bits around CZ so only the
        // target basis state picks up the phase flip.
        for (i, bit) in bits.iter().enumerate() {
            if !bit {
                circuit.x(QubitId(i as u32))?;
            }
        }
        circuit.cz(q0, q1)?;
        for (i, bit) in bits.iter().enumerate() {
            if !bit {
                circuit.x(QubitId(i as u32))?;
            }
        }

        // Diffusion (inversion about the mean)
        circuit
            .h(q0)?
            .h(q1)?
            .x(q0)?
            .x(q1)?
            .cz(q0, q1)?
            .x(q0)?
            .x(q1)?
            .h(q0)?
            .h(q1)?;

        circuit
            .measure(q0, ClbitId(0))?
            .measure(q1, ClbitId(1))?;
        Ok(circuit)
    }
}

/// Parse a binary target string of the given width into per-qubit bits.
fn parse_target(target: &str, width: u32) -> IrResult<Vec<bool>> {
    let invalid = || IrError::InvalidSearchTarget {
        target: target.to_string(),
        width,
    };

    if target.len() != width as usize {
        return Err(invalid());
    }
    target
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(invalid()),
        })
        .collect()
}
