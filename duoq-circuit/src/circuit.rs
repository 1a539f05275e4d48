//! Two-qubit circuit representation

use crate::error::{CircuitError, Result};
use duoq_gates::Unitary;
use duoq_state::StateVector;
use std::fmt;

/// An ordered sequence of two-qubit gates
///
/// Index 0 is applied first. The circuit owns an independent copy of
/// every gate it holds.
///
/// # Example
/// ```
/// use duoq_circuit::Circuit;
/// use duoq_gates::catalog;
///
/// let mut circuit = Circuit::from_gate(&catalog::X1);
/// circuit.append(&catalog::CNOT1);
/// assert_eq!(circuit.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    gates: Vec<Unitary>,
}

impl Circuit {
    /// Create an empty circuit
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Create a one-gate circuit
    pub fn from_gate(gate: &Unitary) -> Self {
        Self {
            gates: vec![gate.clone()],
        }
    }

    /// Create a circuit from a gate sequence, copying each element
    pub fn from_gates(gates: &[Unitary]) -> Self {
        Self {
            gates: gates.to_vec(),
        }
    }

    /// Number of gates in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the circuit holds no gates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Append a copy of `gate` to the end of the circuit
    pub fn append(&mut self, gate: &Unitary) {
        self.gates.push(gate.clone());
    }

    /// Insert a copy of `gate` at `index`
    ///
    /// An index past the end appends; negative indices count from the
    /// end and clamp at the front.
    pub fn insert(&mut self, index: isize, gate: &Unitary) {
        let position = if index < 0 {
            self.gates.len().saturating_sub(index.unsigned_abs())
        } else {
            (index as usize).min(self.gates.len())
        };
        self.gates.insert(position, gate.clone());
    }

    /// Copy of the gate at `index`
    ///
    /// Negative indices count from the end.
    ///
    /// # Errors
    /// [`CircuitError::IndexOutOfRange`] when `index` is out of bounds.
    pub fn get(&self, index: isize) -> Result<Unitary> {
        let position = self.resolve(index)?;
        Ok(self.gates[position].clone())
    }

    /// Remove and return the last gate
    ///
    /// # Errors
    /// [`CircuitError::IndexOutOfRange`] on an empty circuit.
    pub fn pop(&mut self) -> Result<Unitary> {
        self.pop_at(-1)
    }

    /// Remove and return the gate at `index`
    ///
    /// Negative indices count from the end. Ownership of the removed
    /// gate transfers to the caller.
    ///
    /// # Errors
    /// [`CircuitError::IndexOutOfRange`] when `index` is out of bounds.
    pub fn pop_at(&mut self, index: isize) -> Result<Unitary> {
        let position = self.resolve(index)?;
        Ok(self.gates.remove(position))
    }

    /// Append copies of every gate of `other`, in order
    ///
    /// Returns `self` for chaining.
    pub fn merge(&mut self, other: &Circuit) -> &mut Self {
        for gate in &other.gates {
            self.gates.push(gate.clone());
        }
        self
    }

    /// Structural comparison: equal length and pairwise matrix closeness
    pub fn approx_eq(&self, other: &Circuit) -> bool {
        self.gates.len() == other.gates.len()
            && self
                .gates
                .iter()
                .zip(&other.gates)
                .all(|(a, b)| a.approx_eq(b))
    }

    /// Apply the whole sequence to `state`, first gate first
    ///
    /// Starts from an independent copy of `state` and forwards each
    /// gate's output to the next. An empty circuit returns a state equal
    /// to the input.
    ///
    /// # Errors
    /// Propagates the first gate application failure.
    pub fn apply(&self, state: &StateVector) -> Result<StateVector> {
        let mut out = state.clone_state();
        for gate in &self.gates {
            out = gate.apply(&out)?;
        }
        Ok(out)
    }

    fn resolve(&self, index: isize) -> Result<usize> {
        let len = self.gates.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };

        if resolved < 0 || resolved as usize >= len {
            return Err(CircuitError::IndexOutOfRange { index, len });
        }
        Ok(resolved as usize)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gates.is_empty() {
            return write!(f, "empty circuit");
        }

        for (index, gate) in self.gates.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "gate {}:", index)?;
            write!(f, "{}", gate)?;
        }
        Ok(())
    }
}
