//! duoq — a classical simulator for two-qubit quantum circuits
//!
//! The workspace is split by concern:
//!
//! - [`duoq_state`]: normalized 4-amplitude state vectors and
//!   computational-basis measurement
//! - [`duoq_gates`]: validated 4x4 unitary operators, matrix kernels and
//!   the standard gate catalog
//! - [`duoq_circuit`]: ordered gate sequences with composed application
//!
//! This crate re-exports the public API of all three.
//!
//! # Example
//!
//! ```
//! use duoq::{catalog, Circuit, MeasureTarget, StateVector};
//! use num_complex::Complex64;
//!
//! let one = Complex64::new(1.0, 0.0);
//! let zero = Complex64::new(0.0, 0.0);
//!
//! // Prepare a Bell state and read out its measurement statistics
//! let mut circuit = Circuit::new();
//! circuit.append(&catalog::H1);
//! circuit.append(&catalog::CNOT1);
//!
//! let input = StateVector::new(&[one, zero, zero, zero]).unwrap();
//! let bell = circuit.apply(&input).unwrap();
//!
//! let stats = bell.measurement_stats(MeasureTarget::Both);
//! assert_eq!(stats.len(), 2);
//! ```

pub use duoq_circuit::{Circuit, CircuitError};
pub use duoq_gates::{
    catalog, matrices, matrix_ops, GateError, Matrix2, Matrix4, Unitary, Vector4,
    UNITARY_TOLERANCE,
};
pub use duoq_state::{
    MeasureTarget, MeasurementOutcome, MeasurementStats, StateError, StateVector,
    NORM_TOLERANCE, QUBIT_DIM, STATE_DIM,
};
