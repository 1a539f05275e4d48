//! Ordered gate sequences for the duoq simulator
//!
//! A [`Circuit`] owns a sequence of [`duoq_gates::Unitary`] gates, indexed
//! from 0 in application order. Gates are copied on every boundary
//! crossing (construction, append, insert, get) and transferred out only
//! by `pop`, so no stored gate is ever shared with a caller.
//!
//! # Example
//!
//! ```
//! use duoq_circuit::Circuit;
//! use duoq_gates::catalog;
//! use duoq_state::StateVector;
//! use num_complex::Complex64;
//!
//! let mut circuit = Circuit::new();
//! circuit.append(&catalog::H1);
//! circuit.append(&catalog::CNOT1);
//!
//! // |00> through H1 then CNOT1 is the Bell state (|00> + |11>)/sqrt(2)
//! let one = Complex64::new(1.0, 0.0);
//! let zero = Complex64::new(0.0, 0.0);
//! let input = StateVector::new(&[one, zero, zero, zero]).unwrap();
//! let bell = circuit.apply(&input).unwrap();
//! assert!((bell.probabilities()[0] - 0.5).abs() < 1e-10);
//! assert!((bell.probabilities()[3] - 0.5).abs() < 1e-10);
//! ```

pub mod circuit;
pub mod error;

pub use circuit::Circuit;
pub use error::{CircuitError, Result};
