//! Two-qubit state representation and computational-basis measurement
//!
//! This crate provides the state layer of the duoq simulator:
//!
//! - [`StateVector`]: a normalized 4-amplitude state that remembers the
//!   amplitudes it was constructed from
//! - [`MeasureTarget`]: selects which qubit (or the pair) a measurement
//!   addresses
//! - Born-rule measurement statistics and probabilistic state collapse
//!
//! # Example
//!
//! ```
//! use duoq_state::StateVector;
//! use num_complex::Complex64;
//!
//! let one = Complex64::new(1.0, 0.0);
//! let zero = Complex64::new(0.0, 0.0);
//!
//! // |00> built from two single-qubit states
//! let state = StateVector::from_qubits(&[one, zero], &[one, zero]).unwrap();
//! assert_eq!(state.peek()[0], one);
//! ```

pub mod error;
pub mod measurement;
pub mod state_vector;

pub use error::{Result, StateError};
pub use measurement::{MeasureTarget, MeasurementOutcome, MeasurementStats};
pub use state_vector::{
    StateVector, COMPARE_TOLERANCE, NORM_TOLERANCE, QUBIT_DIM, STATE_DIM,
};
