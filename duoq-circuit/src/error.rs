//! Error types for circuit editing and application

use duoq_gates::GateError;
use thiserror::Error;

/// Errors that can occur when editing or applying a circuit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircuitError {
    /// Sequence access or removal outside the valid bounds
    #[error("index {index} out of range for a circuit of {len} gates")]
    IndexOutOfRange { index: isize, len: usize },

    /// Failure propagated from an individual gate application
    #[error(transparent)]
    Gate(#[from] GateError),
}

/// Result type for circuit operations
pub type Result<T> = std::result::Result<T, CircuitError>;
