//! Error types for unitary operator construction and application

use duoq_state::StateError;
use thiserror::Error;

/// Errors that can occur when building or applying a unitary operator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    /// A flattened matrix has the wrong number of elements
    #[error("expected {expected} matrix elements, got {actual}")]
    WrongDimensions { expected: usize, actual: usize },

    /// A matrix entry is NaN or infinite
    #[error("matrix entry at row {row}, column {col} is not finite")]
    NonFiniteEntry { row: usize, col: usize },

    /// The matrix fails the U*U^dagger = I check
    #[error("matrix is not unitary: deviation {deviation:.2e} exceeds tolerance {tolerance:.2e}")]
    NotUnitary { deviation: f64, tolerance: f64 },

    /// A raw state vector has the wrong length
    #[error("expected a state vector of {expected} amplitudes, got {actual}")]
    WrongStateSize { expected: usize, actual: usize },

    /// Failure propagated from state construction
    #[error(transparent)]
    State(#[from] StateError),
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
