//! Error types for two-qubit state operations

use thiserror::Error;

/// Errors that can occur when constructing, comparing or measuring a
/// two-qubit state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// An amplitude vector has the wrong length
    #[error("expected an amplitude vector of length {expected}, got {actual}")]
    WrongDimensions { expected: usize, actual: usize },

    /// An amplitude is NaN or infinite
    #[error("amplitude at index {index} is not a finite complex number")]
    NonFiniteAmplitude { index: usize },

    /// Every amplitude is zero
    #[error("all amplitudes are zero, not a valid quantum state")]
    NullState,

    /// Measurement requested for an unknown qubit selector
    #[error("invalid measurement target {0}, expected 1, 2 or 12")]
    InvalidMeasurementTarget(u32),

    /// A comparison target could not be coerced into a state
    #[error("comparison target is not a valid two-qubit state: {0}")]
    InvalidComparand(#[source] Box<StateError>),
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;
