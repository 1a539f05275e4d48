//! Validated two-qubit unitary operators
//!
//! This crate provides the operator layer of the duoq simulator:
//!
//! - [`Unitary`]: an owned 4x4 matrix checked for unitarity at construction
//! - [`matrix_ops`]: fixed-size tensor-product, multiplication and adjoint
//!   kernels for the two-qubit dimension
//! - [`matrices`]: textbook single- and two-qubit gate matrices
//! - [`catalog`]: process-wide standard gates (Paulis, Hadamard, CNOT)
//!
//! # Example
//!
//! ```
//! use duoq_gates::{catalog, Unitary};
//! use duoq_gates::matrices::{HADAMARD, IDENTITY};
//!
//! let h1 = Unitary::from_factors(&HADAMARD, &IDENTITY).unwrap();
//! assert!(h1.approx_eq(&catalog::H1));
//! ```

pub mod catalog;
pub mod error;
pub mod matrices;
pub mod matrix_ops;
pub mod unitary;

pub use error::{GateError, Result};
pub use matrix_ops::{Matrix2, Matrix4, Vector4};
pub use unitary::{Unitary, COMPARE_TOLERANCE, UNITARY_TOLERANCE};
