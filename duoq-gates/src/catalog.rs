//! Process-wide catalog of standard two-qubit gates
//!
//! Each gate is built once, on first use, from the textbook matrices in
//! [`crate::matrices`]: single-qubit gates are embedded into the two-qubit
//! space by tensoring with the identity, the CNOT variants are native 4x4
//! operators. The catalog is immutable read-only data.
//!
//! # Example
//!
//! ```
//! use duoq_gates::catalog;
//! use duoq_state::StateVector;
//! use num_complex::Complex64;
//!
//! let one = Complex64::new(1.0, 0.0);
//! let zero = Complex64::new(0.0, 0.0);
//!
//! // CNOT with control on qubit 1 maps |10> to |11>
//! let ten = StateVector::new(&[zero, zero, one, zero]).unwrap();
//! let out = catalog::CNOT1.apply(&ten).unwrap();
//! assert_eq!(out.peek()[3], one);
//! ```

use crate::matrices;
use crate::unitary::Unitary;
use once_cell::sync::Lazy;

/// Identity on both qubits
pub static ID: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::IDENTITY, &matrices::IDENTITY)
        .expect("identity gate is unitary")
});

/// Pauli-X on qubit 1
pub static X1: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::PAULI_X, &matrices::IDENTITY)
        .expect("Pauli-X gate is unitary")
});

/// Pauli-X on qubit 2
pub static X2: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::IDENTITY, &matrices::PAULI_X)
        .expect("Pauli-X gate is unitary")
});

/// Pauli-Y on qubit 1
pub static Y1: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::PAULI_Y, &matrices::IDENTITY)
        .expect("Pauli-Y gate is unitary")
});

/// Pauli-Y on qubit 2
pub static Y2: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::IDENTITY, &matrices::PAULI_Y)
        .expect("Pauli-Y gate is unitary")
});

/// Pauli-Z on qubit 1
pub static Z1: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::PAULI_Z, &matrices::IDENTITY)
        .expect("Pauli-Z gate is unitary")
});

/// Pauli-Z on qubit 2
pub static Z2: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::IDENTITY, &matrices::PAULI_Z)
        .expect("Pauli-Z gate is unitary")
});

/// Hadamard on qubit 1
pub static H1: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::HADAMARD, &matrices::IDENTITY)
        .expect("Hadamard gate is unitary")
});

/// Hadamard on qubit 2
pub static H2: Lazy<Unitary> = Lazy::new(|| {
    Unitary::from_factors(&matrices::IDENTITY, &matrices::HADAMARD)
        .expect("Hadamard gate is unitary")
});

/// CNOT with the control on qubit 1
pub static CNOT1: Lazy<Unitary> =
    Lazy::new(|| Unitary::new(matrices::CNOT).expect("CNOT gate is unitary"));

/// CNOT with the control on qubit 2
pub static CNOT2: Lazy<Unitary> =
    Lazy::new(|| Unitary::new(matrices::CNOT_REVERSED).expect("CNOT gate is unitary"));

/// Every catalog gate, by name
pub fn all() -> Vec<(&'static str, &'static Unitary)> {
    vec![
        ("ID", &*ID),
        ("X1", &*X1),
        ("X2", &*X2),
        ("Y1", &*Y1),
        ("Y2", &*Y2),
        ("Z1", &*Z1),
        ("Z2", &*Z2),
        ("H1", &*H1),
        ("H2", &*H2),
        ("CNOT1", &*CNOT1),
        ("CNOT2", &*CNOT2),
    ]
}
