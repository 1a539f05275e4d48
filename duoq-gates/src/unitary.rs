//! Validated two-qubit unitary operators

use crate::error::{GateError, Result};
use crate::matrix_ops::{self, Matrix2, Matrix4, Vector4};
use duoq_state::{StateVector, STATE_DIM};
use num_complex::Complex64;
use std::fmt;

/// Tolerance for the U * U^dagger = I construction check
pub const UNITARY_TOLERANCE: f64 = 1e-7;

/// Tolerance for element-wise matrix comparisons
pub const COMPARE_TOLERANCE: f64 = 1e-8;

/// A two-qubit quantum gate backed by a validated 4x4 unitary matrix
///
/// The matrix is checked at construction — finite entries and
/// `U * U^dagger = I` within [`UNITARY_TOLERANCE`] — and is immutable
/// afterwards. It only ever leaves the operator as a copy.
///
/// # Example
///
/// ```
/// use duoq_gates::Unitary;
/// use duoq_gates::matrices::{IDENTITY, PAULI_X};
///
/// // X on qubit 1, identity on qubit 2
/// let x1 = Unitary::from_factors(&PAULI_X, &IDENTITY).unwrap();
/// assert!(x1.dagger().approx_eq(&x1));
/// ```
#[derive(Debug, Clone)]
pub struct Unitary {
    matrix: Matrix4,
}

impl Unitary {
    /// Create an operator from a joint 4x4 matrix
    ///
    /// # Errors
    /// - [`GateError::NonFiniteEntry`] if an entry is NaN or infinite
    /// - [`GateError::NotUnitary`] if `U * U^dagger` strays from the
    ///   identity by more than [`UNITARY_TOLERANCE`]
    pub fn new(matrix: Matrix4) -> Result<Self> {
        check_finite(&matrix)?;

        let deviation = matrix_ops::unitarity_deviation(&matrix);
        if deviation > UNITARY_TOLERANCE {
            return Err(GateError::NotUnitary {
                deviation,
                tolerance: UNITARY_TOLERANCE,
            });
        }

        Ok(Self { matrix })
    }

    /// Create an operator as the tensor product of two single-qubit
    /// matrices
    ///
    /// The first factor acts on qubit 1. The factors need not be unitary
    /// individually; only the joint product is validated.
    ///
    /// # Errors
    /// Same as [`Unitary::new`].
    pub fn from_factors(first: &Matrix2, second: &Matrix2) -> Result<Self> {
        Self::new(matrix_ops::tensor_product(first, second))
    }

    /// Create an operator from a flattened row-major matrix
    ///
    /// # Errors
    /// [`GateError::WrongDimensions`] unless exactly 16 elements are
    /// given, then as [`Unitary::new`].
    pub fn from_flat(elements: &[Complex64]) -> Result<Self> {
        if elements.len() != STATE_DIM * STATE_DIM {
            return Err(GateError::WrongDimensions {
                expected: STATE_DIM * STATE_DIM,
                actual: elements.len(),
            });
        }

        let mut matrix = [[Complex64::new(0.0, 0.0); 4]; 4];
        for (index, &element) in elements.iter().enumerate() {
            matrix[index / 4][index % 4] = element;
        }
        Self::new(matrix)
    }

    /// Copy of the operator matrix
    pub fn matrix(&self) -> Matrix4 {
        self.matrix
    }

    /// Apply the operator to a state, producing a new state
    ///
    /// The matrix acts on the state's construction-time amplitudes and
    /// the product is wrapped in a fresh [`StateVector`], which re-runs
    /// normalization. The input state is not modified.
    ///
    /// # Errors
    /// Propagates the new state's construction failure.
    pub fn apply(&self, state: &StateVector) -> Result<StateVector> {
        let product = matrix_ops::apply_matrix(&self.matrix, &state.initial());
        Ok(StateVector::new(&product)?)
    }

    /// Apply the operator to a raw amplitude vector
    ///
    /// Plain matrix-vector multiplication: the result is not normalized
    /// and not wrapped in a state.
    ///
    /// # Errors
    /// [`GateError::WrongStateSize`] unless the slice has exactly 4
    /// amplitudes.
    pub fn apply_amplitudes(&self, amplitudes: &[Complex64]) -> Result<Vector4> {
        if amplitudes.len() != STATE_DIM {
            return Err(GateError::WrongStateSize {
                expected: STATE_DIM,
                actual: amplitudes.len(),
            });
        }

        let mut vector = [Complex64::new(0.0, 0.0); STATE_DIM];
        vector.copy_from_slice(amplitudes);
        Ok(matrix_ops::apply_matrix(&self.matrix, &vector))
    }

    /// The adjoint (conjugate transpose) operator
    ///
    /// The adjoint of a validated unitary is itself unitary, so no
    /// re-validation is needed.
    pub fn dagger(&self) -> Unitary {
        Unitary {
            matrix: matrix_ops::matrix_adjoint(&self.matrix),
        }
    }

    /// Element-wise closeness of the matrices within
    /// [`COMPARE_TOLERANCE`]
    pub fn approx_eq(&self, other: &Unitary) -> bool {
        matrix_ops::max_element_distance(&self.matrix, &other.matrix) <= COMPARE_TOLERANCE
    }

    /// Check the matrix is self-adjoint within `tolerance`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        matrix_ops::is_hermitian(&self.matrix, tolerance)
    }
}

impl fmt::Display for Unitary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.matrix.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (col, entry) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.4}{:+.4}i", entry.re, entry.im)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

fn check_finite(matrix: &Matrix4) -> Result<()> {
    for (row, entries) in matrix.iter().enumerate() {
        for (col, entry) in entries.iter().enumerate() {
            if !entry.re.is_finite() || !entry.im.is_finite() {
                return Err(GateError::NonFiniteEntry { row, col });
            }
        }
    }
    Ok(())
}
