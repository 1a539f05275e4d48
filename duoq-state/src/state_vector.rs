//! Two-qubit state vector with preserved construction amplitudes

use crate::error::{Result, StateError};
use num_complex::Complex64;
use std::fmt;

/// Dimension of the joint two-qubit state space
pub const STATE_DIM: usize = 4;

/// Dimension of a single-qubit state
pub const QUBIT_DIM: usize = 2;

/// Probability mass within this distance of 1 counts as already normalized
pub const NORM_TOLERANCE: f64 = 1e-7;

/// Tolerance for element-wise amplitude comparisons
pub const COMPARE_TOLERANCE: f64 = 1e-8;

/// A normalized two-qubit quantum state
///
/// Holds the live amplitude vector together with the amplitudes supplied at
/// construction time. The live vector always carries unit probability mass
/// and changes only through measurement collapse; the construction-time
/// vector is preserved verbatim, rescaled or not.
///
/// Both vectors are private and only ever leave the state as copies.
///
/// # Example
///
/// ```
/// use duoq_state::StateVector;
/// use num_complex::Complex64;
///
/// let amps: Vec<Complex64> = [1.0, 1.0, 0.0, 0.0]
///     .iter()
///     .map(|&re| Complex64::new(re, 0.0))
///     .collect();
///
/// let state = StateVector::new(&amps).unwrap();
/// assert!((state.norm() - 1.0).abs() < 1e-10);
/// assert_eq!(state.initial()[0], Complex64::new(1.0, 0.0));
/// ```
#[derive(Debug)]
pub struct StateVector {
    /// Amplitudes supplied at construction, kept verbatim
    initial: [Complex64; STATE_DIM],

    /// Live normalized amplitudes, mutated only by collapse
    current: [Complex64; STATE_DIM],
}

impl StateVector {
    /// Create a state from a joint 4-amplitude vector
    ///
    /// The input is rescaled by the square root of its probability mass
    /// when the mass differs from 1 by more than [`NORM_TOLERANCE`].
    ///
    /// # Errors
    /// - [`StateError::WrongDimensions`] if the slice is not 4 entries long
    /// - [`StateError::NonFiniteAmplitude`] if an entry is NaN or infinite
    /// - [`StateError::NullState`] if every amplitude is zero
    pub fn new(amplitudes: &[Complex64]) -> Result<Self> {
        let joint = to_fixed::<STATE_DIM>(amplitudes)?;
        Self::from_joint(joint)
    }

    /// Create a state from two single-qubit 2-amplitude vectors
    ///
    /// The joint vector is the Kronecker product of the factors, with the
    /// first qubit's amplitudes varying slowest.
    ///
    /// # Errors
    /// Same as [`StateVector::new`], with length 2 expected per factor.
    pub fn from_qubits(first: &[Complex64], second: &[Complex64]) -> Result<Self> {
        let a = to_fixed::<QUBIT_DIM>(first)?;
        let b = to_fixed::<QUBIT_DIM>(second)?;
        Self::from_joint(kron(&a, &b))
    }

    fn from_joint(initial: [Complex64; STATE_DIM]) -> Result<Self> {
        let mass: f64 = initial.iter().map(|amp| amp.norm_sqr()).sum();
        if mass == 0.0 {
            return Err(StateError::NullState);
        }

        let mut current = initial;
        if (mass - 1.0).abs() > NORM_TOLERANCE {
            let inv_norm = 1.0 / mass.sqrt();
            for amp in &mut current {
                *amp *= inv_norm;
            }
        }

        Ok(Self { initial, current })
    }

    /// Assemble a state from already-validated parts
    pub(crate) fn from_parts(
        initial: [Complex64; STATE_DIM],
        current: [Complex64; STATE_DIM],
    ) -> Self {
        Self { initial, current }
    }

    /// Overwrite the live vector with an already-normalized replacement
    pub(crate) fn replace_current(&mut self, current: [Complex64; STATE_DIM]) {
        self.current = current;
    }

    /// Copy of the amplitudes supplied at construction
    pub fn initial(&self) -> [Complex64; STATE_DIM] {
        self.initial
    }

    /// Copy of the current normalized amplitudes
    pub fn peek(&self) -> [Complex64; STATE_DIM] {
        self.current
    }

    /// Born-rule probability of each computational basis state
    pub fn probabilities(&self) -> [f64; STATE_DIM] {
        let mut probs = [0.0; STATE_DIM];
        for (prob, amp) in probs.iter_mut().zip(&self.current) {
            *prob = amp.norm_sqr();
        }
        probs
    }

    /// L2 norm of the current amplitudes
    pub fn norm(&self) -> f64 {
        self.current
            .iter()
            .map(|amp| amp.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check that the current norm is within `epsilon` of 1
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Create an independent state from the current amplitudes
    ///
    /// The copy's construction-time vector is this state's current vector,
    /// so collapsing either state never affects the other.
    pub fn clone_state(&self) -> Self {
        Self {
            initial: self.current,
            current: self.current,
        }
    }

    /// Replace the state with a newly validated joint vector
    ///
    /// Runs the full construction validation first; on failure the
    /// existing state is left untouched.
    ///
    /// # Errors
    /// Same as [`StateVector::new`].
    pub fn set(&mut self, amplitudes: &[Complex64]) -> Result<[Complex64; STATE_DIM]> {
        *self = Self::new(amplitudes)?;
        Ok(self.current)
    }

    /// Replace the state with the product of two single-qubit vectors
    ///
    /// # Errors
    /// Same as [`StateVector::from_qubits`].
    pub fn set_from_qubits(
        &mut self,
        first: &[Complex64],
        second: &[Complex64],
    ) -> Result<[Complex64; STATE_DIM]> {
        *self = Self::from_qubits(first, second)?;
        Ok(self.current)
    }

    /// Element-wise closeness of the current vectors within
    /// [`COMPARE_TOLERANCE`]
    pub fn approx_eq(&self, other: &StateVector) -> bool {
        self.current
            .iter()
            .zip(&other.current)
            .all(|(a, b)| (a - b).norm() <= COMPARE_TOLERANCE)
    }

    /// Compare against a raw amplitude vector
    ///
    /// The slice is coerced through the full construction validation, so
    /// the comparison sees its normalized form.
    ///
    /// # Errors
    /// [`StateError::InvalidComparand`] wrapping the construction failure
    /// when the slice is not a valid state.
    pub fn approx_eq_amplitudes(&self, amplitudes: &[Complex64]) -> Result<bool> {
        let coerced =
            Self::new(amplitudes).map_err(|err| StateError::InvalidComparand(Box::new(err)))?;
        Ok(self.approx_eq(&coerced))
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, amp) in self.current.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}{:+.4}i", amp.re, amp.im)?;
        }
        write!(f, "]")
    }
}

/// Copy a slice into a fixed-size array, validating length and finiteness
fn to_fixed<const N: usize>(amplitudes: &[Complex64]) -> Result<[Complex64; N]> {
    if amplitudes.len() != N {
        return Err(StateError::WrongDimensions {
            expected: N,
            actual: amplitudes.len(),
        });
    }

    for (index, amp) in amplitudes.iter().enumerate() {
        if !amp.re.is_finite() || !amp.im.is_finite() {
            return Err(StateError::NonFiniteAmplitude { index });
        }
    }

    let mut fixed = [Complex64::new(0.0, 0.0); N];
    fixed.copy_from_slice(amplitudes);
    Ok(fixed)
}

/// Kronecker product of two single-qubit vectors
fn kron(
    a: &[Complex64; QUBIT_DIM],
    b: &[Complex64; QUBIT_DIM],
) -> [Complex64; STATE_DIM] {
    [a[0] * b[0], a[0] * b[1], a[1] * b[0], a[1] * b[1]]
}
