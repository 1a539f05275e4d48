//! Computational-basis measurement for two-qubit states
//!
//! Measurement comes in two flavors: [`StateVector::measurement_stats`]
//! describes the possible outcomes without touching the state, and
//! [`StateVector::collapse`] samples one outcome and replaces the live
//! amplitudes with it. Randomness is injectable so tests can pin outcomes.

use crate::error::{Result, StateError};
use crate::state_vector::{StateVector, STATE_DIM};
use num_complex::Complex64;
use rand::Rng;
use smallvec::SmallVec;

/// Which qubit (or the pair) a measurement addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureTarget {
    /// Measure qubit 1, leaving qubit 2 undisturbed
    First,
    /// Measure qubit 2, leaving qubit 1 undisturbed
    Second,
    /// Measure both qubits
    Both,
}

impl MeasureTarget {
    /// Integer selector for this target: 1, 2 or 12
    pub fn selector(self) -> u32 {
        match self {
            MeasureTarget::First => 1,
            MeasureTarget::Second => 2,
            MeasureTarget::Both => 12,
        }
    }
}

impl TryFrom<u32> for MeasureTarget {
    type Error = StateError;

    /// Convert the 1 / 2 / 12 qubit selectors
    ///
    /// # Errors
    /// [`StateError::InvalidMeasurementTarget`] for any other value.
    fn try_from(selector: u32) -> Result<Self> {
        match selector {
            1 => Ok(MeasureTarget::First),
            2 => Ok(MeasureTarget::Second),
            12 => Ok(MeasureTarget::Both),
            other => Err(StateError::InvalidMeasurementTarget(other)),
        }
    }
}

/// One possible measurement result
#[derive(Debug)]
pub struct MeasurementOutcome {
    /// State after observing this outcome
    pub state: StateVector,

    /// Born-rule probability of the outcome
    pub probability: f64,
}

/// Outcomes with non-zero probability, at most one per basis grouping
pub type MeasurementStats = SmallVec<[MeasurementOutcome; STATE_DIM]>;

impl StateVector {
    /// Describe a measurement without performing it
    ///
    /// Returns the post-measurement states and their probabilities,
    /// omitting outcomes whose probability is exactly zero. Partial
    /// targets group amplitudes by the measured qubit's value and keep
    /// the unmeasured qubit's relative phases; [`MeasureTarget::Both`]
    /// yields plain computational-basis outcomes.
    pub fn measurement_stats(&self, target: MeasureTarget) -> MeasurementStats {
        let amps = self.peek();
        let probs = self.probabilities();
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);

        let mut stats = MeasurementStats::new();
        match target {
            MeasureTarget::First => {
                push_projected(
                    &mut stats,
                    [amps[0], amps[1], zero, zero],
                    probs[0] + probs[1],
                );
                push_projected(
                    &mut stats,
                    [zero, zero, amps[2], amps[3]],
                    probs[2] + probs[3],
                );
            }
            MeasureTarget::Second => {
                push_projected(
                    &mut stats,
                    [amps[0], zero, amps[2], zero],
                    probs[0] + probs[2],
                );
                push_projected(
                    &mut stats,
                    [zero, amps[1], zero, amps[3]],
                    probs[1] + probs[3],
                );
            }
            MeasureTarget::Both => {
                for (index, &probability) in probs.iter().enumerate() {
                    if probability == 0.0 {
                        continue;
                    }
                    let mut basis = [zero; STATE_DIM];
                    basis[index] = one;
                    stats.push(MeasurementOutcome {
                        state: StateVector::from_parts(basis, basis),
                        probability,
                    });
                }
            }
        }
        stats
    }

    /// Collapse the state using an injected uniform sampler
    ///
    /// `uniform` must yield values in `[0, 1)`. One outcome is chosen by
    /// cumulative weight (the final outcome absorbs any floating-point
    /// remainder), the live amplitudes are replaced with that outcome's
    /// vector, and an independent copy of the collapsed state is returned.
    /// The construction-time amplitudes are not touched.
    pub fn collapse_with(
        &mut self,
        target: MeasureTarget,
        uniform: &mut dyn FnMut() -> f64,
    ) -> StateVector {
        // The live vector is normalized, so there is always at least one
        // outcome with non-zero probability.
        let stats = self.measurement_stats(target);
        let draw = uniform();

        let mut chosen = stats.len() - 1;
        let mut cumulative = 0.0;
        for (index, outcome) in stats.iter().enumerate() {
            cumulative += outcome.probability;
            if draw < cumulative {
                chosen = index;
                break;
            }
        }

        self.replace_current(stats[chosen].state.peek());
        self.clone_state()
    }

    /// Collapse the state using the process-wide generator
    pub fn collapse(&mut self, target: MeasureTarget) -> StateVector {
        let mut rng = rand::thread_rng();
        self.collapse_with(target, &mut || rng.gen::<f64>())
    }
}

/// Append a projected outcome unless its probability is exactly zero
fn push_projected(
    stats: &mut MeasurementStats,
    projected: [Complex64; STATE_DIM],
    probability: f64,
) {
    if probability == 0.0 {
        return;
    }

    let inv_norm = 1.0 / probability.sqrt();
    let mut current = projected;
    for amp in &mut current {
        *amp *= inv_norm;
    }

    stats.push(MeasurementOutcome {
        state: StateVector::from_parts(projected, current),
        probability,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn real(values: [f64; 4]) -> Vec<Complex64> {
        values.iter().map(|&re| Complex64::new(re, 0.0)).collect()
    }

    #[test]
    fn test_target_selectors() {
        assert_eq!(MeasureTarget::try_from(1).unwrap(), MeasureTarget::First);
        assert_eq!(MeasureTarget::try_from(2).unwrap(), MeasureTarget::Second);
        assert_eq!(MeasureTarget::try_from(12).unwrap(), MeasureTarget::Both);
        assert_eq!(MeasureTarget::Both.selector(), 12);

        assert_eq!(
            MeasureTarget::try_from(3).unwrap_err(),
            StateError::InvalidMeasurementTarget(3)
        );
    }

    #[test]
    fn test_stats_on_basis_state() {
        let state = StateVector::new(&real([0.0, 0.0, 1.0, 0.0])).unwrap();
        let stats = state.measurement_stats(MeasureTarget::Both);

        assert_eq!(stats.len(), 1);
        assert_relative_eq!(stats[0].probability, 1.0, epsilon = 1e-12);
        assert_eq!(stats[0].state.peek()[2], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_stats_probabilities_sum_to_one() {
        let state = StateVector::new(&real([1.0, 1.0, 1.0, 1.0])).unwrap();
        let stats = state.measurement_stats(MeasureTarget::Both);

        assert_eq!(stats.len(), 4);
        let total: f64 = stats.iter().map(|outcome| outcome.probability).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_partial_stats_keep_unmeasured_qubit() {
        // (|00> + |01> + |10>) / sqrt(3)
        let state = StateVector::new(&real([1.0, 1.0, 1.0, 0.0])).unwrap();
        let stats = state.measurement_stats(MeasureTarget::First);

        assert_eq!(stats.len(), 2);
        assert_relative_eq!(stats[0].probability, 2.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(stats[1].probability, 1.0 / 3.0, epsilon = 1e-10);

        // Qubit 1 observed as 0: qubit 2 stays in an equal superposition
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        let observed_zero = stats[0].state.peek();
        assert_relative_eq!(observed_zero[0].re, inv_sqrt2, epsilon = 1e-10);
        assert_relative_eq!(observed_zero[1].re, inv_sqrt2, epsilon = 1e-10);

        // Qubit 1 observed as 1: the joint state is exactly |10>
        let observed_one = stats[1].state.peek();
        assert_relative_eq!(observed_one[2].re, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_second_qubit_grouping() {
        let state = StateVector::new(&real([1.0, 1.0, 0.0, 0.0])).unwrap();
        let stats = state.measurement_stats(MeasureTarget::Second);

        assert_eq!(stats.len(), 2);
        assert_relative_eq!(stats[0].probability, 0.5, epsilon = 1e-10);
        assert_eq!(stats[0].state.peek()[0], Complex64::new(1.0, 0.0));
        assert_eq!(stats[1].state.peek()[1], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_zero_probability_outcomes_omitted() {
        let state = StateVector::new(&real([1.0, 0.0, 0.0, 0.0])).unwrap();
        let stats = state.measurement_stats(MeasureTarget::First);
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn test_collapse_with_pinned_sampler() {
        let mut state = StateVector::new(&real([1.0, 0.0, 0.0, 1.0])).unwrap();

        // A draw of 0.0 always lands on the first listed outcome
        let collapsed = state.collapse_with(MeasureTarget::Both, &mut || 0.0);
        assert_eq!(collapsed.peek()[0], Complex64::new(1.0, 0.0));
        assert_eq!(state.peek()[0], Complex64::new(1.0, 0.0));

        // A draw just under 1.0 lands on the last outcome
        let mut state = StateVector::new(&real([1.0, 0.0, 0.0, 1.0])).unwrap();
        let collapsed = state.collapse_with(MeasureTarget::Both, &mut || 0.999_999);
        assert_eq!(collapsed.peek()[3], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_collapse_preserves_initial() {
        let mut state = StateVector::new(&real([1.0, 1.0, 0.0, 0.0])).unwrap();
        state.collapse_with(MeasureTarget::Both, &mut || 0.0);
        assert_relative_eq!(state.initial()[0].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_collapse_lands_in_basis_state() {
        let mut state = StateVector::new(&real([1.0, 1.0, 1.0, 1.0])).unwrap();
        let collapsed = state.collapse(MeasureTarget::Both);

        let ones = collapsed
            .probabilities()
            .iter()
            .filter(|&&p| (p - 1.0).abs() < 1e-10)
            .count();
        assert_eq!(ones, 1);
    }
}
