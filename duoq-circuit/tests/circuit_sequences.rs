//! Sequence-editing and composition checks with randomized gates

use duoq_circuit::Circuit;
use duoq_gates::{catalog, Matrix2, Unitary};
use duoq_state::StateVector;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rotation_y(theta: f64) -> Matrix2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

fn rotation_z(phi: f64) -> Matrix2 {
    [
        [Complex64::from_polar(1.0, -phi / 2.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::from_polar(1.0, phi / 2.0)],
    ]
}

fn multiply_2x2(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let zero = Complex64::new(0.0, 0.0);
    let mut result = [[zero; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// A random single-qubit unitary from Euler angles
fn random_single_qubit(rng: &mut StdRng) -> Matrix2 {
    let angles: [f64; 3] = [
        rng.gen::<f64>() * std::f64::consts::TAU,
        rng.gen::<f64>() * std::f64::consts::PI,
        rng.gen::<f64>() * std::f64::consts::TAU,
    ];
    multiply_2x2(
        &rotation_z(angles[0]),
        &multiply_2x2(&rotation_y(angles[1]), &rotation_z(angles[2])),
    )
}

fn random_gate(rng: &mut StdRng) -> Unitary {
    Unitary::from_factors(&random_single_qubit(rng), &random_single_qubit(rng))
        .expect("product of single-qubit unitaries is unitary")
}

fn zero_zero() -> StateVector {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    StateVector::new(&[one, zero, zero, zero]).unwrap()
}

#[test]
fn popped_gates_match_what_was_stored() {
    let mut rng = StdRng::seed_from_u64(7);
    let gates: Vec<Unitary> = (0..5).map(|_| random_gate(&mut rng)).collect();

    let mut circuit = Circuit::from_gates(&gates);
    assert_eq!(circuit.len(), gates.len());

    for stored in gates.iter().rev() {
        let popped = circuit.pop().unwrap();
        assert!(popped.approx_eq(stored));
    }
    assert!(circuit.is_empty());
}

#[test]
fn circuit_apply_matches_manual_sequencing() {
    let mut rng = StdRng::seed_from_u64(11);
    let gates: Vec<Unitary> = (0..4).map(|_| random_gate(&mut rng)).collect();
    let circuit = Circuit::from_gates(&gates);

    let composed = circuit.apply(&zero_zero()).unwrap();

    let mut manual = zero_zero().clone_state();
    for gate in &gates {
        manual = gate.apply(&manual).unwrap();
    }

    assert!(composed.approx_eq(&manual));
}

#[test]
fn circuit_of_gate_and_dagger_is_identity() {
    let mut rng = StdRng::seed_from_u64(13);
    let gate = random_gate(&mut rng);

    let mut circuit = Circuit::from_gate(&gate);
    circuit.append(&gate.dagger());

    let input = zero_zero();
    let output = circuit.apply(&input).unwrap();
    assert!(output.approx_eq(&input));
}

#[test]
fn copy_mutation_does_not_affect_original_comparisons() {
    let mut rng = StdRng::seed_from_u64(17);
    let gates: Vec<Unitary> = (0..3).map(|_| random_gate(&mut rng)).collect();

    let original = Circuit::from_gates(&gates);
    let reference = Circuit::from_gates(&gates);
    let mut copy = original.clone();

    copy.append(&catalog::X1);
    assert!(original.approx_eq(&reference));
    assert!(!copy.approx_eq(&original));
}

#[test]
fn merged_circuits_compose_in_order() {
    let mut rng = StdRng::seed_from_u64(19);
    let front: Vec<Unitary> = (0..2).map(|_| random_gate(&mut rng)).collect();
    let back: Vec<Unitary> = (0..2).map(|_| random_gate(&mut rng)).collect();

    let mut merged = Circuit::from_gates(&front);
    merged.merge(&Circuit::from_gates(&back));

    let mut all = front;
    all.extend(back.iter().cloned());
    let expected = Circuit::from_gates(&all);

    assert!(merged.approx_eq(&expected));
    let state = zero_zero();
    assert!(merged
        .apply(&state)
        .unwrap()
        .approx_eq(&expected.apply(&state).unwrap()));
}
