//! Prepare a Bell pair, inspect its statistics and collapse it

use duoq::{catalog, Circuit, MeasureTarget, StateVector};
use num_complex::Complex64;

fn main() {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);

    let mut circuit = Circuit::new();
    circuit.append(&catalog::H1);
    circuit.append(&catalog::CNOT1);
    println!("circuit:\n{}\n", circuit);

    let input = StateVector::new(&[one, zero, zero, zero]).expect("valid state");
    let mut bell = circuit.apply(&input).expect("circuit applies");
    println!("bell state: {}", bell);

    println!("\nmeasurement statistics for both qubits:");
    for outcome in bell.measurement_stats(MeasureTarget::Both) {
        println!("  {} with probability {:.4}", outcome.state, outcome.probability);
    }

    let observed = bell.collapse(MeasureTarget::Both);
    println!("\ncollapsed to: {}", observed);
}
