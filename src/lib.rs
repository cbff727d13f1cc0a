// src/lib.rs

//! `qftsim` - quantum Fourier transform circuits on a small statevector simulator
//!
//! Build a QFT circuit, draw it, evolve `|0...0>` through it, sample
//! measurement counts, and render them as a histogram. The simulator only
//! knows the two gates a QFT needs: Hadamard and controlled-phase.

pub mod circuits;
pub mod core;
pub mod operations;
pub mod simulation;
pub mod validation;
pub mod visualization;

// Re-export the most common types for easier top-level use
pub use circuits::{AngleScale, Circuit, CircuitBuilder, QftBuilder, reference_circuit};
pub use crate::core::{MAX_QUBITS, QftError, QubitId, Statevector};
pub use operations::Gate;
pub use simulation::{Counts, SimulationResult, Simulator, SimulatorConfig};
pub use validation::{
    check_normalization,
    check_uniform,
    check_uniform_superposition,
    chi_square_uniform,
    total_variation_uniform,
};
pub use visualization::{Histogram, HistogramBar};

// Example: the reference three-qubit QFT
// Applies the fixed gate sequence to |000> and checks that every basis state
// ends up with the same probability.
/// ```
/// use qftsim::{reference_circuit, Simulator, SimulatorConfig, Histogram, QftError};
///
/// let circuit = reference_circuit()?;
/// println!("{}", circuit);
///
/// let simulator = Simulator::with_config(SimulatorConfig::default().with_seed(2024));
/// let result = simulator.run(&circuit)?;
///
/// // H on every qubit of |000> before any phase can act: uniform over 8 states
/// for amp in result.statevector().amplitudes() {
///     assert!((amp.re - 1.0 / 8f64.sqrt()).abs() < 1e-12);
///     assert!(amp.im.abs() < 1e-12);
/// }
/// assert_eq!(result.counts().total(), 1024);
///
/// println!("{}", Histogram::from_counts(result.counts(), circuit.num_qubits())?);
/// # Ok::<(), QftError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
