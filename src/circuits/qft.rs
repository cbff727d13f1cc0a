//! Quantum Fourier transform circuits.
//!
//! Gates are emitted target by target: every earlier qubit `i < j` applies a
//! controlled-phase onto qubit `j`, then `j` gets its Hadamard. On three
//! qubits this is
//!
//! ```text
//! h(0); cp(a1, 0, 1); h(1); cp(a2, 0, 2); cp(a1, 1, 2); h(2)
//! ```
//!
//! where `a_d` is the rotation for qubits `d` apart.

use super::{Circuit, CircuitBuilder};
use crate::core::QftError;
use clap::ValueEnum;
use std::f64::consts::PI;

/// How the controlled-phase angle scales with qubit distance `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AngleScale {
    /// `1 / 2^d` radians. These are the angles of the reference circuit.
    #[default]
    Unit,
    /// `π / 2^d` radians, the textbook QFT rotations.
    Pi,
}

impl AngleScale {
    /// Rotation for a control `distance` qubits away from the target.
    pub fn angle(self, distance: usize) -> f64 {
        let base = match self {
            AngleScale::Unit => 1.0,
            AngleScale::Pi => PI,
        };
        // underflows to 0.0 for huge distances instead of overflowing
        let exponent = i32::try_from(distance).unwrap_or(i32::MAX);
        base * 0.5f64.powi(exponent)
    }
}

/// Builds an `n`-qubit QFT circuit.
#[derive(Debug, Clone)]
pub struct QftBuilder {
    num_qubits: usize,
    scale: AngleScale,
}

impl QftBuilder {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            scale: AngleScale::default(),
        }
    }

    /// Selects the angle convention.
    pub fn angles(mut self, scale: AngleScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn build(self) -> Result<Circuit, QftError> {
        let mut builder = CircuitBuilder::new(self.num_qubits);
        if builder.error.is_some() {
            return builder.build();
        }
        for target in 0..self.num_qubits {
            for control in 0..target {
                builder = builder.cp(self.scale.angle(target - control), control, target);
            }
            builder = builder.h(target);
        }
        builder.build()
    }
}

/// The fixed three-qubit circuit:
/// `h(0); cp(0.5, 0, 1); h(1); cp(0.25, 0, 2); cp(0.5, 1, 2); h(2)`.
pub fn reference_circuit() -> Result<Circuit, QftError> {
    CircuitBuilder::new(3)
        .h(0)
        .cp(0.5, 0, 1)
        .h(1)
        .cp(0.25, 0, 2)
        .cp(0.5, 1, 2)
        .h(2)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_QUBITS, QubitId};
    use crate::operations::Gate;

    #[test]
    fn test_reference_matches_unit_builder() -> Result<(), QftError> {
        let built = QftBuilder::new(3).angles(AngleScale::Unit).build()?;
        assert_eq!(built, reference_circuit()?);
        Ok(())
    }

    #[test]
    fn test_reference_gate_sequence() -> Result<(), QftError> {
        let circuit = reference_circuit()?;
        let expected = vec![
            Gate::Hadamard { target: QubitId(0) },
            Gate::ControlledPhase { control: QubitId(0), target: QubitId(1), theta: 0.5 },
            Gate::Hadamard { target: QubitId(1) },
            Gate::ControlledPhase { control: QubitId(0), target: QubitId(2), theta: 0.25 },
            Gate::ControlledPhase { control: QubitId(1), target: QubitId(2), theta: 0.5 },
            Gate::Hadamard { target: QubitId(2) },
        ];
        assert_eq!(circuit.gates(), expected.as_slice());
        Ok(())
    }

    #[test]
    fn test_gate_count_grows_quadratically() -> Result<(), QftError> {
        // n hadamards + n(n-1)/2 controlled phases
        for n in 1..=6 {
            let circuit = QftBuilder::new(n).angles(AngleScale::Pi).build()?;
            assert_eq!(circuit.len(), n + n * (n - 1) / 2);
        }
        Ok(())
    }

    #[test]
    fn test_pi_angles() {
        assert!((AngleScale::Pi.angle(1) - PI / 2.0).abs() < 1e-15);
        assert!((AngleScale::Pi.angle(3) - PI / 8.0).abs() < 1e-15);
        assert_eq!(AngleScale::Unit.angle(2), 0.25);
    }

    #[test]
    fn test_angles_past_64_bits_stay_finite() {
        assert_eq!(AngleScale::Unit.angle(64), 0.5f64.powi(64));
        assert!(AngleScale::Pi.angle(70) > 0.0);
        assert_eq!(AngleScale::Pi.angle(usize::MAX), 0.0);
    }

    #[test]
    fn test_oversized_qft_is_rejected_before_building() {
        for n in [MAX_QUBITS + 1, 65, usize::MAX] {
            assert!(matches!(
                QftBuilder::new(n).angles(AngleScale::Pi).build(),
                Err(QftError::TooManyQubits { max: MAX_QUBITS, .. })
            ));
        }
        assert_eq!(QftBuilder::new(0).build(), Err(QftError::EmptyRegister));
    }

    #[test]
    fn test_parse_angle_scale() {
        assert_eq!(AngleScale::from_str("PI", true), Ok(AngleScale::Pi));
        assert_eq!(AngleScale::from_str("unit", false), Ok(AngleScale::Unit));
        assert!(AngleScale::from_str("degrees", true).is_err());
    }
}
