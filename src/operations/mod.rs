// src/operations/mod.rs

//! Gates the simulator understands.
//!
//! The gate set is deliberately the one a QFT needs: Hadamard on a single
//! qubit and the controlled-phase rotation `diag(1, 1, 1, e^(iθ))` between two
//! qubits.

use crate::core::{QftError, QubitId};
use std::f64::consts::PI;

/// A single gate application inside a circuit.
#[derive(Debug, Clone, PartialEq)] // f64 angle rules out Eq
pub enum Gate {
    /// Hadamard gate on `target`.
    Hadamard {
        /// Qubit the gate acts on.
        target: QubitId,
    },

    /// Controlled-phase gate. Multiplies the amplitude of every basis state
    /// with both `control` and `target` set by `e^(iθ)`.
    ///
    /// The gate is symmetric in its two qubits; the roles only matter for
    /// drawing.
    ControlledPhase {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },
}

impl Gate {
    /// All qubits the gate touches, control first.
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::Hadamard { target } => vec![*target],
            Gate::ControlledPhase { control, target, .. } => vec![*control, *target],
        }
    }

    /// Checks the gate against a register of `num_qubits` qubits.
    pub fn validate(&self, num_qubits: usize) -> Result<(), QftError> {
        for qubit in self.qubits() {
            if qubit.0 >= num_qubits {
                return Err(QftError::QubitOutOfRange { qubit, num_qubits });
            }
        }
        if let Gate::ControlledPhase { control, target, theta } = self {
            if control == target {
                return Err(QftError::SameControlTarget { qubit: *control });
            }
            if !theta.is_finite() {
                return Err(QftError::InvalidAngle { angle: *theta });
            }
        }
        Ok(())
    }

    /// Short label used when drawing the gate on its target wire.
    pub fn symbol(&self) -> String {
        match self {
            Gate::Hadamard { .. } => "H".to_string(),
            Gate::ControlledPhase { theta, .. } => format!("P({})", format_angle(*theta)),
        }
    }

    /// Gate name as used in logs and serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Hadamard { .. } => "h",
            Gate::ControlledPhase { .. } => "cp",
        }
    }
}

/// Renders an angle either as a rational multiple of π (`π/4`, `3π/8`) or as
/// a plain decimal with trailing zeros removed (`0.5`).
pub fn format_angle(theta: f64) -> String {
    for k in 0..=10u32 {
        let denom = (1u64 << k) as f64;
        let numer = theta * denom / PI;
        let rounded = numer.round();
        if rounded != 0.0 && (numer - rounded).abs() < 1e-9 {
            let n = rounded as i64;
            let prefix = match n {
                1 => "π".to_string(),
                -1 => "-π".to_string(),
                _ => format!("{n}π"),
            };
            return if k == 0 { prefix } else { format!("{prefix}/{}", 1u64 << k) };
        }
    }
    let text = format!("{theta:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" { "0".to_string() } else { text.to_string() }
}
