//! Error handling logic

use std::fmt;

use thiserror::Error;

/// Index of a qubit in the simulated register.
///
/// Qubit `q` owns bit `q` of a basis-state index, so qubit 0 is the least
/// significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl QubitId {
    /// Bit mask selecting this qubit inside a basis-state index.
    pub fn mask(self) -> usize {
        1 << self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Errors raised while building or simulating a circuit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QftError {
    /// A register needs at least one qubit.
    #[error("cannot simulate a register with zero qubits")]
    EmptyRegister,

    /// The statevector for this many qubits would not fit the simulator.
    #[error("{requested} qubits requested, the simulator supports at most {max}")]
    TooManyQubits {
        /// Qubits asked for
        requested: usize,
        /// Upper bound
        max: usize,
    },

    /// A gate names a qubit outside the register.
    #[error("qubit {qubit} is outside a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// Offending qubit
        qubit: QubitId,
        /// Register size
        num_qubits: usize,
    },

    /// Controlled gates need distinct control and target qubits.
    #[error("control and target are both {qubit}")]
    SameControlTarget {
        /// The repeated qubit
        qubit: QubitId,
    },

    /// Phase angles must be finite.
    #[error("phase angle {angle} is not finite")]
    InvalidAngle {
        /// The rejected angle
        angle: f64,
    },

    /// Sampling needs at least one shot.
    #[error("number of shots must be positive")]
    InvalidShots,

    /// The statevector drifted away from unit norm.
    #[error("incoherent state: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// Sampled counts are too far from the uniform distribution.
    #[error("counts are not uniform: total variation {distance:.4} exceeds {limit:.4}")]
    NotUniform {
        /// Measured total variation distance
        distance: f64,
        /// Accepted maximum
        limit: f64,
    },

    /// Simulator configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Config failure message
        message: String,
    },
}
