// src/core/mod.rs

//! Core data structures and types

pub mod constants;
pub mod error;
pub mod state;

pub use constants::{AMPLITUDE_TOLERANCE, DEFAULT_SHOTS, MAX_QUBITS, NORM_TOLERANCE};
pub use error::{QftError, QubitId};
pub use state::{Statevector, basis_label, register_dim};
