// src/core/state.rs

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{AMPLITUDE_TOLERANCE, MAX_QUBITS};
use super::error::QftError;

/// Dense statevector over `num_qubits` qubits.
///
/// Holds `2^n` complex amplitudes. Basis index bit `q` belongs to qubit `q`,
/// and labels print the highest qubit first, so index 1 on three qubits is
/// `"001"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// Creates the all-zero basis state `|0...0>`.
    pub fn zero(num_qubits: usize) -> Result<Self, QftError> {
        let dim = register_dim(num_qubits)?;
        let mut amplitudes = vec![Complex64::zero(); dim];
        amplitudes[0] = Complex64::one();
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Wraps an existing amplitude vector. Its length must be a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self, QftError> {
        let dim = amplitudes.len();
        if dim < 2 || !dim.is_power_of_two() {
            return Err(QftError::Incoherence {
                message: format!("amplitude vector of length {dim} is not a qubit register"),
            });
        }
        let num_qubits = dim.trailing_zeros() as usize;
        register_dim(num_qubits)?;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Read-only view of the amplitudes in basis-index order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Amplitude of one basis state, if the index is in range.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Born probabilities `|c_k|²` in basis-index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Sum of squared magnitudes; 1 for a physical state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Bitstring label of a basis index, highest qubit first.
    pub fn label(&self, index: usize) -> String {
        basis_label(index, self.num_qubits)
    }
}

impl fmt::Display for Statevector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, c) in self.amplitudes.iter().enumerate() {
            // Suppress -0.0000 noise
            let re = if c.re.abs() < AMPLITUDE_TOLERANCE { 0.0 } else { c.re };
            let im = if c.im.abs() < AMPLITUDE_TOLERANCE { 0.0 } else { c.im };
            writeln!(
                f,
                "|{}>: {:+.4}{:+.4}i  (p = {:.4})",
                self.label(index),
                re,
                im,
                c.norm_sqr()
            )?;
        }
        Ok(())
    }
}

/// Formats `index` as an `num_qubits`-wide bitstring, highest qubit first.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Number of basis states of an `num_qubits` register, `2^num_qubits`.
///
/// Fails for an empty register or one wider than `MAX_QUBITS`.
pub fn register_dim(num_qubits: usize) -> Result<usize, QftError> {
    if num_qubits == 0 {
        return Err(QftError::EmptyRegister);
    }
    if num_qubits > MAX_QUBITS {
        return Err(QftError::TooManyQubits {
            requested: num_qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(1usize << num_qubits)
}
