// src/validation/mod.rs

//! Checks on statevectors and sampled counts.
//!
//! The QFT of `|0...0>` is the uniform superposition, so the useful checks
//! here compare a state or a histogram against the uniform distribution.

use crate::core::{NORM_TOLERANCE, QftError, Statevector, basis_label, register_dim};
use crate::simulation::Counts;

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `Statevector` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to `NORM_TOLERANCE`.
pub fn check_normalization(state: &Statevector, tolerance: Option<f64>) -> Result<(), QftError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QftError::Incoherence {
            message: format!(
                "Sum(|c_i|^2) = {} deviates from 1 by more than {}",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that every basis state carries probability `1 / 2^n`.
pub fn check_uniform_superposition(state: &Statevector, tolerance: f64) -> Result<(), QftError> {
    let expected = 1.0 / state.dim() as f64;
    for (index, p) in state.probabilities().into_iter().enumerate() {
        if (p - expected).abs() > tolerance {
            return Err(QftError::Incoherence {
                message: format!(
                    "|{}> has probability {:.6}, expected {:.6}",
                    state.label(index),
                    p,
                    expected
                ),
            });
        }
    }
    Ok(())
}

/// Pearson's χ² statistic of `counts` against the uniform distribution over
/// all `2^num_qubits` outcomes. Unobserved outcomes contribute as zero counts.
///
/// With `2^n - 1` degrees of freedom; for 3 qubits the 0.1% critical value is
/// about 24.3. `num_qubits` must be a register the simulator accepts.
pub fn chi_square_uniform(counts: &Counts, num_qubits: usize) -> Result<f64, QftError> {
    let outcomes = register_dim(num_qubits)?;
    let total = counts.total() as f64;
    if total == 0.0 {
        return Ok(0.0);
    }
    let expected = total / outcomes as f64;
    Ok((0..outcomes)
        .map(|k| {
            let observed = counts.get(&basis_label(k, num_qubits)) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum())
}

/// Total variation distance between the empirical distribution and uniform.
/// Ranges from 0 (identical) to `1 - 1/2^n` (all mass on one outcome).
pub fn total_variation_uniform(counts: &Counts, num_qubits: usize) -> Result<f64, QftError> {
    let outcomes = register_dim(num_qubits)?;
    let uniform = 1.0 / outcomes as f64;
    let half_l1: f64 = (0..outcomes)
        .map(|k| (counts.probability(&basis_label(k, num_qubits)) - uniform).abs())
        .sum();
    Ok(half_l1 / 2.0)
}

/// Fails with `NotUniform` when the counts sit further than `max_distance`
/// (total variation) from the uniform distribution.
pub fn check_uniform(counts: &Counts, num_qubits: usize, max_distance: f64) -> Result<(), QftError> {
    let distance = total_variation_uniform(counts, num_qubits)?;
    if distance > max_distance {
        Err(QftError::NotUniform {
            distance,
            limit: max_distance,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_QUBITS;
    use num_complex::Complex64;

    fn counts_of(pairs: &[(&str, u64)]) -> Counts {
        pairs.iter().map(|(l, n)| (l.to_string(), *n)).collect()
    }

    #[test]
    fn test_normalization() -> Result<(), QftError> {
        check_normalization(&Statevector::zero(2)?, None)?;
        let v = Statevector::from_amplitudes(vec![Complex64::new(0.9, 0.0), Complex64::new(0.1, 0.0)])?;
        assert!(check_normalization(&v, None).is_err());
        assert!(check_normalization(&v, Some(0.5)).is_ok());
        Ok(())
    }

    #[test]
    fn test_uniform_superposition() -> Result<(), QftError> {
        let half = Complex64::new(0.5, 0.0);
        let uniform = Statevector::from_amplitudes(vec![half, -half, half, Complex64::new(0.0, 0.5)])?;
        check_uniform_superposition(&uniform, 1e-12)?;
        assert!(check_uniform_superposition(&Statevector::zero(2)?, 1e-12).is_err());
        Ok(())
    }

    #[test]
    fn test_perfectly_uniform_counts() -> Result<(), QftError> {
        let counts = counts_of(&[("00", 25), ("01", 25), ("10", 25), ("11", 25)]);
        assert_eq!(chi_square_uniform(&counts, 2)?, 0.0);
        assert_eq!(total_variation_uniform(&counts, 2)?, 0.0);
        check_uniform(&counts, 2, 0.01)
    }

    #[test]
    fn test_point_mass_is_far_from_uniform() -> Result<(), QftError> {
        let counts = counts_of(&[("000", 800)]);
        // expected 100 per outcome: (700²/100) + 7 * (100²/100)
        assert!((chi_square_uniform(&counts, 3)? - 5600.0).abs() < 1e-9);
        assert!((total_variation_uniform(&counts, 3)? - 0.875).abs() < 1e-12);
        assert!(matches!(check_uniform(&counts, 3, 0.05), Err(QftError::NotUniform { .. })));
        Ok(())
    }

    #[test]
    fn test_empty_counts() -> Result<(), QftError> {
        assert_eq!(chi_square_uniform(&Counts::new(), 2)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_register_size_is_bounded() {
        let counts = counts_of(&[("0", 4)]);
        for n in [0, MAX_QUBITS + 1, 64, 200] {
            assert!(chi_square_uniform(&counts, n).is_err());
            assert!(total_variation_uniform(&counts, n).is_err());
            assert!(check_uniform(&counts, n, 1.0).is_err());
        }
        assert!(matches!(
            total_variation_uniform(&counts, 64),
            Err(QftError::TooManyQubits { requested: 64, .. })
        ));
    }
}
