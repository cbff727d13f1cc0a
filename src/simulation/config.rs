//! Simulator configuration.

use crate::core::{DEFAULT_SHOTS, NORM_TOLERANCE, QftError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Knobs for a [`Simulator`](super::Simulator) run.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```
/// use qftsim::SimulatorConfig;
///
/// let cfg = SimulatorConfig::from_json_str(r#"{ "shots": 4096, "seed": 11 }"#).unwrap();
/// assert_eq!(cfg.shots, 4096);
/// assert_eq!(cfg.seed, Some(11));
/// assert!(cfg.check_normalization);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Number of measurement samples.
    pub shots: u32,
    /// Sampling seed; a fresh random seed is drawn when absent.
    pub seed: Option<u64>,
    /// Verify `Σ|c|² ≈ 1` after the last gate.
    pub check_normalization: bool,
    /// Tolerance for the normalization check.
    pub norm_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            seed: None,
            check_normalization: true,
            norm_tolerance: NORM_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a JSON document and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, QftError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| QftError::Config {
            message: format!("invalid simulator config: {e}"),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QftError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| QftError::Config {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), QftError> {
        if self.shots == 0 {
            return Err(QftError::InvalidShots);
        }
        if !(self.norm_tolerance.is_finite() && self.norm_tolerance > 0.0) {
            return Err(QftError::Config {
                message: format!("norm_tolerance must be positive, got {}", self.norm_tolerance),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SimulatorConfig::default();
        assert_eq!(cfg.shots, 1024);
        assert_eq!(cfg.seed, None);
        assert!(cfg.check_normalization);
    }

    #[test]
    fn test_empty_json_is_default() -> Result<(), QftError> {
        assert_eq!(SimulatorConfig::from_json_str("{}")?, SimulatorConfig::default());
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = SimulatorConfig::from_json_str(r#"{ "shotz": 10 }"#);
        assert!(matches!(result, Err(QftError::Config { .. })));
    }

    #[test]
    fn test_rejects_zero_shots() {
        let result = SimulatorConfig::from_json_str(r#"{ "shots": 0 }"#);
        assert_eq!(result, Err(QftError::InvalidShots));
    }

    #[test]
    fn test_from_path() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sim.json");
        std::fs::write(&path, r#"{ "shots": 64, "check_normalization": false }"#)?;
        let cfg = SimulatorConfig::from_path(&path)?;
        assert_eq!(cfg.shots, 64);
        assert!(!cfg.check_normalization);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = SimulatorConfig::from_path("/nonexistent/qftsim.json");
        assert!(matches!(result, Err(QftError::Config { .. })));
    }
}
