// src/simulation/mod.rs

//! Runs a [`Circuit`] on the dense statevector simulator.
//!
//! [`Simulator`] is the public entry point; the crate-private
//! `SimulationEngine` holds the amplitudes and applies gates to them.

mod config;
pub(crate) mod engine;
mod results;

pub use config::SimulatorConfig;
pub use results::{Counts, SimulationResult};

use crate::circuits::Circuit;
use crate::core::{QftError, Statevector};
use engine::SimulationEngine;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Executes circuits from `|0...0>` and samples measurement counts.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a Simulator with default settings (1024 shots, random seed).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Evolves `|0...0>` through every gate and returns the final state.
    pub fn statevector(&self, circuit: &Circuit) -> Result<Statevector, QftError> {
        Ok(self.evolve(circuit)?.into_state())
    }

    /// Runs the circuit, then measures all qubits `shots` times.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the final statevector and sampled counts.
    /// * `Err(QftError)` for an invalid configuration, a gate that does not fit
    ///   the register, or a state that failed the normalization check.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult, QftError> {
        self.config.validate()?;
        let seed = self.config.seed.unwrap_or_else(rand::random);
        info!(
            qubits = circuit.num_qubits(),
            gates = circuit.len(),
            shots = self.config.shots,
            seed,
            "running circuit"
        );

        let engine = self.evolve(circuit)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let counts = engine.sample(self.config.shots, &mut rng)?;
        debug!(distinct = counts.len(), "sampled counts");

        Ok(SimulationResult::new(engine.into_state(), counts, self.config.shots, seed))
    }

    fn evolve(&self, circuit: &Circuit) -> Result<SimulationEngine, QftError> {
        let mut engine = SimulationEngine::init(circuit.num_qubits())?;
        for gate in circuit.gates() {
            engine.apply_gate(gate)?;
        }
        if self.config.check_normalization {
            engine.validate_state(self.config.norm_tolerance)?;
        }
        Ok(engine)
    }
}
