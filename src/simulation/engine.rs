// src/simulation/engine.rs
use crate::core::{QftError, QubitId, Statevector};
use crate::operations::Gate;
use crate::simulation::results::Counts;
use crate::validation::check_normalization;
use num_complex::Complex64;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::{debug, trace};

/// Owns the statevector while a circuit runs and applies gates to it in place.
/// (Internal visibility)
pub(crate) struct SimulationEngine {
    state: Statevector,
}

impl SimulationEngine {
    /// Starts from `|0...0>` on `num_qubits` qubits.
    pub(crate) fn init(num_qubits: usize) -> Result<Self, QftError> {
        Ok(Self {
            state: Statevector::zero(num_qubits)?,
        })
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: Statevector) -> Result<(), QftError> {
        if state.dim() != self.state.dim() {
            return Err(QftError::Incoherence {
                message: format!(
                    "cannot set state: dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            });
        }
        self.state = state;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &Statevector {
        &self.state
    }

    pub(crate) fn into_state(self) -> Statevector {
        self.state
    }

    /// Applies one gate. The gate is re-validated against this register.
    pub(crate) fn apply_gate(&mut self, gate: &Gate) -> Result<(), QftError> {
        gate.validate(self.state.num_qubits())?;
        debug!(gate = gate.name(), qubits = ?gate.qubits(), "applying gate");
        match gate {
            Gate::Hadamard { target } => self.apply_hadamard(*target),
            Gate::ControlledPhase { control, target, theta } => {
                self.apply_controlled_phase(*control, *target, *theta)
            }
        }
        Ok(())
    }

    /// Mixes each amplitude pair that differs only in the target bit.
    fn apply_hadamard(&mut self, target: QubitId) {
        let mask = target.mask();
        let amps = self.state.amplitudes_mut();
        for i in 0..amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = amps[i];
                let b = amps[j];
                amps[i] = (a + b) * FRAC_1_SQRT_2;
                amps[j] = (a - b) * FRAC_1_SQRT_2;
            }
        }
    }

    /// Diagonal gate: only basis states with both bits set pick up `e^(iθ)`.
    fn apply_controlled_phase(&mut self, control: QubitId, target: QubitId, theta: f64) {
        let both = control.mask() | target.mask();
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.state.amplitudes_mut().iter_mut().enumerate() {
            if i & both == both {
                *amp *= phase;
            }
        }
    }

    /// Fails with `Incoherence` if the state norm drifted beyond `tolerance`.
    pub(crate) fn validate_state(&self, tolerance: f64) -> Result<(), QftError> {
        check_normalization(&self.state, Some(tolerance))
    }

    /// Measures every qubit `shots` times without collapsing the engine state.
    ///
    /// Outcomes are drawn by inverting the cumulative Born distribution, so a
    /// given `rng` seed always produces the same counts.
    pub(crate) fn sample(&self, shots: u32, rng: &mut StdRng) -> Result<Counts, QftError> {
        if shots == 0 {
            return Err(QftError::InvalidShots);
        }

        let mut cumulative = Vec::with_capacity(self.state.dim());
        let mut running = 0.0;
        for p in self.state.probabilities() {
            running += p;
            cumulative.push(running);
        }
        if running <= 0.0 {
            return Err(QftError::Incoherence {
                message: "statevector has zero norm, nothing to sample".to_string(),
            });
        }

        let last = cumulative.len() - 1;
        let mut counts = Counts::new();
        for _ in 0..shots {
            let r: f64 = StandardUniform.sample(rng);
            let target = r * running;
            // First index whose cumulative weight exceeds the draw
            let index = cumulative.partition_point(|&c| c <= target).min(last);
            counts.record(self.state.label(index));
        }
        trace!(distinct = counts.len(), "sampling finished");
        Ok(counts)
    }
}
