use crate::core::Statevector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Measurement outcome counts keyed by bitstring label (highest qubit first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: BTreeMap<String, u64>,
}

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation of `label`. (Internal visibility)
    pub(crate) fn record(&mut self, label: String) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    /// Count for `label`, 0 if never observed.
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Observed outcomes in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Outcomes sorted by count, most frequent first; ties keep label order.
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// Relative frequency of `label`.
    pub fn probability(&self, label: &str) -> f64 {
        let total = self.total();
        if total == 0 { 0.0 } else { self.get(label) as f64 / total as f64 }
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (label, n) in iter {
            *counts.entry(label).or_insert(0) += n;
        }
        Self { counts }
    }
}

/// Everything one simulator run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    statevector: Statevector,
    counts: Counts,
    shots: u32,
    seed: u64,
}

impl SimulationResult {
    pub(crate) fn new(statevector: Statevector, counts: Counts, shots: u32, seed: u64) -> Self {
        Self {
            statevector,
            counts,
            shots,
            seed,
        }
    }

    /// Final statevector before measurement.
    pub fn statevector(&self) -> &Statevector {
        &self.statevector
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Seed that drove sampling; rerunning with it reproduces the counts.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn num_qubits(&self) -> usize {
        self.statevector.num_qubits()
    }

    /// Exact Born probability of `label` from the statevector.
    pub fn probability(&self, label: &str) -> Option<f64> {
        if label.len() != self.num_qubits() {
            return None;
        }
        let index = usize::from_str_radix(label, 2).ok()?;
        self.statevector.amplitude(index).map(|c| c.norm_sqr())
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results ({} shots, seed {}):", self.shots, self.seed)?;
        writeln!(f, "  Statevector:")?;
        for line in self.statevector.to_string().lines() {
            writeln!(f, "    {line}")?;
        }
        writeln!(f, "  Counts:")?;
        if self.counts.is_empty() {
            writeln!(f, "    No outcomes recorded.")?;
        }
        for (label, n) in self.counts.iter() {
            writeln!(f, "    {label}: {n}")?;
        }
        Ok(())
    }
}
