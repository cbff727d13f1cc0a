//! Numeric limits and defaults shared by the simulator.

/// Shots sampled when no count is configured.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Largest register the dense statevector accepts (2^24 amplitudes).
pub const MAX_QUBITS: usize = 24;

/// Allowed deviation of `Σ|c|²` from 1.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Amplitudes below this squared magnitude are treated as zero.
pub const AMPLITUDE_TOLERANCE: f64 = 1e-12;
