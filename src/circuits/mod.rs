// src/circuits/mod.rs

//! Structures for representing and building ordered sequences of gates.
//!
//! A [`Circuit`] fixes the register size up front and validates every gate as
//! it is added, so a built circuit is always simulatable.

pub mod qft;

use crate::core::{QftError, QubitId, register_dim};
use crate::operations::Gate;
use std::fmt;

pub use qft::{AngleScale, QftBuilder, reference_circuit};

/// An ordered list of gates acting on a fixed-size qubit register.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates an empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Appends a gate after validating it against the register.
    pub fn add_gate(&mut self, gate: Gate) -> Result<(), QftError> {
        gate.validate(self.num_qubits)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Appends every gate from `gates`, stopping at the first invalid one.
    pub fn add_gates<I>(&mut self, gates: I) -> Result<(), QftError>
    where
        I: IntoIterator<Item = Gate>,
    {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of layers when gates on disjoint qubits run in parallel.
    pub fn depth(&self) -> usize {
        let mut wire_depth = vec![0usize; self.num_qubits];
        for gate in &self.gates {
            let qubits = gate.qubits();
            let layer = qubits.iter().map(|q| wire_depth[q.0]).max().unwrap_or(0) + 1;
            for q in qubits {
                wire_depth[q.0] = layer;
            }
        }
        wire_depth.into_iter().max().unwrap_or(0)
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining helper for building a [`Circuit`].
///
/// Errors are held until [`CircuitBuilder::build`] so a chain reads like the
/// gate list it describes.
pub struct CircuitBuilder {
    circuit: Circuit,
    error: Option<QftError>,
}

impl CircuitBuilder {
    /// Starts a circuit on `num_qubits` qubits. An empty or oversized
    /// register is reported by [`CircuitBuilder::build`].
    pub fn new(num_qubits: usize) -> Self {
        let error = register_dim(num_qubits).err();
        Self {
            circuit: Circuit::new(num_qubits),
            error,
        }
    }

    /// Adds a single gate.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.circuit.add_gate(gate) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Adds a Hadamard gate on `target`.
    pub fn h(self, target: usize) -> Self {
        self.add_gate(Gate::Hadamard { target: QubitId(target) })
    }

    /// Adds a controlled-phase gate. Argument order is `(theta, control, target)`.
    pub fn cp(self, theta: f64, control: usize, target: usize) -> Self {
        self.add_gate(Gate::ControlledPhase {
            control: QubitId(control),
            target: QubitId(target),
            theta,
        })
    }

    /// Returns the circuit, or the first error hit while adding gates.
    pub fn build(self) -> Result<Circuit, QftError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.circuit),
        }
    }
}

const H_WIRE: char = '─';
const V_WIRE: char = '│';
const CROSS: char = '┼';
const CONTROL: &str = "■";

fn pad_cell(symbol: &str, width: usize, fill: char) -> String {
    let len = symbol.chars().count();
    if len >= width {
        return symbol.to_string();
    }
    let total = width - len;
    let pre = total / 2;
    let post = total - pre;
    format!("{}{}{}", fill.to_string().repeat(pre), symbol, fill.to_string().repeat(post))
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.num_qubits;
        writeln!(f, "Circuit[{} gates on {} qubits]", self.gates.len(), n)?;
        if n == 0 {
            return Ok(());
        }

        let labels: Vec<String> = (0..n).map(|q| format!("{}: ", QubitId(q))).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        // cells[row][col] holds the wire segment, connectors[row][col] the char
        // drawn between row and row + 1
        let mut cells: Vec<Vec<String>> = vec![Vec::with_capacity(self.gates.len()); n];
        let mut connectors: Vec<Vec<char>> = vec![Vec::with_capacity(self.gates.len()); n];
        let mut widths: Vec<usize> = Vec::with_capacity(self.gates.len());

        for gate in &self.gates {
            let mut column: Vec<String> = vec![String::new(); n];
            let mut links: Vec<char> = vec![' '; n];
            match gate {
                Gate::Hadamard { target } => {
                    column[target.0] = gate.symbol();
                }
                Gate::ControlledPhase { control, target, .. } => {
                    column[control.0] = CONTROL.to_string();
                    column[target.0] = gate.symbol();
                    let lo = control.0.min(target.0);
                    let hi = control.0.max(target.0);
                    for row in lo + 1..hi {
                        column[row] = CROSS.to_string();
                    }
                    for link in links.iter_mut().take(hi).skip(lo) {
                        *link = V_WIRE;
                    }
                }
            }
            let width = column.iter().map(|s| s.chars().count()).max().unwrap_or(1) + 2;
            widths.push(width);
            for row in 0..n {
                cells[row].push(std::mem::take(&mut column[row]));
                connectors[row].push(links[row]);
            }
        }

        for row in 0..n {
            write!(f, "{:<width$}", labels[row], width = label_width)?;
            for (col, width) in widths.iter().enumerate() {
                write!(f, "{}", pad_cell(&cells[row][col], *width, H_WIRE))?;
            }
            writeln!(f, "{}", H_WIRE)?;

            if row + 1 < n {
                write!(f, "{}", " ".repeat(label_width))?;
                for (col, width) in widths.iter().enumerate() {
                    let link = connectors[row][col].to_string();
                    write!(f, "{}", pad_cell(&link, *width, ' '))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
