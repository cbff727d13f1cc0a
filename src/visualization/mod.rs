//! Text histograms of measurement counts.

use crate::core::{QftError, basis_label, register_dim};
use crate::simulation::Counts;
use console::style;
use serde::Serialize;
use std::fmt;

const BAR: char = '█';

/// A single bar in the histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBar {
    /// Bitstring result.
    pub bitstring: String,
    /// Count of this outcome.
    pub count: u64,
    /// Probability (count / shots).
    pub probability: f64,
}

/// Histogram over every basis state of a register, including outcomes that
/// were never observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub shots: u64,
    pub bars: Vec<HistogramBar>,
}

impl Histogram {
    /// One bar per basis state, in label order.
    pub fn from_counts(counts: &Counts, num_qubits: usize) -> Result<Self, QftError> {
        let shots = counts.total();
        let bars = (0..register_dim(num_qubits)?)
            .map(|k| {
                let bitstring = basis_label(k, num_qubits);
                let count = counts.get(&bitstring);
                let probability = if shots == 0 { 0.0 } else { count as f64 / shots as f64 };
                HistogramBar {
                    bitstring,
                    count,
                    probability,
                }
            })
            .collect();
        Ok(Self { shots, bars })
    }

    /// Bar for the most frequent outcome; the lowest label wins ties.
    pub fn most_frequent(&self) -> Option<&HistogramBar> {
        self.bars
            .iter()
            .fold(None, |best: Option<&HistogramBar>, bar| match best {
                Some(b) if b.count >= bar.count => Some(b),
                _ => Some(bar),
            })
    }

    /// Renders `label: count (pct%) bars`, scaling the tallest bar to `width`
    /// cells.
    pub fn render(&self, width: usize) -> String {
        self.render_rows(width, |bar, cells| {
            format!(
                "{}: {:>6} ({:>5.2}%) {}",
                bar.bitstring,
                bar.count,
                bar.probability * 100.0,
                cells
            )
        })
    }

    /// Same rows as [`Histogram::render`] with terminal colors. Styling is
    /// dropped when stdout is not a terminal.
    pub fn render_styled(&self, width: usize) -> String {
        self.render_rows(width, |bar, cells| {
            format!(
                "{}: {:>6} ({:>5.2}%) {}",
                style(&bar.bitstring).cyan(),
                bar.count,
                bar.probability * 100.0,
                style(cells).green()
            )
        })
    }

    fn render_rows<F>(&self, width: usize, row: F) -> String
    where
        F: Fn(&HistogramBar, String) -> String,
    {
        let max = self.bars.iter().map(|b| b.count).max().unwrap_or(0);
        let mut out = String::new();
        for bar in &self.bars {
            out.push_str(&row(bar, bar_cells(bar.count, max, width)));
            out.push('\n');
        }
        out
    }
}

/// Bar made of `count / max * width` cells, rounded.
fn bar_cells(count: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = ((count as f64 / max as f64) * width as f64).round() as usize;
    BAR.to_string().repeat(len)
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(40))
    }
}
