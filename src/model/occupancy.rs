use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Visit counts per board square.
///
/// Counts from independent runs are combined with [`Occupancy::merge`],
/// which is a plain element-wise sum and therefore order independent.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Occupancy {
    counts: Vec<u64>,
}

impl Occupancy {
    pub fn new(squares: usize) -> Self {
        Occupancy {
            counts: vec![0; squares],
        }
    }

    pub fn record(&mut self, index: usize) -> Result<()> {
        let count = self.counts.get_mut(index).ok_or_else(|| {
            SimulationError::InvalidBoard(format!("square {index} is not on the board"))
        })?;
        *count += 1;
        Ok(())
    }

    pub fn record_path(&mut self, path: &[usize]) -> Result<()> {
        for &index in path {
            self.record(index)?;
        }
        Ok(())
    }

    pub fn merge(&mut self, other: &Occupancy) -> Result<()> {
        if self.counts.len() != other.counts.len() {
            return Err(SimulationError::InvalidBoard(format!(
                "cannot merge occupancy of {} squares into {} squares",
                other.counts.len(),
                self.counts.len()
            )));
        }
        for (count, other_count) in self.counts.iter_mut().zip(&other.counts) {
            *count += other_count;
        }
        Ok(())
    }

    pub fn count(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of all recorded visits per square; all zeros before any visit.
    pub fn frequencies(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&count| count as f64 / total as f64)
            .collect()
    }
}
