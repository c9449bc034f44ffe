//! Summary statistics over per-trial dot counts.
use crate::error::{Error, Result};

/// Mean and sample standard deviation of a sequence of trial results.
#[derive(Debug, Clone)]
pub struct CoverageStats {
    /// Per-trial dot counts, in trial order.
    pub values: Vec<u64>,
    /// Arithmetic mean of the counts.
    pub mean: f64,
    /// Sample standard deviation (divisor N - 1).
    pub std_dev: f64,
}

impl CoverageStats {
    /// Computes statistics over `values`. At least two samples are required
    /// for the N - 1 divisor to be defined.
    pub fn from_values(values: Vec<u64>) -> Result<Self> {
        if values.len() < 2 {
            return Err(Error::InvalidConfig(
                "statistics require at least two trials".into(),
            ));
        }

        let n = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / (n - 1.0);

        Ok(Self {
            values,
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Number of trials summarized.
    pub fn trials(&self) -> usize {
        self.values.len()
    }

    /// Mean and standard deviation divided by `scale`.
    pub fn scaled(&self, scale: f64) -> (f64, f64) {
        (self.mean / scale, self.std_dev / scale)
    }
}
