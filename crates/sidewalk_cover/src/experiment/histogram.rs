//! Frequency histogram over per-trial bin counts.

/// Occurrence counts per bin-count value, dense over `[0, max_observed]`.
#[derive(Debug, Clone)]
pub struct CoverageHistogram {
    counts: Vec<u64>,
    trials: usize,
}

impl CoverageHistogram {
    /// Tallies `values` into a dense histogram. Unobserved bin counts up to
    /// the maximum observed are present with a zero count.
    pub fn from_values(values: &[u64]) -> Self {
        let max = values.iter().copied().max().unwrap_or(0) as usize;
        let mut counts = vec![0u64; max + 1];
        for &v in values {
            counts[v as usize] += 1;
        }
        Self {
            counts,
            trials: values.len(),
        }
    }

    /// Occurrence counts indexed by bin-count value.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of trials tallied.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Fraction of trials that produced `bin_count` bins.
    pub fn frequency(&self, bin_count: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.counts.get(bin_count).copied().unwrap_or(0) as f64 / self.trials as f64
    }

    /// Iterates `(bin_count, occurrences)` pairs in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn densifies_gaps_with_zero_counts() {
        let hist = CoverageHistogram::from_values(&[3, 1, 3]);
        assert_eq!(hist.counts(), &[0, 1, 0, 2]);
        assert_eq!(hist.trials(), 3);
    }

    #[test]
    fn counts_sum_to_trial_count() {
        let hist = CoverageHistogram::from_values(&[2, 2, 4, 0, 1]);
        assert_eq!(hist.counts().iter().sum::<u64>(), 5);
    }

    #[test]
    fn frequencies_sum_to_one() {
        let hist = CoverageHistogram::from_values(&[2, 2, 4, 0, 1]);
        let total: f64 = (0..hist.counts().len()).map(|i| hist.frequency(i)).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn iter_yields_contiguous_indices() {
        let hist = CoverageHistogram::from_values(&[5]);
        let indices: Vec<usize> = hist.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, (0..=5).collect::<Vec<_>>());
    }
}
