//! Experiment runner: drives the grid simulator across N independent trials.
//!
//! [`ExperimentRunner`] creates one [`Grid`] per invocation and reuses it for
//! every trial through the epoch toggle. Mode A ([`ExperimentRunner::run_statistics`])
//! collects per-trial dot counts into [`CoverageStats`]; Mode B
//! ([`ExperimentRunner::run_histogram`]) tallies per-trial bin counts into a
//! [`CoverageHistogram`].
use rand::rand_core::RngCore;
use tracing::info;

use crate::error::{Error, Result};
use crate::experiment::events::{EventSink, TrialEvent};
use crate::experiment::histogram::CoverageHistogram;
use crate::experiment::stats::CoverageStats;
use crate::grid::Grid;

pub mod events;
pub mod histogram;
pub mod stats;

/// Configuration for an experiment run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Side length of the mesh.
    pub mesh_side: usize,
    /// Side length of a dot.
    pub dot_side: usize,
    /// Number of independent covering passes.
    pub trials: usize,
    /// Placements per bin; `None` selects statistics mode.
    pub binwidth: Option<usize>,
}

impl ExperimentConfig {
    /// Creates a configuration with the default trial count of 100.
    pub fn new(mesh_side: usize, dot_side: usize) -> Self {
        Self {
            mesh_side,
            dot_side,
            trials: 100,
            binwidth: None,
        }
    }

    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the bin width, switching the experiment to histogram mode.
    pub fn with_binwidth(mut self, binwidth: usize) -> Self {
        self.binwidth = Some(binwidth);
        self
    }

    /// Ratio of mesh area to dot area.
    pub fn scale_factor(&self) -> f64 {
        (self.mesh_side * self.mesh_side) as f64 / (self.dot_side * self.dot_side) as f64
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.mesh_side == 0 {
            return Err(Error::InvalidConfig("mesh side must be > 0".into()));
        }
        if self.dot_side == 0 {
            return Err(Error::InvalidConfig("dot side must be > 0".into()));
        }
        if self.dot_side > self.mesh_side {
            return Err(Error::InvalidConfig(format!(
                "dot side {} must not exceed mesh side {}",
                self.dot_side, self.mesh_side
            )));
        }
        if self.trials == 0 {
            return Err(Error::InvalidConfig("trial count must be > 0".into()));
        }
        match self.binwidth {
            None if self.trials < 2 => Err(Error::InvalidConfig(
                "statistics mode requires at least two trials".into(),
            )),
            Some(0) => Err(Error::InvalidConfig("binwidth must be > 0".into())),
            _ => Ok(()),
        }
    }
}

/// Runs covering passes over a single reused [`Grid`].
pub struct ExperimentRunner {
    config: ExperimentConfig,
    grid: Grid,
}

impl ExperimentRunner {
    /// Creates a runner, validating the configuration before any simulation.
    pub fn try_new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::try_new(config.mesh_side, config.dot_side)?;
        Ok(Self { config, grid })
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs all trials with full covering passes and summarizes the counts.
    pub fn run_statistics(&mut self, rng: &mut impl RngCore) -> Result<CoverageStats> {
        self.run_statistics_with_events(rng, &mut ())
    }

    /// Like [`Self::run_statistics`], emitting a [`TrialEvent`] per trial.
    pub fn run_statistics_with_events(
        &mut self,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<CoverageStats> {
        if self.config.trials < 2 {
            return Err(Error::InvalidConfig(
                "statistics mode requires at least two trials".into(),
            ));
        }

        let values = self.run_trials(rng, sink, |grid, rng| grid.cover_full(rng));
        CoverageStats::from_values(values)
    }

    /// Runs all trials with binned covering passes and tallies the bin counts.
    pub fn run_histogram(&mut self, rng: &mut impl RngCore) -> Result<CoverageHistogram> {
        self.run_histogram_with_events(rng, &mut ())
    }

    /// Like [`Self::run_histogram`], emitting a [`TrialEvent`] per trial.
    pub fn run_histogram_with_events(
        &mut self,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<CoverageHistogram> {
        let binwidth = self.config.binwidth.ok_or_else(|| {
            Error::InvalidConfig("histogram mode requires a binwidth".into())
        })?;

        let values = self.run_trials(rng, sink, |grid, rng| grid.cover_binned(binwidth, rng));
        Ok(CoverageHistogram::from_values(&values))
    }

    fn run_trials<R: RngCore>(
        &mut self,
        rng: &mut R,
        sink: &mut dyn EventSink,
        mut pass: impl FnMut(&mut Grid, &mut R) -> u64,
    ) -> Vec<u64> {
        info!(
            "Covering {side}x{side} mesh with {dot}x{dot} dots over {trials} trials.",
            side = self.config.mesh_side,
            dot = self.config.dot_side,
            trials = self.config.trials,
        );
        sink.send(TrialEvent::RunStarted {
            config: self.config.clone(),
        });

        let mut values = Vec::with_capacity(self.config.trials);
        for index in 0..self.config.trials {
            let value = pass(&mut self.grid, &mut *rng);
            sink.send(TrialEvent::TrialFinished { index, value });
            values.push(value);
        }

        sink.send(TrialEvent::RunFinished {
            trials: self.config.trials,
        });
        values
    }
}
