//! Event types and sinks for observing experiment runs.
//!
//! This module defines [`TrialEvent`] and a set of sinks to collect or forward
//! per-trial results while an [`crate::experiment::ExperimentRunner`] executes.
//! All I/O driven by these events happens at trial boundaries; the grid
//! simulator itself never prints or writes.
use crate::experiment::ExperimentConfig;

/// Describes events emitted while running an experiment.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum TrialEvent {
    /// Emitted once before the first trial.
    RunStarted {
        /// The experiment configuration used.
        config: ExperimentConfig,
    },

    /// Emitted after each trial completes.
    TrialFinished {
        /// Zero-based trial index.
        index: usize,
        /// Dot count (statistics mode) or bin count (histogram mode).
        value: u64,
    },

    /// Emitted once after the last trial.
    RunFinished {
        /// Number of trials executed.
        trials: usize,
    },
}

/// A generic event sink that accepts [`TrialEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: TrialEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: TrialEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(TrialEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(TrialEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(TrialEvent),
{
    #[inline]
    fn send(&mut self, event: TrialEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<TrialEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<TrialEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[TrialEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: TrialEvent) {
        self.events.push(event);
    }
}
