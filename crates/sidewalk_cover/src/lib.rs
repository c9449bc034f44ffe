#![forbid(unsafe_code)]
//! sidewalk_cover: Monte Carlo estimation of how many randomly placed drops
//! cover a square grid.
//!
//! Modules:
//! - grid: the reusable bit-grid simulator (single/multi dot placement, full and binned covering passes)
//! - experiment: N-trial driver producing summary statistics or a coverage-time histogram
//! - error: crate error type and result alias
//!
//! The grid is reused across trials by tagging coverage with an alternating
//! epoch instead of reallocating; see [`grid::Grid`].
pub mod error;
pub mod experiment;
pub mod grid;

/// Convenient re-exports for common types. Import with `use sidewalk_cover::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::experiment::events::{EventSink, FnSink, TrialEvent, VecSink};
    pub use crate::experiment::histogram::CoverageHistogram;
    pub use crate::experiment::stats::CoverageStats;
    pub use crate::experiment::{ExperimentConfig, ExperimentRunner};
    pub use crate::grid::Grid;
}
