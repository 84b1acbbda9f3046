//! Benchmark configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::CELL_COUNT};

/// Default total running time targeted by the unpruned benchmark runs
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(30);

/// Default number of decimal places in reported figures
pub const DEFAULT_PRECISION: usize = 3;

/// Configuration for a pruning benchmark.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tictactoe_minimax::benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::default()
///     .with_time_budget(Duration::from_secs(5))
///     .with_precision(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Estimated running time of the unpruned runs; converted into an
    /// iteration count up front, never enforced as a live timeout
    pub time_budget: Duration,
    /// Decimal places used when displaying results
    pub precision: usize,
    /// Search depth of every minimax call
    pub depth: u32,
}

impl BenchmarkConfig {
    /// Set the time budget.
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Set the display precision.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Check the configuration before running.
    ///
    /// # Errors
    ///
    /// Returns error if the time budget is zero or the depth exceeds the cell count.
    pub fn validate(&self) -> Result<()> {
        if self.time_budget.is_zero() {
            return Err(Error::InvalidBenchmarkConfig {
                message: "time budget must be greater than zero".to_string(),
            });
        }
        if self.depth as usize > CELL_COUNT {
            return Err(Error::InvalidBenchmarkConfig {
                message: format!("depth {} exceeds the {CELL_COUNT} cells", self.depth),
            });
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            precision: DEFAULT_PRECISION,
            depth: CELL_COUNT as u32,
        }
    }
}
