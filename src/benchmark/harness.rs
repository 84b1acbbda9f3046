//! Timed minimax runs with and without alpha-beta pruning
//!
//! A *step* is `CELL_COUNT` full searches from a blank board, the number of
//! searches one complete game would need. The step shape is kept fixed so results
//! stay comparable between runs.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{config::BenchmarkConfig, observer::BenchmarkObserver, report::BenchmarkReport};
use crate::{
    Error, Result,
    search::minimax,
    tictactoe::{Board, CELL_COUNT, Player},
};

/// Marker on move at the root of every benchmark search
const BENCHMARK_PLAYER: Player = Player::X;

/// Timing and call count of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSample {
    pub elapsed: Duration,
    pub calls: u64,
}

/// Iteration budget derived from the reference step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkPlan {
    /// Duration of the unpruned reference step
    pub reference: Duration,
    /// Steps to run in each mode
    pub iterations: u64,
    /// Expected running time of the unpruned phase
    pub estimated: Duration,
}

impl BenchmarkPlan {
    /// Size the run so the unpruned phase is expected to fill `time_budget`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroReferenceTime`] if `reference` is zero.
    pub fn from_reference(reference: Duration, time_budget: Duration) -> Result<Self> {
        if reference.is_zero() {
            return Err(Error::ZeroReferenceTime);
        }

        let iterations = time_budget.as_nanos().div_ceil(reference.as_nanos()).max(1);
        let estimated_nanos = reference.as_nanos().saturating_mul(iterations);
        let estimated = Duration::from_nanos(u64::try_from(estimated_nanos).unwrap_or(u64::MAX));
        let iterations = u64::try_from(iterations).unwrap_or(u64::MAX);

        Ok(Self {
            reference,
            iterations,
            estimated,
        })
    }
}

/// Accumulated time and calls for one mode
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTotals {
    pub time: Duration,
    pub calls: u64,
}

impl ModeTotals {
    fn record(&mut self, sample: &StepSample) {
        self.time += sample.elapsed;
        self.calls += sample.calls;
    }
}

/// Run one step: `CELL_COUNT` searches of `depth` plies from a blank board.
pub fn benchmark_step(depth: u32, use_alpha_beta_pruning: bool) -> StepSample {
    let mut board = Board::new();
    let start = Instant::now();
    let mut calls = 0;

    for _ in 0..CELL_COUNT {
        calls += minimax(&mut board, depth, true, BENCHMARK_PLAYER, use_alpha_beta_pruning).calls;
    }

    StepSample {
        elapsed: start.elapsed(),
        calls,
    }
}

/// Pruning benchmark driver
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    /// Create a benchmark from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Measure one unpruned step and derive the iteration budget from it.
    ///
    /// # Errors
    ///
    /// Returns error if the reference step was too fast to measure.
    pub fn plan(&self, observer: &mut dyn BenchmarkObserver) -> Result<BenchmarkPlan> {
        let reference = benchmark_step(self.config.depth, false);
        observer.on_reference(&reference);

        let plan = BenchmarkPlan::from_reference(reference.elapsed, self.config.time_budget)?;
        info!(
            reference_ms = reference.elapsed.as_secs_f64() * 1000.0,
            iterations = plan.iterations,
            estimated_s = plan.estimated.as_secs_f64(),
            "benchmark planned"
        );
        observer.on_plan(&plan);

        Ok(plan)
    }

    /// Run `iterations` steps in one mode and sum them.
    pub fn run_phase(
        &self,
        iterations: u64,
        use_alpha_beta_pruning: bool,
        observer: &mut dyn BenchmarkObserver,
    ) -> ModeTotals {
        observer.on_phase_start(use_alpha_beta_pruning, iterations);

        let mut totals = ModeTotals::default();
        for _ in 0..iterations {
            let sample = benchmark_step(self.config.depth, use_alpha_beta_pruning);
            totals.record(&sample);
            observer.on_iteration(use_alpha_beta_pruning, &sample);
        }

        debug!(
            pruning = use_alpha_beta_pruning,
            time_ms = totals.time.as_secs_f64() * 1000.0,
            calls = totals.calls,
            "benchmark phase finished"
        );
        observer.on_phase_end(use_alpha_beta_pruning, &totals);

        totals
    }

    /// Plan, then run the pruned phase followed by the unpruned phase.
    ///
    /// # Errors
    ///
    /// Returns error if the reference time or either call count is zero.
    pub fn run(&self, observer: &mut dyn BenchmarkObserver) -> Result<BenchmarkReport> {
        let plan = self.plan(observer)?;

        let start = Instant::now();
        let pruned = self.run_phase(plan.iterations, true, observer);
        let unpruned = self.run_phase(plan.iterations, false, observer);
        let actual = start.elapsed();

        let report = BenchmarkReport::new(&self.config, &plan, pruned, unpruned, actual)?;
        info!(
            speedup = report.speedup_factor,
            reduction_percent = report.call_reduction_percent,
            "benchmark finished"
        );

        Ok(report)
    }
}
