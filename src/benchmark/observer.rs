//! Observer port for benchmark progress
//!
//! The harness reports its phases through this trait so progress display stays
//! out of the measurement code. Every method has a no-op default.
//!
//! Events arrive in this order:
//! 1. `on_reference(sample)` after the unpruned reference step
//! 2. `on_plan(plan)` once the iteration count is known
//! 3. For the pruned phase, then the unpruned phase:
//!    - `on_phase_start(pruning, iterations)`
//!    - `on_iteration(pruning, sample)` per iteration
//!    - `on_phase_end(pruning, totals)`

use super::harness::{BenchmarkPlan, ModeTotals, StepSample};

/// Observer trait for monitoring a benchmark run
pub trait BenchmarkObserver {
    fn on_reference(&mut self, _sample: &StepSample) {}

    fn on_plan(&mut self, _plan: &BenchmarkPlan) {}

    fn on_phase_start(&mut self, _pruning: bool, _iterations: u64) {}

    fn on_iteration(&mut self, _pruning: bool, _sample: &StepSample) {}

    fn on_phase_end(&mut self, _pruning: bool, _totals: &ModeTotals) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl BenchmarkObserver for NullObserver {}
