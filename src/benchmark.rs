//! Alpha-beta pruning benchmark
//!
//! Measures one unpruned reference step, sizes the run so the unpruned phase is
//! expected to fill the configured time budget, then runs that many steps with
//! pruning and that many without and compares time and evaluator call counts.

pub mod config;
pub mod harness;
pub mod observer;
pub mod report;

pub use config::{BenchmarkConfig, DEFAULT_PRECISION, DEFAULT_TIME_BUDGET};
pub use harness::{Benchmark, BenchmarkPlan, ModeTotals, StepSample, benchmark_step};
pub use observer::{BenchmarkObserver, NullObserver};
pub use report::{BenchmarkReport, ModeSummary};
