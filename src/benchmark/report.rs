//! Benchmark results
//!
//! All figures are derived from unrounded sums; rounding to the configured
//! precision only happens when the report is displayed.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use super::{
    config::BenchmarkConfig,
    harness::{BenchmarkPlan, ModeTotals},
};
use crate::{Error, Result};

/// Per-mode results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeSummary {
    /// Summed step time over all iterations, in milliseconds
    pub time_sum_ms: f64,
    /// Summed evaluator calls over all iterations
    pub total_calls: u64,
    /// Average time of one step, in milliseconds
    pub avg_step_ms: f64,
    /// Evaluator calls per step (integer division)
    pub calls_per_step: u64,
}

impl ModeSummary {
    fn new(totals: ModeTotals, iterations: u64) -> Self {
        let time_sum_ms = duration_ms(totals.time);
        Self {
            time_sum_ms,
            total_calls: totals.calls,
            avg_step_ms: time_sum_ms / iterations as f64,
            calls_per_step: totals.calls / iterations,
        }
    }
}

/// Comparison of pruned and unpruned minimax runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub depth: u32,
    pub precision: usize,
    pub time_budget_s: f64,
    pub iterations: u64,
    pub estimated_duration_s: f64,
    pub actual_duration_s: f64,
    /// Distance between estimated and actual running time, relative to the estimate
    pub duration_discrepancy_percent: f64,
    pub pruned: ModeSummary,
    pub unpruned: ModeSummary,
    /// Share of unpruned calls that pruning avoided
    pub call_reduction_percent: f64,
    /// Unpruned calls divided by pruned calls
    pub speedup_factor: f64,
}

impl BenchmarkReport {
    /// Build a report from the accumulated totals of both phases.
    ///
    /// # Errors
    ///
    /// Returns error if the plan has no iterations, the estimate is zero, or
    /// either mode recorded no calls.
    pub fn new(
        config: &BenchmarkConfig,
        plan: &BenchmarkPlan,
        pruned: ModeTotals,
        unpruned: ModeTotals,
        actual: Duration,
    ) -> Result<Self> {
        if plan.iterations == 0 {
            return Err(Error::InvalidBenchmarkConfig {
                message: "benchmark ran zero iterations".to_string(),
            });
        }
        if plan.estimated.is_zero() {
            return Err(Error::ZeroReferenceTime);
        }
        if pruned.calls == 0 {
            return Err(Error::ZeroCallCount { mode: "pruned" });
        }
        if unpruned.calls == 0 {
            return Err(Error::ZeroCallCount { mode: "unpruned" });
        }

        let estimated_duration_s = plan.estimated.as_secs_f64();
        let actual_duration_s = actual.as_secs_f64();
        let pruned_calls = pruned.calls as f64;
        let unpruned_calls = unpruned.calls as f64;

        Ok(Self {
            depth: config.depth,
            precision: config.precision,
            time_budget_s: config.time_budget.as_secs_f64(),
            iterations: plan.iterations,
            estimated_duration_s,
            actual_duration_s,
            duration_discrepancy_percent: (actual_duration_s - estimated_duration_s).abs()
                / estimated_duration_s
                * 100.0,
            pruned: ModeSummary::new(pruned, plan.iterations),
            unpruned: ModeSummary::new(unpruned, plan.iterations),
            call_reduction_percent: (unpruned_calls - pruned_calls).abs() / unpruned_calls * 100.0,
            speedup_factor: unpruned_calls / pruned_calls,
        })
    }
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        writeln!(f, "Search depth: {}", self.depth)?;
        writeln!(f, "Iterations per mode: {}", self.iterations)?;
        writeln!(
            f,
            "Estimated running time: {:.p$}s",
            self.estimated_duration_s
        )?;
        writeln!(
            f,
            "Actual running time: {:.p$}s ({:.p$}% diff)",
            self.actual_duration_s, self.duration_discrepancy_percent
        )?;
        writeln!(
            f,
            "Minimax call count [-alpha-beta pruning]: {}",
            self.unpruned.calls_per_step
        )?;
        writeln!(
            f,
            "Minimax call count [+alpha-beta pruning]: {}",
            self.pruned.calls_per_step
        )?;
        writeln!(
            f,
            "Avg. step time [-alpha-beta pruning]: {:.p$}ms",
            self.unpruned.avg_step_ms
        )?;
        writeln!(
            f,
            "Avg. step time [+alpha-beta pruning]: {:.p$}ms",
            self.pruned.avg_step_ms
        )?;
        writeln!(f, "Improvement: {:.p$}%", self.call_reduction_percent)?;
        write!(f, "Improvement factor: {:.p$}x", self.speedup_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(iterations: u64, estimated_ms: u64) -> BenchmarkPlan {
        BenchmarkPlan {
            reference: Duration::from_millis(estimated_ms / iterations),
            iterations,
            estimated: Duration::from_millis(estimated_ms),
        }
    }

    fn totals(ms: u64, calls: u64) -> ModeTotals {
        ModeTotals {
            time: Duration::from_millis(ms),
            calls,
        }
    }

    #[test]
    fn test_metrics_from_totals() {
        let config = BenchmarkConfig::default();
        let report = BenchmarkReport::new(
            &config,
            &plan(4, 2000),
            totals(100, 1000),
            totals(2200, 4000),
            Duration::from_millis(2500),
        )
        .unwrap();

        assert_eq!(report.iterations, 4);
        assert_eq!(report.pruned.calls_per_step, 250);
        assert_eq!(report.unpruned.calls_per_step, 1000);
        assert!((report.pruned.avg_step_ms - 25.0).abs() < 1e-9);
        assert!((report.unpruned.avg_step_ms - 550.0).abs() < 1e-9);
        assert!((report.call_reduction_percent - 75.0).abs() < 1e-9);
        assert!((report.speedup_factor - 4.0).abs() < 1e-9);
        assert!((report.duration_discrepancy_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_sums_are_not_rounded_before_division() {
        let config = BenchmarkConfig::default();
        let report = BenchmarkReport::new(
            &config,
            &plan(3, 3000),
            totals(1, 3),
            totals(1, 10),
            Duration::from_secs(3),
        )
        .unwrap();

        assert!((report.speedup_factor - 10.0 / 3.0).abs() < 1e-12);
        assert_eq!(report.unpruned.calls_per_step, 3);
    }

    #[test]
    fn test_rejects_zero_calls() {
        let config = BenchmarkConfig::default();
        let err = BenchmarkReport::new(
            &config,
            &plan(1, 10),
            totals(1, 0),
            totals(1, 10),
            Duration::from_millis(10),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ZeroCallCount { mode: "pruned" }));
    }

    #[test]
    fn test_display_uses_precision() {
        let config = BenchmarkConfig::default().with_precision(2);
        let report = BenchmarkReport::new(
            &config,
            &plan(3, 3000),
            totals(1, 3),
            totals(1, 10),
            Duration::from_secs(3),
        )
        .unwrap();

        let text = report.to_string();
        assert!(text.contains("Improvement factor: 3.33x"), "{text}");
        assert!(text.contains("Improvement: 70.00%"), "{text}");
        assert!(text.contains("Minimax call count [-alpha-beta pruning]: 3"), "{text}");
    }
}
