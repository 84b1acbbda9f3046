//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Error, Result,
    benchmark::{BenchmarkObserver, BenchmarkPlan, ModeTotals, StepSample},
};

/// Create the progress bar style used for benchmark phases
pub fn benchmark_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} steps ({msg})")
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-"))
}

/// Label for a pruning mode
pub fn mode_label(pruning: bool) -> &'static str {
    if pruning {
        "+alpha-beta pruning"
    } else {
        "-alpha-beta pruning"
    }
}

/// Benchmark observer that draws one progress bar per phase
pub struct BenchmarkProgress {
    style: ProgressStyle,
    bar: Option<ProgressBar>,
}

impl BenchmarkProgress {
    /// Create the observer.
    ///
    /// # Errors
    ///
    /// Returns error if the progress bar template is invalid.
    pub fn new() -> Result<Self> {
        Ok(Self {
            style: benchmark_progress_style()?,
            bar: None,
        })
    }
}

impl BenchmarkObserver for BenchmarkProgress {
    fn on_reference(&mut self, sample: &StepSample) {
        print_kv(
            "Reference step",
            &format!("{:.3}ms", sample.elapsed.as_secs_f64() * 1000.0),
        );
    }

    fn on_plan(&mut self, plan: &BenchmarkPlan) {
        print_kv("Iterations", &format_number(plan.iterations));
        print_kv(
            "Estimated time",
            &format!("{:.3}s", plan.estimated.as_secs_f64()),
        );
    }

    fn on_phase_start(&mut self, pruning: bool, iterations: u64) {
        let bar = ProgressBar::new(iterations);
        bar.set_style(self.style.clone());
        bar.set_message(mode_label(pruning));
        self.bar = Some(bar);
    }

    fn on_iteration(&mut self, _pruning: bool, _sample: &StepSample) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_phase_end(&mut self, _pruning: bool, _totals: &ModeTotals) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board, showing one-based positions in empty cells
pub fn print_board(board: &crate::tictactoe::Board) {
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                match board.get(pos).to_player() {
                    Some(player) => player.to_string(),
                    None => (pos + 1).to_string(),
                }
            })
            .collect();
        println!("  | {} |", cells.join(" | "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(549946), "549,946");
    }

    #[test]
    fn test_progress_style_is_valid() {
        assert!(benchmark_progress_style().is_ok());
    }
}
