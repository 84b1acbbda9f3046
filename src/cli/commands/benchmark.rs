//! Benchmark command - Measure the effect of alpha-beta pruning

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    benchmark::{Benchmark, BenchmarkConfig, BenchmarkObserver, DEFAULT_PRECISION, NullObserver},
    cli::{
        config::CommonConfig,
        output::{BenchmarkProgress, print_kv, print_section},
    },
    tictactoe::CELL_COUNT,
};

#[derive(Parser, Debug)]
#[command(about = "Compare minimax with and without alpha-beta pruning")]
pub struct BenchmarkArgs {
    /// Estimated running time of the unpruned phase, in seconds
    #[arg(long, short = 't', default_value_t = 30.0)]
    pub time_budget: f64,

    /// Decimal places in reported figures
    #[arg(long, short = 'p', default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Search depth of each minimax call
    #[arg(long, default_value_t = CELL_COUNT as u32)]
    pub depth: u32,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report to this file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl BenchmarkArgs {
    fn config(&self) -> Result<BenchmarkConfig> {
        let time_budget = Duration::try_from_secs_f64(self.time_budget)
            .with_context(|| format!("invalid time budget: {}s", self.time_budget))?;

        Ok(BenchmarkConfig::default()
            .with_time_budget(time_budget)
            .with_precision(self.precision)
            .with_depth(self.depth))
    }
}

pub fn execute(args: BenchmarkArgs, common: &CommonConfig) -> Result<()> {
    let benchmark = Benchmark::new(args.config()?)?;
    let config = benchmark.config();

    if !args.json {
        print_section("Alpha-beta pruning benchmark");
        print_kv("Time budget", &format!("{}s", config.time_budget.as_secs_f64()));
        print_kv("Depth", &config.depth.to_string());
    }

    let mut progress;
    let mut silent = NullObserver;
    let observer: &mut dyn BenchmarkObserver = if common.no_progress || args.json {
        &mut silent
    } else {
        progress = BenchmarkProgress::new()?;
        &mut progress
    };

    let report = benchmark.run(observer)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_section("Results");
        println!("{report}");
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        if !args.json {
            println!("\nReport written to: {}", path.display());
        }
    }

    Ok(())
}
