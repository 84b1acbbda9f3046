//! Shared configuration for CLI commands

use clap::Args;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Options common to every command
#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Log at info level unless RUST_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Hide progress bars
    #[arg(long, global = true)]
    pub no_progress: bool,
}

impl CommonConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub fn default_filter(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }

    /// Install the global tracing subscriber, writing to stderr.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()));
        // A subscriber may already be installed (e.g. in tests); keep it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
