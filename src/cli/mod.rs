//! CLI infrastructure
//!
//! Benchmarking, position analysis and automated self-play. Interactive play
//! against the computer is left to a separate front end.

pub mod commands;
pub mod config;
pub mod output;
