//! clx-cli
//!
//! Command-line front end over the UWA generator, the RASBITA scorer and the
//! scorecard aggregator. Owns the caller-side policies the libraries leave
//! open: config loading, logging setup and missing-pillar fallbacks.

pub mod cli;
pub mod commands;
pub mod config;
