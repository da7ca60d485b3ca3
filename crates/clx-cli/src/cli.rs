use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "clx", version, about = "CyberLockX identifiers and risk scoring")]
pub struct Cli {
    /// Path to the config file. Defaults to the platform config directory.
    #[arg(long, global = true, env = "CLX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the log format from the config file.
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Universal Wallet Address generation and validation.
    #[command(subcommand)]
    Uwa(UwaCommand),

    /// RASBITA device risk scoring.
    #[command(subcommand)]
    Risk(RiskCommand),

    /// Five-pillar scorecard aggregation.
    Scorecard(ScorecardArgs),

    /// Inspect or write the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum UwaCommand {
    /// Derive a UWA from entity components.
    Generate {
        /// physical_machine, virtual_machine, business_owner, individual or account.
        #[arg(long = "entity")]
        entity_type: String,

        /// Component as `field=value`, e.g. `--set os_name=Ubuntu22`. Repeatable.
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        components: Vec<String>,

        /// Print only the identifier instead of the full record.
        #[arg(long)]
        plain: bool,
    },

    /// Check that a string has the shape of a UWA.
    Validate { candidate: String },
}

#[derive(Debug, Subcommand)]
pub enum RiskCommand {
    /// Score a device against a set of feared risks.
    Score {
        #[arg(long = "device")]
        device_type: String,

        #[arg(long = "count", default_value_t = 1)]
        device_count: u32,

        /// Reject unknown risk identifiers and device types.
        #[arg(long)]
        strict: bool,

        /// Print `score level` instead of the full assessment.
        #[arg(long)]
        plain: bool,

        risk_ids: Vec<String>,
    },

    /// List the known risk factors.
    Factors,
}

#[derive(Debug, Args)]
pub struct ScorecardArgs {
    /// Pillar score as `pillar=score`, e.g. `--set governance=80`. Repeatable.
    /// Pillars left out take the configured fallback.
    #[arg(long = "set", value_name = "PILLAR=SCORE")]
    pub scores: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective config.
    Show,
    /// Write the effective config (defaults if none exists) to disk.
    Init,
}
