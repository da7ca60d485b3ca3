use std::process::ExitCode;

use clap::Parser;
use clx_cli::cli::Cli;
use clx_cli::commands;
use clx_cli::config::{self, LogFormat};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let loaded = config::load_config(&config_path)?;
    let config = loaded.config;
    init_tracing(cli.log_format.unwrap_or(config.log_format));
    if let Some(from) = loaded.migrated_from {
        tracing::info!(
            path = %config_path.display(),
            from,
            to = config::CURRENT_VERSION,
            "migrated config"
        );
    }

    let output = commands::run(cli.command, &config, &config_path)?;
    println!("{}", output.text);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
