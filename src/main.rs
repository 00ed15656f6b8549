//! Formpilot - desktop form-filling automation service.
//!
//! Main entry point for the formpilot CLI and server.

mod cli;
mod commands;
mod server;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use formpilot_config::{Config, ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let config = if cli.config.exists() {
        ConfigLoader::load(&cli.config)?
    } else {
        warn!(
            path = %cli.config.display(),
            "config file not found, using defaults"
        );
        Config::default()
    };

    let result = ConfigValidator::validate(&config)?;
    for warning in &result.warnings {
        warn!("config: {warning}");
    }
    if !result.is_valid() {
        for e in &result.errors {
            error!("config: {e}");
        }
        return Err("invalid configuration".into());
    }

    Ok(config)
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let outcome = match cli.command {
        None => server::run(config, None, None).await,
        Some(Commands::Serve { host, port }) => server::run(config, host, port).await,
        Some(Commands::Forms) => commands::list_forms(&config),
        Some(Commands::Schema {
            form,
            require_all,
            output,
        }) => commands::print_schema(&config, &form, require_all, output.as_deref()),
        Some(Commands::Template { form, output }) => {
            commands::print_template(&config, &form, output.as_deref())
        }
    };

    if let Err(e) = outcome {
        error!("{e}");
        std::process::exit(1);
    }
}
