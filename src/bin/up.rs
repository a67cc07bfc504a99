//! Up CLI Binary
//!
//! Command-line interface for listing organization robot tokens.

use clap::Parser;
use std::process;
use tracing::{error, info};
use up_robot::cli::{Cli, RunContext};
use up_robot::config::{ConfigLoader, ConfigOverrides, UpConfig};
use up_robot::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let mut config = match ConfigLoader::load_with(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", up_robot::cli::map_error(&e));
            process::exit(1);
        }
    };
    config.apply_overrides(&ConfigOverrides {
        account: cli.account.clone(),
        endpoint: cli.endpoint.clone(),
    });
    if let Err(e) = config.validate() {
        eprintln!("{}", up_robot::cli::map_error(&e));
        process::exit(1);
    }

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(endpoint = %config.endpoint, "up CLI starting");

    let context = match RunContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing CLI context: {}", e);
            eprintln!("{}", up_robot::cli::map_error(&e));
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match context.execute(&cli.command, &mut out) {
        Ok(()) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", up_robot::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &UpConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
