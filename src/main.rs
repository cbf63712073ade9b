//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `geo_echo` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All request handling is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use geo_echo::initialization::init_logger_with;
use geo_echo::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; PORT and friends may come from the real environment
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("geo_echo error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
