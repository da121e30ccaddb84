//! aui-upgrade - migrate AlloyUI 1.x sources to AlloyUI 2.x in place.

mod cli;
mod config;
mod core;
mod digest;
mod logger;
mod pipeline;
mod transform;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::MigrateConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any file is touched)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = MigrateConfig::load(&cli)?;
    cli::migrate::run(&config, core::is_shutdown)?;
    Ok(())
}
