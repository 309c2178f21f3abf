//! Filterlab CLI - Filter Response Engine
//!
//! Command-line interface for designing filters and dumping their
//! frequency and impulse responses as JSON.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use filterlab::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Filterlab v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd)?,
        None => {
            println!("Filterlab v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
        }
    }

    Ok(())
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Design(args) => commands::design_filter(&args)?,
        Commands::Response(args) => commands::frequency_sweep(&args)?,
        Commands::Impulse(args) => commands::impulse(&args)?,
    }
    Ok(())
}
