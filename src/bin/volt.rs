// src/bin/volt.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use volt::{
    cli::{Cli, handlers},
    core::config_resolver::ScaffoldError,
    t,
};

/// The main entry point of the `volt` application.
/// It sets up logging, parses arguments, collects the project configuration
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        // Backing out of the prompts is not a failure.
        if let Some(ScaffoldError::Cancelled) = e.downcast_ref::<ScaffoldError>() {
            println!("{}", t!("common.cancelled").red());
            std::process::exit(0);
        }

        // `{:#}` keeps the whole context chain, e.g. which preferences file failed to parse.
        eprintln!("\n{}: {:#}", t!("common.error").red().bold(), e);
        std::process::exit(1);
    }
}

/// Collects the configuration and hands it on as JSON on stdout.
fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let config = handlers::create::handle(&cli)?;

    println!("{}", t!("common.results"));
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
