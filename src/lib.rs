//! volt: collects everything needed to bootstrap an Electron app (name, directory,
//! language and optional packages) from flags or interactive prompts.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// Argument parsing and the command handlers.
pub mod cli;
/// Fixed names and defaults.
pub mod constants;
/// Validation, configuration resolution, preferences and the banner.
pub mod core;
/// Data types shared across the crate.
pub mod models;
