//! # Core
//!
//! Everything that decides *what* gets scaffolded, independent of the terminal.
//!
//! ## Modules
//!
//! - **`validation`**: the project name check shared by flags and prompts.
//! - **`config_resolver`**: merges flags, prompt answers and defaults into a `ProjectConfig`.
//! - **`preferences`**: optional user defaults from `config.toml`.
//! - **`title`**: the gradient startup banner.

pub mod config_resolver;
/// User defaults from `config.toml`.
pub mod preferences;
/// The startup banner.
pub mod title;
pub mod validation;
