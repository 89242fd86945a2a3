// src/cli/handlers/mod.rs

// This module contains the logic for each CLI action.

/// Terminal prompts shared by the handlers.
pub mod commons;
/// Collects the project configuration.
pub mod create;
