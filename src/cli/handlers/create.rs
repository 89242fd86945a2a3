// src/cli/handlers/create.rs

use anyhow::{Context, Result};
use colored::Colorize;
use std::env;

use super::commons::DialoguerPrompter;
use crate::{
    cli::Cli,
    core::{config_resolver, preferences, title},
    models::{ConfigOverrides, ProjectConfig},
};

/// The main handler: collects the project configuration for the generator.
/// Flags are used as given; everything else is prompted for unless `--default` is set.
pub fn handle(cli: &Cli) -> Result<ProjectConfig> {
    let overrides = ConfigOverrides::from(cli);

    let preferences = preferences::load().with_context(|| t!("error.loading_preferences"))?;

    let target = overrides.dir.as_deref().unwrap_or(&preferences.project_name);
    println!("{}", format!(t!("create.creating_in"), dir = target));

    let cwd = env::current_dir().with_context(|| t!("error.current_dir"))?;

    if overrides.use_defaults {
        println!("{}", t!("create.using_defaults").italic());
    } else {
        println!("{}\n", title::render_title()?);
    }

    let mut prompter = DialoguerPrompter::default();
    let config =
        config_resolver::resolve_project_config(&overrides, &preferences, &cwd, &mut prompter)?;

    log::info!(
        "Collected configuration for '{}' in '{}'.",
        config.project_name,
        config.project_dir.display()
    );
    Ok(config)
}
