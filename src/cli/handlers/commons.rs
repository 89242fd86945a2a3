// src/cli/handlers/commons.rs

// Terminal prompts shared by the handlers.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::io::ErrorKind;

use crate::{
    core::{
        config_resolver::{Prompter, ScaffoldError},
        validation,
    },
    models::{Language, Package},
};

/// Asks the questions on the terminal with dialoguer's colorful theme.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl std::fmt::Debug for DialoguerPrompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialoguerPrompter").finish_non_exhaustive()
    }
}

impl Prompter for DialoguerPrompter {
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError> {
        // A rejected name is printed beneath the prompt and asked again.
        Input::<String>::with_theme(&self.theme)
            .with_prompt(t!("prompt.project_name"))
            .default(default.to_string())
            .validate_with(|input: &String| validation::validate_project_name(input))
            .interact_text()
            .map_err(map_prompt_error)
    }

    fn language(&mut self, default: Language) -> Result<Language, ScaffoldError> {
        let labels: Vec<&str> = Language::ALL.iter().map(|lang| lang.label()).collect();
        let initial = Language::ALL
            .iter()
            .position(|lang| *lang == default)
            .unwrap_or(0);

        let selection = Select::with_theme(&self.theme)
            .with_prompt(t!("prompt.language"))
            .items(&labels)
            .default(initial)
            .interact_opt()
            .map_err(map_prompt_error)?;

        selection
            .and_then(|index| Language::ALL.get(index).copied())
            .ok_or(ScaffoldError::Cancelled)
    }

    fn confirm_package(&mut self, package: Package, default: bool) -> Result<bool, ScaffoldError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(format!(t!("prompt.package"), package = package.label()))
            .default(default)
            .interact_opt()
            .map_err(map_prompt_error)?
            .ok_or(ScaffoldError::Cancelled)
    }
}

/// Ctrl+C surfaces as an interrupted read; treat it like any other cancellation.
fn map_prompt_error(err: dialoguer::Error) -> ScaffoldError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted => ScaffoldError::Cancelled,
        other => ScaffoldError::Prompt(other),
    }
}
