//! # Configuration Resolver
//!
//! Merges command-line flags, interactive answers and preference defaults into a single
//! [`ProjectConfig`]. Each field follows the same decision table:
//!
//! 1. a flag was given: use it;
//! 2. `--default` was given: use the preference (or built-in) default;
//! 3. otherwise: ask through the [`Prompter`], offering the default.
//!
//! A name that arrives by flag or preference must pass validation, otherwise resolution
//! fails. Prompted names are validated inline by the prompter and checked again here.

use crate::{
    core::{
        preferences::Preferences,
        validation::{self, InvalidProjectName},
    },
    models::{ConfigFlags, ConfigOverrides, Language, Package, ProjectConfig},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Represents the ways collecting a project configuration can stop.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A name given by flag or preference failed validation.
    #[error(transparent)]
    InvalidProjectName(#[from] InvalidProjectName),
    /// The user backed out of a prompt (Esc or Ctrl+C).
    #[error("Operation cancelled by user.")]
    Cancelled,
    /// The terminal prompt itself failed.
    #[error("User Interface Error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// The interactive half of the decision table.
///
/// Implementations return [`ScaffoldError::Cancelled`] when the user aborts.
pub trait Prompter {
    /// Asks for the project name. Only names accepted by
    /// [`validation::validate_project_name`] should be returned.
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError>;

    /// Asks which language to use.
    fn language(&mut self, default: Language) -> Result<Language, ScaffoldError>;

    /// Asks whether `package` should be included.
    fn confirm_package(&mut self, package: Package, default: bool) -> Result<bool, ScaffoldError>;
}

/// Resolves the final project configuration.
///
/// `cwd` anchors relative directories and gives `"."` its name.
pub fn resolve_project_config(
    overrides: &ConfigOverrides,
    preferences: &Preferences,
    cwd: &Path,
    prompter: &mut dyn Prompter,
) -> Result<ProjectConfig, ScaffoldError> {
    let raw_name = resolve_raw_name(overrides, preferences, prompter)?;
    let language = resolve_language(overrides, preferences, prompter)?;

    let mut packages = Vec::new();
    for package in Package::ALL {
        if resolve_package(package, overrides, preferences, prompter)? {
            packages.push(package);
        }
    }

    let (project_name, project_dir) = split_name_and_dir(&raw_name, cwd);
    let config = ProjectConfig {
        project_name,
        project_dir,
        language,
        packages,
        flags: ConfigFlags {
            default: overrides.use_defaults,
        },
    };

    log::debug!("Resolved project configuration: {:?}", config);
    Ok(config)
}

/// Turns a validated raw name into `(project name, project directory)`.
///
/// `"."` (or an empty name) targets `cwd` itself and borrows its directory name.
/// Anything else is taken relative to `cwd`, named by its effective project name.
pub fn split_name_and_dir(raw_name: &str, cwd: &Path) -> (String, PathBuf) {
    let trimmed = raw_name.strip_suffix('/').unwrap_or(raw_name);

    if trimmed == "." || trimmed.is_empty() {
        let name = cwd
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        return (name, cwd.to_path_buf());
    }

    (validation::effective_project_name(trimmed), cwd.join(trimmed))
}

fn resolve_raw_name(
    overrides: &ConfigOverrides,
    preferences: &Preferences,
    prompter: &mut dyn Prompter,
) -> Result<String, ScaffoldError> {
    let name = match (&overrides.dir, overrides.use_defaults) {
        (Some(dir), _) => dir.clone(),
        (None, true) => preferences.project_name.clone(),
        (None, false) => prompter.project_name(&preferences.project_name)?,
    };

    validation::validate_project_name(&name)?;
    Ok(name)
}

fn resolve_language(
    overrides: &ConfigOverrides,
    preferences: &Preferences,
    prompter: &mut dyn Prompter,
) -> Result<Language, ScaffoldError> {
    match (overrides.language, overrides.use_defaults) {
        (Some(language), _) => Ok(language),
        (None, true) => Ok(preferences.language),
        (None, false) => prompter.language(preferences.language),
    }
}

fn resolve_package(
    package: Package,
    overrides: &ConfigOverrides,
    preferences: &Preferences,
    prompter: &mut dyn Prompter,
) -> Result<bool, ScaffoldError> {
    match (overrides.package(package), overrides.use_defaults) {
        (Some(enabled), _) => Ok(enabled),
        (None, true) => Ok(preferences.includes(package)),
        (None, false) => prompter.confirm_package(package, preferences.includes(package)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// A prompter that replays canned answers and records what was asked.
    #[derive(Default)]
    struct ScriptedPrompter {
        names: VecDeque<String>,
        language: Option<Language>,
        packages: VecDeque<bool>,
        asked: Vec<String>,
        cancel_on_language: bool,
    }

    impl Prompter for ScriptedPrompter {
        fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError> {
            self.asked.push(format!("name:{}", default));
            Ok(self.names.pop_front().unwrap_or_else(|| default.to_string()))
        }

        fn language(&mut self, default: Language) -> Result<Language, ScaffoldError> {
            self.asked.push(format!("language:{}", default));
            if self.cancel_on_language {
                return Err(ScaffoldError::Cancelled);
            }
            Ok(self.language.unwrap_or(default))
        }

        fn confirm_package(&mut self, package: Package, default: bool) -> Result<bool, ScaffoldError> {
            self.asked.push(format!("package:{}:{}", package, default));
            Ok(self.packages.pop_front().unwrap_or(default))
        }
    }

    fn cwd() -> PathBuf {
        PathBuf::from("/work/electron-sandbox")
    }

    #[test]
    fn test_defaults_mode_never_prompts() {
        let overrides = ConfigOverrides {
            use_defaults: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default();
        let config =
            resolve_project_config(&overrides, &Preferences::default(), &cwd(), &mut prompter)
                .unwrap();

        assert!(prompter.asked.is_empty());
        assert_eq!(config.project_name, "my-electron-app");
        assert_eq!(config.project_dir, cwd().join("my-electron-app"));
        assert_eq!(config.language, Language::TypeScript);
        assert_eq!(config.packages, vec![Package::Tailwind, Package::Eslint]);
        assert!(config.flags.default);
    }

    #[test]
    fn test_flags_win_over_prompts() {
        let overrides = ConfigOverrides {
            dir: Some("my-app".to_string()),
            language: Some(Language::JavaScript),
            tailwind: Some(false),
            eslint: Some(true),
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default();
        let config =
            resolve_project_config(&overrides, &Preferences::default(), &cwd(), &mut prompter)
                .unwrap();

        assert!(prompter.asked.is_empty());
        assert_eq!(config.project_name, "my-app");
        assert_eq!(config.language, Language::JavaScript);
        assert_eq!(config.packages, vec![Package::Eslint]);
        assert!(!config.flags.default);
    }

    #[test]
    fn test_flags_win_over_defaults_mode() {
        let overrides = ConfigOverrides {
            use_defaults: true,
            language: Some(Language::JavaScript),
            eslint: Some(false),
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default();
        let config =
            resolve_project_config(&overrides, &Preferences::default(), &cwd(), &mut prompter)
                .unwrap();

        assert_eq!(config.language, Language::JavaScript);
        assert_eq!(config.packages, vec![Package::Tailwind]);
    }

    #[test]
    fn test_prompts_only_for_missing_fields() {
        let overrides = ConfigOverrides {
            dir: Some("apps/desk".to_string()),
            tailwind: Some(true),
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter {
            language: Some(Language::JavaScript),
            packages: VecDeque::from([false]),
            ..Default::default()
        };
        let config =
            resolve_project_config(&overrides, &Preferences::default(), &cwd(), &mut prompter)
                .unwrap();

        assert_eq!(
            prompter.asked,
            vec!["language:TypeScript".to_string(), "package:ESLint:true".to_string()]
        );
        assert_eq!(config.project_name, "desk");
        assert_eq!(config.project_dir, cwd().join("apps/desk"));
        assert_eq!(config.language, Language::JavaScript);
        assert_eq!(config.packages, vec![Package::Tailwind]);
    }

    #[test]
    fn test_prompt_offers_preference_defaults() {
        let preferences = Preferences {
            project_name: "studio".to_string(),
            language: Language::JavaScript,
            tailwind: false,
            eslint: true,
        };
        let mut prompter = ScriptedPrompter::default();
        let config =
            resolve_project_config(&ConfigOverrides::default(), &preferences, &cwd(), &mut prompter)
                .unwrap();

        assert_eq!(
            prompter.asked,
            vec![
                "name:studio".to_string(),
                "language:JavaScript".to_string(),
                "package:Tailwind CSS:false".to_string(),
                "package:ESLint:true".to_string(),
            ]
        );
        assert_eq!(config.project_name, "studio");
        assert_eq!(config.packages, vec![Package::Eslint]);
    }

    #[test]
    fn test_invalid_flag_name_is_an_error() {
        let overrides = ConfigOverrides {
            dir: Some("My-App".to_string()),
            use_defaults: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default();
        let err =
            resolve_project_config(&overrides, &Preferences::default(), &cwd(), &mut prompter)
                .unwrap_err();

        assert!(matches!(err, ScaffoldError::InvalidProjectName(_)));
        assert_eq!(err.to_string(), validation::INVALID_PROJECT_NAME_MESSAGE);
    }

    #[test]
    fn test_invalid_preference_name_is_an_error() {
        let preferences = Preferences {
            project_name: "Bad Name".to_string(),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            use_defaults: true,
            ..Default::default()
        };
        let mut prompter = ScriptedPrompter::default();
        let result = resolve_project_config(&overrides, &preferences, &cwd(), &mut prompter);
        assert!(matches!(result, Err(ScaffoldError::InvalidProjectName(_))));
    }

    #[test]
    fn test_cancellation_propagates() {
        let mut prompter = ScriptedPrompter {
            cancel_on_language: true,
            ..Default::default()
        };
        let result = resolve_project_config(
            &ConfigOverrides::default(),
            &Preferences::default(),
            &cwd(),
            &mut prompter,
        );
        assert!(matches!(result, Err(ScaffoldError::Cancelled)));
        assert_eq!(prompter.asked.len(), 2);
    }

    #[test]
    fn test_current_dir_takes_cwd_name() {
        let (name, dir) = split_name_and_dir(".", &cwd());
        assert_eq!(name, "electron-sandbox");
        assert_eq!(dir, cwd());
    }

    #[test]
    fn test_scoped_dir_keeps_scope_in_name() {
        let (name, dir) = split_name_and_dir("foo/@acme/desk/", &cwd());
        assert_eq!(name, "@acme/desk");
        assert_eq!(dir, cwd().join("foo/@acme/desk"));
    }
}
