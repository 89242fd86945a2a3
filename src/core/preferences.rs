// src/core/preferences.rs

//! Optional user defaults, read from `config.toml` in volt's config directory.
//! The file is never written by volt.

use crate::{
    constants::{CONFIG_DIR_ENV, DEFAULT_PROJECT_NAME, PREFERENCES_FILENAME, VOLT_DIR},
    models::{Language, Package},
};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while locating or reading the preferences file.
#[derive(Error, Debug)]
pub enum PreferencesError {
    /// Neither `VOLT_CONFIG_DIR` nor a platform config directory is available.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The file exists but could not be read.
    #[error("Could not read preferences at '{path}': {source}")]
    Io {
        /// The preferences file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has values of the wrong type.
    #[error("Failed to parse TOML file at '{path}': {source}")]
    TomlParse {
        /// The preferences file.
        path: PathBuf,
        /// The underlying parsing error from the `toml` crate.
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults used when a value is neither given as a flag nor asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Name offered at the prompt and used with `--default`.
    pub project_name: String,
    /// Default language.
    pub language: Language,
    /// Whether Tailwind CSS is on by default.
    pub tailwind: bool,
    /// Whether ESLint is on by default.
    pub eslint: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            language: Language::default(),
            tailwind: true,
            eslint: true,
        }
    }
}

impl Preferences {
    /// Whether `package` is enabled by default.
    pub fn includes(&self, package: Package) -> bool {
        match package {
            Package::Tailwind => self.tailwind,
            Package::Eslint => self.eslint,
        }
    }
}

/// Returns volt's config directory: `$VOLT_CONFIG_DIR` if set, otherwise
/// `<platform config dir>/volt`.
pub fn get_volt_config_dir() -> Result<PathBuf, PreferencesError> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(shellexpand::tilde(&dir).into_owned()));
    }
    dirs::config_dir()
        .map(|dir| dir.join(VOLT_DIR))
        .ok_or(PreferencesError::ConfigDirNotFound)
}

/// Loads the user's preferences, falling back to built-in defaults when no file exists.
pub fn load() -> Result<Preferences, PreferencesError> {
    load_from(&get_volt_config_dir()?.join(PREFERENCES_FILENAME))
}

/// Loads preferences from an explicit file path.
pub fn load_from(path: &Path) -> Result<Preferences, PreferencesError> {
    if !path.is_file() {
        log::debug!("No preferences at '{}', using defaults.", path.display());
        return Ok(Preferences::default());
    }

    let content = fs::read_to_string(path).map_err(|source| PreferencesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let preferences = toml::from_str(&content).map_err(|source| PreferencesError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loaded preferences from '{}'.", path.display());
    Ok(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let prefs = load_from(&dir.path().join(PREFERENCES_FILENAME)).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.project_name, "my-electron-app");
        assert!(prefs.includes(Package::Tailwind));
        assert!(prefs.includes(Package::Eslint));
    }

    #[test]
    fn test_partial_file_is_merged_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        fs::write(&path, "language = \"javascript\"\neslint = false\n").unwrap();

        let prefs = load_from(&path).unwrap();
        assert_eq!(prefs.language, Language::JavaScript);
        assert!(!prefs.includes(Package::Eslint));
        assert!(prefs.includes(Package::Tailwind));
        assert_eq!(prefs.project_name, DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn test_malformed_file_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        fs::write(&path, "language = \"cobol\"").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, PreferencesError::TomlParse { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }
}
