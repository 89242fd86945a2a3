// src/models.rs

//! Data types shared between the CLI, the configuration resolver and the generator
//! hand-off.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The language the generated project is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// TypeScript (the default).
    #[default]
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    /// Plain JavaScript.
    #[value(name = "javascript", alias = "js")]
    JavaScript,
}

impl Language {
    /// Every language in prompt order.
    pub const ALL: [Self; 2] = [Self::TypeScript, Self::JavaScript];

    /// The human readable name shown in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An optional package that can be toggled on for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    /// Tailwind CSS.
    Tailwind,
    /// ESLint.
    Eslint,
}

impl Package {
    /// Every package in prompt (and output) order.
    pub const ALL: [Self; 2] = [Self::Tailwind, Self::Eslint];

    /// The human readable name shown in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tailwind => "Tailwind CSS",
            Self::Eslint => "ESLint",
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values that were given explicitly on the command line.
/// `None` means "not given": the resolver falls back to a prompt or a default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Positional directory / project name.
    pub dir: Option<String>,
    /// `--default`: never prompt.
    pub use_defaults: bool,
    /// `--language`.
    pub language: Option<Language>,
    /// `--tailwind[=bool]`.
    pub tailwind: Option<bool>,
    /// `--eslint[=bool]`.
    pub eslint: Option<bool>,
}

impl ConfigOverrides {
    /// Returns the explicit toggle for `package`, if one was given.
    pub fn package(&self, package: Package) -> Option<bool> {
        match package {
            Package::Tailwind => self.tailwind,
            Package::Eslint => self.eslint,
        }
    }
}

/// Flags echoed back in the resolved configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFlags {
    /// Whether `--default` was given.
    pub default: bool,
}

/// The fully resolved configuration handed to the project generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// The validated package name (may include a scope).
    pub project_name: String,
    /// Absolute directory the project will be generated in.
    pub project_dir: PathBuf,
    /// The chosen language.
    pub language: Language,
    /// Enabled packages, in [`Package::ALL`] order.
    pub packages: Vec<Package>,
    /// Flags the configuration was collected with.
    pub flags: ConfigFlags,
}

impl ProjectConfig {
    /// Whether `package` was enabled.
    pub fn has_package(&self, package: Package) -> bool {
        self.packages.contains(&package)
    }
}
