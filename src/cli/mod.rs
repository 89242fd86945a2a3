// src/cli/mod.rs

use clap::Parser;

use crate::models::{ConfigOverrides, Language};

/// One handler per CLI action.
pub mod handlers;

/// volt: quickly bootstrap your Electron app, without the complexity.
///
/// Anything not given as a flag is asked for interactively, unless `--default` is set.
#[derive(Parser, Debug, Default)]
#[command(
    name = "volt",
    author,
    version,
    about = t!("cli.about"),
    long_about = None,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Application name and directory to create the project in.
    pub dir: Option<String>,

    /// Use the default options and bypass the CLI prompts.
    #[arg(short = 'y', long = "default")]
    pub default: bool,

    /// The language to scaffold with.
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Include Tailwind CSS (`--tailwind=false` to leave it out).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub tailwind: Option<bool>,

    /// Include ESLint (`--eslint=false` to leave it out).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub eslint: Option<bool>,
}

impl From<&Cli> for ConfigOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            dir: cli.dir.clone(),
            use_defaults: cli.default,
            language: cli.language,
            tailwind: cli.tailwind,
            eslint: cli.eslint,
        }
    }
}
