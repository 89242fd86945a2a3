// src/constants.rs

/// The project name used when none is given and the user accepts the default.
pub const DEFAULT_PROJECT_NAME: &str = "my-electron-app";

/// The name of volt's directory inside the platform config directory.
pub const VOLT_DIR: &str = "volt";

/// The name of the user preferences file (inside the config directory).
pub const PREFERENCES_FILENAME: &str = "config.toml";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "VOLT_CONFIG_DIR";
