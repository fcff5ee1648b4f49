use std::path::PathBuf;

use derive_more::From;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use retype::Configuration;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Prefix of environment variables overriding the settings file
const ENV_PREFIX: &str = "CODETYPE_";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Caret geometry and input limits of the practice session
    pub caret: Configuration,
}

#[derive(Debug, From, Error)]
pub enum ConfigError {
    #[error(
        "Failed to get configuration directory. Please specify the location using the `--config <path>` flag"
    )]
    NoDirectory,

    #[error("Failed to create config directory: {0}")]
    CreateDirectory(std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(Box<figment::Error>),
}

impl Settings {
    /// Loads the settings from defaults, `settings.toml` and `CODETYPE_` environment variables
    ///
    /// Nested keys are separated by a double underscore, e.g. `CODETYPE_CARET__TAB_WIDTH=4`.
    pub fn get(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_dir = override_path
            .or_else(|| {
                ProjectDirs::from("com", "CodeType", "CodeType")
                    .map(|dirs| dirs.config_dir().to_path_buf())
            })
            .ok_or(ConfigError::NoDirectory)?;

        // Ensure path exists
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)?;
        }

        let mut settings = Figment::from(Serialized::defaults(Self::default()));

        let settings_toml = config_dir.join("settings.toml");
        if settings_toml.exists() {
            debug!(path = %settings_toml.display(), "Reading settings file");
            settings = settings.merge(Toml::file(settings_toml));
        }

        Self::extract(settings.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract().map_err(Box::new)?)
    }
}
