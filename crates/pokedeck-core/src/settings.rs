use crate::client::DEFAULT_BASE_URL;
use crate::theme::ThemeVariant;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE: &str = "pokedeck.toml";
const ENV_PREFIX: &str = "POKEDECK_";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("refusing to rewrite {path}, it is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            log_file: PathBuf::from("pokedeck.log"),
        }
    }
}

impl Settings {
    /// Defaults, then `pokedeck.toml`, then `POKEDECK_*` variables.
    pub fn new() -> Result<Self, SettingsError> {
        Self::from_figment(Self::figment(CONFIG_FILE))
    }

    pub fn figment(config_path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, SettingsError> {
        figment.extract().map_err(|e| SettingsError::from(Box::new(e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Write only the `theme` key into the config file at `path`.
    ///
    /// Every other key in the file is kept as written, so values that came
    /// from defaults or `POKEDECK_*` variables never end up on disk. A file
    /// that is not valid TOML is left untouched.
    pub fn persist_theme(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut table = match fs::read_to_string(path) {
            Ok(contents) => toml::from_str::<toml::Table>(&contents).map_err(|source| {
                SettingsError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Table::new(),
            Err(e) => return Err(io_error(e)),
        };

        table.insert("theme".to_string(), toml::Value::try_from(self.theme)?);
        let toml_string = toml::to_string_pretty(&table)?;
        fs::write(path, toml_string).map_err(io_error)
    }
}
