// Bot configuration, loaded from a RON file, environment variables and CLI flags.

use crate::commands::ChannelGate;
use crate::datastore::DataStore;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.ron";

#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credential for the chat host. Only adapters read it.
    pub token: Option<String>,
    /// Channel that gated commands are limited to. `None` admits every channel.
    pub command_channel_id: Option<u64>,
    /// Directory holding the JSON datasets.
    pub data_dir: PathBuf,
    /// Keep decoded datasets in memory after the first read.
    pub cache_datasets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            command_channel_id: None,
            data_dir: PathBuf::from("data"),
            cache_datasets: true,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("command_channel_id", &self.command_channel_id)
            .field("data_dir", &self.data_dir)
            .field("cache_datasets", &self.cache_datasets)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process arguments and environment.
    ///
    /// The file named by `--config <path>` (default `config.ron`) is read first; a missing
    /// default file just means defaults. Environment variables then override it:
    /// - `POKEMMO_DEX_TOKEN` - chat host token
    /// - `COMMAND_CHANNEL_ID` - numeric id of the command channel
    /// - `DATA_DIR` - dataset directory
    /// - `CACHE_DATASETS` - `true`/`1` or `false`/`0`
    pub fn load() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().collect();
        Self::load_with(&args, |name| std::env::var(name).ok())
    }

    pub fn load_with(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = match parse_cli_value(args, "--config") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.with_env(env)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    fn with_env(mut self, env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(token) = env("POKEMMO_DEX_TOKEN") {
            self.token = Some(token);
        }
        if let Some(channel) = env("COMMAND_CHANNEL_ID") {
            self.command_channel_id = Some(parse_channel_id(&channel)?);
        }
        if let Some(dir) = env("DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(flag) = env("CACHE_DATASETS") {
            self.cache_datasets = flag.eq_ignore_ascii_case("true") || flag == "1";
        }
        Ok(self)
    }

    pub fn gate(&self) -> ChannelGate {
        ChannelGate::new(self.command_channel_id)
    }

    pub fn data_store(&self) -> DataStore {
        DataStore::from_dir(self.data_dir.clone(), self.cache_datasets)
    }
}

pub fn parse_channel_id(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidChannel(value.to_string()))
}

/// Parse a CLI flag value like `--config bot.ron`.
pub fn parse_cli_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find_map(|pair| {
        if pair[0] == flag {
            Some(pair[1].clone())
        } else {
            None
        }
    })
}
