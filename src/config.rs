//! Optional TOML configuration for the example runner.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::apps::todo::TodoItem;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub counter: CounterConfig,
    pub todo: TodoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `OXIDE_APPS_LOG`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Starting count. Reset still goes back to zero.
    pub initial: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub seed: Vec<SeedTodo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTodo {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        let seed = ["Learn React", "Build a todo app", "Master TypeScript"]
            .into_iter()
            .map(|text| SeedTodo {
                text: text.to_string(),
                completed: false,
            })
            .collect();
        Self { seed }
    }
}

impl TodoConfig {
    /// Seed items with ids assigned `1..=n` in file order.
    pub fn items(&self) -> Vec<TodoItem> {
        self.seed
            .iter()
            .zip(1..)
            .map(|(seed, id)| TodoItem {
                id,
                text: seed.text.clone(),
                completed: seed.completed,
            })
            .collect()
    }
}

impl AppConfig {
    /// `<config dir>/oxide-apps/config.toml`, or the current directory when
    /// the platform has no config dir.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("oxide-apps").join("config.toml")
    }

    /// Load configuration.
    ///
    /// - An explicit path must exist and parse.
    /// - Without one, the default path is tried and a missing file yields
    ///   `AppConfig::default()`.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&content, &path)
    }

    /// Parse and validate TOML `content` read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - every seeded todo has non-blank text
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.todo.seed.iter().position(|s| s.text.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("todo.seed[{index}] has blank text"),
            });
        }
        Ok(())
    }
}
