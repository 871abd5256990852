use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("boolean options accept only 'true' or 'false', got '{0}'")]
    InvalidBool(String),
}

/// Strict boolean parser for option values. Anything other than
/// true/false (any casing) is rejected before processing begins.
pub fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool(value.to_string())),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    #[serde(default)]
    pub misspellings: Option<PathBuf>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("corrected_output")
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("correct_log.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            extension: default_extension(),
            language: default_language(),
            log_file: default_log_file(),
            dictionary: None,
            misspellings: None,
        }
    }
}

/// Values given on the command line; they beat both config files.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub language: Option<String>,
    pub log_file: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub misspellings: Option<PathBuf>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: CliOverrides) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".respell.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(output_dir) = overrides.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(extension) = overrides.extension {
            config.extension = extension.trim_start_matches('.').to_string();
        }
        if let Some(language) = overrides.language {
            config.language = language;
        }
        if let Some(log_file) = overrides.log_file {
            config.log_file = log_file;
        }
        if let Some(dictionary) = overrides.dictionary {
            config.dictionary = Some(dictionary);
        }
        if let Some(misspellings) = overrides.misspellings {
            config.misspellings = Some(misspellings);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.output_dir != default_output_dir() {
            self.output_dir = other.output_dir;
        }
        if other.extension != default_extension() {
            self.extension = other.extension;
        }
        if other.language != default_language() {
            self.language = other.language;
        }
        if other.log_file != default_log_file() {
            self.log_file = other.log_file;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.misspellings.is_some() {
            self.misspellings = other.misspellings;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "respell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "respell").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
