use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stderr
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// Console session behaviour
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SessionConfig {
  /// Clear the terminal before showing the menu
  #[serde(default = "default_true")]
  pub clear_screen: bool,
  /// Wait for Enter after each command
  #[serde(default = "default_true")]
  pub pause: bool,
}

fn default_true() -> bool {
  true
}

impl Default for SessionConfig {
  fn default() -> Self {
    Self {
      clear_screen: true,
      pause: true,
    }
  }
}

/// keyrepo configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,

  /// Session configuration
  #[serde(default)]
  pub session: SessionConfig,
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

    Self::from_toml(&config_str)
      .with_context(|| format!("Failed to parse config file '{}'", path.display()))
  }

  pub fn from_toml(config_str: &str) -> anyhow::Result<Self> {
    Ok(toml::from_str(config_str)?)
  }
}
