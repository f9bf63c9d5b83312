use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// In-memory product repository with an interactive menu
#[derive(Debug, Parser)]
#[command(name = "keyrepo", version)]
pub struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overrides the config file
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Do not clear the screen before the menu
    #[arg(long)]
    pub no_clear: bool,

    /// Do not wait for Enter after each command
    #[arg(long)]
    pub no_pause: bool,
}

impl Args {
    /// Load the config file (or defaults) and apply command-line overrides
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if self.no_clear {
            config.session.clear_screen = false;
        }
        if self.no_pause {
            config.session.pause = false;
        }
        Ok(config)
    }
}
