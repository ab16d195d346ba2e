use anyhow::{Context, Result};
use directories::ProjectDirs;
use mailroom_core::Donor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::CliArgs;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    /// Historical donors loaded into the collection at start-up
    #[serde(default)]
    pub donors: Vec<Donor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            donors: vec![
                Donor::from_existing("Jeff Bezos", 877.33, 1),
                Donor::from_existing("Paul Allen", 708.42, 3),
                Donor::from_existing("Steve Jobs", 1002.40, 2),
                Donor::from_existing("Mark Zuckerberg", 16396.1, 3),
                Donor::from_existing("Bill Gates", 653784.49, 2),
            ],
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "mailroom")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("mailroom.toml"))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to the built-in donors when no file is there.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => {
                let default_path = get_default_config_path()?;
                if !default_path.exists() {
                    debug!("No config at {}, using defaults", default_path.display());
                    return Ok(Config::default());
                }
                default_path
            }
        };

        Self::read(&path)
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded {} donors from {}", config.donors.len(), path.display());
        Ok(config)
    }

    pub fn from_cli_and_file(cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config.clone())?;

        // CLI args override config file
        if cli_args.no_seed {
            config.donors.clear();
        }

        Ok(config)
    }
}
