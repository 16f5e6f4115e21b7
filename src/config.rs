use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NoteMapError, Result};

pub const CONFIG_FILE: &str = "config.yaml";
pub const DATA_DIR_ENV: &str = "NOTEMAP_DIR";
pub const DEFAULT_DATA_DIR: &str = ".notemap";

/// Settings stored as `config.yaml` in the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drop the sample notes around the first note's position on first use.
    pub seed_on_first_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_on_first_run: true,
        }
    }
}

impl Config {
    /// Read `config.yaml` from `data_dir`. A missing file yields defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&text)
            .map_err(|e| NoteMapError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(data_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}

/// Flag wins, then `NOTEMAP_DIR`, then `./.notemap`.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Create the data directory with a default config.
pub fn init_data_dir(data_dir: &Path) -> Result<Config> {
    if data_dir.join(CONFIG_FILE).exists() {
        return Err(NoteMapError::AlreadyInitialized);
    }
    fs::create_dir_all(data_dir)?;
    let config = Config::default();
    config.save(data_dir)?;
    Ok(config)
}

/// Config of an initialized data directory.
pub fn open_data_dir(data_dir: &Path) -> Result<Config> {
    if !data_dir.join(CONFIG_FILE).exists() {
        return Err(NoteMapError::NotInitialized);
    }
    Config::load(data_dir)
}
