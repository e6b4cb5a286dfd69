//! Global daygrid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DayGridError, DayGridResult};

static DEFAULT_DATA_DIR: &str = "~/daygrid";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_max_visible_per_cell() -> usize {
    3
}

/// Global configuration at ~/.config/daygrid/config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    /// Directory holding the JSON event files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// How many events a month cell shows before collapsing the rest into
    /// a "+N more" marker.
    #[serde(default = "default_max_visible_per_cell")]
    pub max_visible_per_cell: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            data_dir: default_data_dir(),
            max_visible_per_cell: default_max_visible_per_cell(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> DayGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayGridError::Config("Could not determine config directory".into()))?
            .join("daygrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not
    /// exist.
    pub fn load() -> DayGridResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| {
            DayGridError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// The event directory with `~` expanded to the home directory.
    pub fn data_path(&self) -> PathBuf {
        expand_home(&self.data_dir)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}
