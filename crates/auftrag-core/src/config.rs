//! Board configuration loaded from `.auftrag/config.toml`, with defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{ColumnSet, ReorderPolicy};
use crate::error::{AuftragError, AuftragResult};

/// Directory holding board state inside a project.
pub const STATE_DIR: &str = ".auftrag";

const CONFIG_FILE: &str = "config.toml";

/// Settings fixed when a board is initialised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Column names in display order. The first one receives new work orders.
    pub columns: ColumnSet,
    /// Placement of moved work orders inside their destination column.
    pub reorder: ReorderPolicy,
}

impl BoardConfig {
    pub fn from_toml_str(content: &str) -> AuftragResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> AuftragResult<String> {
        toml::to_string_pretty(self).map_err(|e| AuftragError::config(e.to_string()))
    }
}

/// Path of the config file for a project directory.
pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(STATE_DIR).join(CONFIG_FILE)
}

/// Load the project's board configuration, falling back to defaults when no
/// config file exists.
pub fn load_config(project_dir: &Path) -> AuftragResult<BoardConfig> {
    let path = config_path(project_dir);
    if !path.exists() {
        debug!(path = %path.display(), "no board config, using defaults");
        return Ok(BoardConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    BoardConfig::from_toml_str(&content)
        .map_err(|e| AuftragError::config(format!("{}: {}", path.display(), e)))
}

/// Write `config` to the project's config file, creating `.auftrag/`.
pub fn write_config(project_dir: &Path, config: &BoardConfig) -> AuftragResult<PathBuf> {
    let path = config_path(project_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, config.to_toml_string()?)?;
    Ok(path)
}
