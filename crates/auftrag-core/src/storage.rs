//! JSON snapshot of a board on disk.
//!
//! The snapshot stores the flat work-order collection only; columns and the
//! reorder policy come from the board config when it is loaded.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{RecordStore, WorkOrder};
use crate::config::{BoardConfig, STATE_DIR};
use crate::error::{AuftragError, AuftragResult};

const BOARD_FILE: &str = "board.json";

/// On-disk form of a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub orders: Vec<WorkOrder>,
}

impl From<&RecordStore> for BoardSnapshot {
    fn from(store: &RecordStore) -> Self {
        Self {
            orders: store.all().to_vec(),
        }
    }
}

/// Path of the board snapshot for a project directory.
pub fn board_path(project_dir: &Path) -> PathBuf {
    project_dir.join(STATE_DIR).join(BOARD_FILE)
}

/// Load the board of a project. A missing snapshot yields an empty board.
pub fn load_board(project_dir: &Path, config: &BoardConfig) -> AuftragResult<RecordStore> {
    let path = board_path(project_dir);

    let snapshot = if path.exists() {
        let content = fs::read_to_string(&path)?;
        serde_json::from_str::<BoardSnapshot>(&content).map_err(|e| {
            AuftragError::snapshot(format!("invalid board file {}: {}", path.display(), e))
        })?
    } else {
        debug!(path = %path.display(), "no board snapshot, starting empty");
        BoardSnapshot::default()
    };

    RecordStore::from_parts(config.columns.clone(), config.reorder, snapshot.orders)
}

/// Save the board of a project. Writes to a temp file and renames it over
/// the snapshot.
pub fn save_board(project_dir: &Path, store: &RecordStore) -> AuftragResult<PathBuf> {
    let path = board_path(project_dir);
    let content = serde_json::to_string_pretty(&BoardSnapshot::from(store))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, &path)?;
    debug!(path = %path.display(), orders = store.len(), "saved board");

    Ok(path)
}
