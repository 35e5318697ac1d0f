use crate::core::{DormMap, StateStore};
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed storage key; the whole allocation state lives under this one entry.
pub const STATE_FILE: &str = "dorm_allocation.json";

/// File-backed state store: one JSON blob inside the data directory.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    base_path: String,
}

impl FileStateStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn state_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(STATE_FILE)
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<Option<DormMap>> {
        let path = self.state_path();
        if !path.exists() {
            tracing::debug!("No state file at {}", path.display());
            return Ok(None);
        }

        let blob = fs::read_to_string(&path)?;
        let dorms = serde_json::from_str(&blob)?;
        tracing::debug!("Loaded state from {}", path.display());
        Ok(Some(dorms))
    }

    fn save(&self, dorms: &DormMap) -> Result<()> {
        let path = self.state_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let blob = serde_json::to_string_pretty(dorms)?;
        fs::write(&path, blob)?;
        tracing::debug!("Saved state to {}", path.display());
        Ok(())
    }
}
