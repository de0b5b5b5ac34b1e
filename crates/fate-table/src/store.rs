//! The snapshot mirror.
//!
//! The whole table is rewritten to one JSON document after every
//! mutation. Loading is deliberately forgiving: a missing or unreadable
//! document just means starting from scratch, never an error the user
//! has to deal with.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TableResult;
use crate::table::Table;

/// File name of the snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "session.json";

/// Loads and saves the table snapshot at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// A store writing `session.json` inside the given directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(SNAPSHOT_FILE),
        }
    }

    /// The per-user data directory for this application, if the platform
    /// exposes one.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "fate-nexus").map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// The full path of the snapshot document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot. Returns `None` when the document is missing
    /// *or* malformed; both mean "start from defaults".
    pub fn load(&self) -> Option<Table> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Replace the snapshot with the current table. The write is whole-
    /// file; there is no batching and no partial-write recovery.
    pub fn save(&self, table: &Table) -> TableResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(table)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Delete the snapshot. Deleting a snapshot that does not exist is
    /// fine.
    pub fn clear(&self) -> TableResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    use super::*;

    fn sample_table() -> Table {
        let mut rng = StdRng::seed_from_u64(42);
        let mut table = Table::create("Mara", &mut rng);
        table.add_character(Some("Kira"));
        table
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        let table = sample_table();

        store.save(&table).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        assert!(store.load().is_none());
    }

    #[test]
    fn load_malformed_is_none() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("down");
        let store = SnapshotStore::in_dir(&nested);
        store.save(&sample_table()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn clear_removes_and_tolerates_missing() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::in_dir(dir.path());
        store.save(&sample_table()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }
}
