use super::files::{atomic_write, read_file};
use crate::domain::{ResourceRegistry, TaskRegistry};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything that is persisted, stored as one JSON document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub tasks: TaskRegistry,
    #[serde(default)]
    pub resources: ResourceRegistry,
    #[serde(default)]
    pub pomodoro_count: u64,
}

/// JSON file holding the whole `AppData`
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the data file; a missing file yields the default state
    pub fn load(&self) -> Result<AppData> {
        let content = read_file(&self.path)
            .map_err(|err| AppError::persistence(format!("{:#}", err)))?;

        let Some(content) = content else {
            tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(AppData::default());
        };

        serde_json::from_str(&content).map_err(|err| {
            AppError::persistence(format!("invalid JSON in {}: {}", self.path.display(), err))
        })
    }

    /// Overwrite the data file with `data`
    pub fn save(&self, data: &AppData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|err| AppError::persistence(err.to_string()))?;
        atomic_write(&self.path, &json).map_err(|err| AppError::persistence(format!("{:#}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("pomodoro_data.json"))
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().unwrap();
        let data = store_in(&dir).load().unwrap();

        assert_eq!(data, AppData::default());
        assert!(data.tasks.is_empty());
        assert!(data.resources.is_empty());
        assert_eq!(data.pomodoro_count, 0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut data = AppData::default();
        data.tasks.add("Read chapter 3", "2030-05-01").unwrap();
        data.tasks.add("Practice katas", "2030-05-02").unwrap();
        data.tasks.complete(1).unwrap();
        data.resources.add("reading", "Book", "https://example.com/book").unwrap();
        data.resources.add("practice", "Kata", "https://example.com/kata").unwrap();
        data.resources.add("links", "Home", "https://example.com").unwrap();
        data.pomodoro_count = 7;

        store.save(&data).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_file_format() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut data = AppData::default();
        data.tasks.add("T", "2030-01-01").unwrap();
        data.pomodoro_count = 2;
        store.save(&data).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "tasks": [{ "task": "T", "deadline": "2030-01-01", "completed": false }],
                "resources": { "reading": [], "practice": [], "links": [] },
                "pomodoro_count": 2
            })
        );
    }

    #[test]
    fn test_load_existing_file_written_elsewhere() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let content = r#"{"tasks": [{"task": "Essay", "deadline": "2024-12-01", "completed": true}], "resources": {"reading": [], "practice": [{"name": "LeetCode", "url": "https://leetcode.com"}], "links": []}, "pomodoro_count": 4}"#;
        fs::write(store.path(), content).unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.tasks.len(), 1);
        assert!(data.tasks.get(0).unwrap().completed);
        assert_eq!(data.resources.len(), 1);
        assert_eq!(data.pomodoro_count, 4);
    }

    #[test]
    fn test_load_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"pomodoro_count": 3}"#).unwrap();

        let data = store.load().unwrap();
        assert!(data.tasks.is_empty());
        assert!(data.resources.is_empty());
        assert_eq!(data.pomodoro_count, 3);
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.code(), "persistence");
    }

    #[test]
    fn test_save_to_unwritable_location_errors() {
        let dir = tempdir().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = JsonStore::new(blocker.join("data.json"));

        let err = store.save(&AppData::default()).unwrap_err();
        assert_eq!(err.code(), "persistence");
    }

    #[test]
    fn test_delete_all_then_reload_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut data = AppData::default();
        data.tasks.add("A", "2030-01-01").unwrap();
        data.tasks.add("B", "2030-01-02").unwrap();
        store.save(&data).unwrap();

        while !data.tasks.is_empty() {
            data.tasks.delete(0).unwrap();
            store.save(&data).unwrap();
        }

        assert!(store.load().unwrap().tasks.is_empty());
    }
}
