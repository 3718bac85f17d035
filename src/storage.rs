use std::collections::HashMap;

use crate::error::StorageError;
use crate::model::TestResult;

/// Key under which the result list is stored.
pub const RESULTS_KEY: &str = "testResults";

/// Minimal string key-value store, shaped like the browser's `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// `window.localStorage` of the page hosting the app.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

/// Read / prepend / clear of the persisted result list.
pub struct ResultStore {
    backend: Box<dyn KeyValueStore>,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new(MemoryStore::default())
    }
}

impl ResultStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// All results, most recent first. Missing or unreadable data reads as empty.
    pub fn load(&self) -> Vec<TestResult> {
        let raw = match self.backend.get_item(RESULTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read stored results: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(results) => results,
            Err(e) => {
                log::warn!("ignoring corrupted results under `{RESULTS_KEY}`: {e}");
                Vec::new()
            }
        }
    }

    /// Prepends `result` and writes the list back.
    pub fn save(&mut self, result: TestResult) -> Result<(), StorageError> {
        let mut results = self.load();
        results.insert(0, result);
        let json = serde_json::to_string(&results)?;
        self.backend.set_item(RESULTS_KEY, &json)?;
        log::debug!("stored result, {} in history", results.len());
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.backend.remove_item(RESULTS_KEY)?;
        log::info!("cleared stored results");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerRecord;
    use chrono::{TimeZone, Utc};

    fn result(id: &str, minute: u32) -> TestResult {
        TestResult {
            id: id.into(),
            test_id: "math-1".into(),
            test_title: "Algebra asoslari".into(),
            score: 50,
            total_questions: 2,
            correct_answers: 1,
            time_taken: 30,
            completed_at: Utc.with_ymd_and_hms(2026, 10, 18, 8, minute, 0).unwrap(),
            answers: vec![
                AnswerRecord {
                    question_id: "q1".into(),
                    selected_answer: Some(0),
                    is_correct: true,
                },
                AnswerRecord {
                    question_id: "q2".into(),
                    selected_answer: None,
                    is_correct: false,
                },
            ],
        }
    }

    #[test]
    fn empty_store_reads_empty() {
        assert!(ResultStore::default().load().is_empty());
    }

    #[test]
    fn newest_result_comes_first() {
        let mut store = ResultStore::default();
        store.save(result("result-1", 1)).unwrap();
        store.save(result("result-2", 2)).unwrap();
        store.save(result("result-3", 3)).unwrap();

        let ids: Vec<String> = store.load().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["result-3", "result-2", "result-1"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut store = ResultStore::default();
        store.save(result("result-1", 1)).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_empty());
        store.clear().unwrap();
    }

    #[test]
    fn corrupted_state_reads_as_empty_and_is_overwritten_on_save() {
        let mut backend = MemoryStore::default();
        backend.set_item(RESULTS_KEY, "{not json").unwrap();
        let mut store = ResultStore::new(backend);
        assert!(store.load().is_empty());

        store.save(result("result-1", 1)).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn file_store_round_trips_and_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = FileStore::new(dir.path().join("nested"));
        assert_eq!(files.get_item("absent").unwrap(), None);
        files.remove_item("absent").unwrap();

        files.set_item(RESULTS_KEY, "[]").unwrap();
        assert_eq!(files.get_item(RESULTS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("testResults.json").exists());
    }
}
