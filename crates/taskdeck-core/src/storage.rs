use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::Context;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::task::Task;
use crate::theme::Theme;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("failed to read key {key:?}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write key {key:?}: {reason}")]
    Write { key: String, reason: String },
}

impl StorageError {
    pub fn read(key: &str, reason: impl Into<String>) -> Self {
        StorageError::Read {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub fn write(key: &str, reason: impl Into<String>) -> Self {
        StorageError::Write {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// String-valued persistence addressed by key.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Reads the task list. Missing, unreadable or malformed data all yield
/// an empty list.
#[tracing::instrument(skip(storage))]
pub fn load_tasks(storage: &impl KeyValueStore, key: &str) -> Vec<Task> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored tasks");
            return Vec::new();
        }
        Err(error) => {
            error!(%error, "failed reading tasks from storage");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
        Ok(tasks) => {
            let tasks = tasks.unwrap_or_default();
            debug!(count = tasks.len(), "loaded tasks");
            tasks
        }
        Err(error) => {
            warn!(%error, "stored tasks are malformed; starting empty");
            Vec::new()
        }
    }
}

#[tracing::instrument(skip(storage, tasks), fields(count = tasks.len()))]
pub fn save_tasks(storage: &impl KeyValueStore, key: &str, tasks: &[Task]) -> anyhow::Result<()> {
    let json = serde_json::to_string(tasks).context("failed to encode tasks")?;
    storage
        .set_item(key, &json)
        .with_context(|| format!("failed to persist tasks under {key:?}"))?;
    Ok(())
}

#[tracing::instrument(skip(storage))]
pub fn load_theme(storage: &impl KeyValueStore, key: &str) -> Theme {
    match storage.get_item(key) {
        Ok(raw) => Theme::from_storage(raw.as_deref()),
        Err(error) => {
            error!(%error, "failed reading theme from storage");
            Theme::default()
        }
    }
}

#[tracing::instrument(skip(storage))]
pub fn save_theme(storage: &impl KeyValueStore, key: &str, theme: Theme) -> anyhow::Result<()> {
    storage
        .set_item(key, theme.storage_value())
        .with_context(|| format!("failed to persist theme under {key:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::read(key, "denied"))
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::write(key, "quota exceeded"))
        }
    }

    #[test]
    fn malformed_tasks_load_as_empty() {
        for raw in ["not json", "{\"id\":1}", "[{\"id\":\"x\"}]"] {
            let storage = MemoryStore::new().with_item("tasks", raw);
            assert!(
                load_tasks(&storage, "tasks").is_empty(),
                "{raw} should load as empty"
            );
        }
    }

    #[test]
    fn null_and_missing_tasks_load_as_empty() {
        let storage = MemoryStore::new().with_item("tasks", "null");
        assert!(load_tasks(&storage, "tasks").is_empty());
        assert!(load_tasks(&MemoryStore::new(), "tasks").is_empty());
    }

    #[test]
    fn reads_browser_shaped_records() {
        let storage = MemoryStore::new().with_item(
            "tasks",
            r#"[{"id":1700000000000,"text":"buy milk","completed":true,"createdAt":"2023-11-14T22:13:20.000Z"}]"#,
        );
        let tasks = load_tasks(&storage, "tasks");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1_700_000_000_000);
        assert_eq!(tasks[0].text, "buy milk");
        assert!(tasks[0].completed);
    }

    #[test]
    fn saved_tasks_read_back_identically() {
        let storage = MemoryStore::new();
        let tasks = vec![Task::new_active(7, "write report".to_string(), Utc::now())];
        save_tasks(&storage, "tasks", &tasks).expect("save tasks");
        assert_eq!(load_tasks(&storage, "tasks"), tasks);
    }

    #[test]
    fn broken_storage_degrades_gracefully() {
        assert!(load_tasks(&BrokenStore, "tasks").is_empty());
        assert_eq!(load_theme(&BrokenStore, "theme"), Theme::Green);
        let error = save_theme(&BrokenStore, "theme", Theme::Blue).expect_err("write must fail");
        assert!(format!("{error:#}").contains("quota exceeded"));
    }

    #[test]
    fn theme_round_trips_as_literal_string() {
        let storage = MemoryStore::new();
        save_theme(&storage, "theme", Theme::Blue).expect("save theme");
        assert_eq!(storage.raw("theme").as_deref(), Some("blue"));
        assert_eq!(load_theme(&storage, "theme"), Theme::Blue);
    }
}
