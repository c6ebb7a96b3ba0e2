use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub tasks: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: "tasks".to_string(),
            theme: "theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NoticeTimings {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Default for NoticeTimings {
    fn default() -> Self {
        Self {
            display_ms: 3_000,
            exit_ms: 300,
        }
    }
}

/// User-facing text. `{count}`, `{total}`, `{completed}` and `{theme}`
/// are substituted where noted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub title: String,
    pub input_placeholder: String,
    pub add_button: String,
    pub clear_completed: String,
    pub filter_all: String,
    pub filter_active: String,
    pub filter_completed: String,
    pub empty_state: String,
    pub delete_title: String,
    /// `{total}`, `{completed}`
    pub summary: String,
    pub empty_text: String,
    pub task_added: String,
    pub task_deleted: String,
    pub nothing_to_clear: String,
    /// `{count}`
    pub confirm_clear: String,
    pub cleared: String,
    /// `{theme}`
    pub theme_changed: String,
    pub theme_green: String,
    pub theme_blue: String,
    pub storage_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            title: "My Tasks".to_string(),
            input_placeholder: "What needs doing?".to_string(),
            add_button: "Add".to_string(),
            clear_completed: "Clear completed".to_string(),
            filter_all: "All".to_string(),
            filter_active: "Active".to_string(),
            filter_completed: "Completed".to_string(),
            empty_state: "No tasks here yet".to_string(),
            delete_title: "Delete".to_string(),
            summary: "Total: {total} | Completed: {completed}".to_string(),
            empty_text: "Enter the task text!".to_string(),
            task_added: "Task added!".to_string(),
            task_deleted: "Task deleted!".to_string(),
            nothing_to_clear: "No completed tasks to delete!".to_string(),
            confirm_clear: "Delete {count} completed tasks?".to_string(),
            cleared: "Completed tasks deleted!".to_string(),
            theme_changed: "Theme changed to {theme}!".to_string(),
            theme_green: "green".to_string(),
            theme_blue: "blue".to_string(),
            storage_failed: "Could not save your tasks".to_string(),
        }
    }
}

impl Messages {
    pub fn summary_line(&self, total: usize, completed: usize) -> String {
        self.summary
            .replace("{total}", &total.to_string())
            .replace("{completed}", &completed.to_string())
    }

    pub fn confirm_clear_line(&self, count: usize) -> String {
        self.confirm_clear.replace("{count}", &count.to_string())
    }

    pub fn theme_changed_line(&self, theme: Theme) -> String {
        let name = match theme {
            Theme::Green => &self.theme_green,
            Theme::Blue => &self.theme_blue,
        };
        self.theme_changed.replace("{theme}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageKeys,
    pub notifications: NoticeTimings,
    pub messages: Messages,
}

impl AppConfig {
    #[tracing::instrument(skip(raw))]
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg: AppConfig = toml::from_str(raw).context("failed to parse taskdeck config")?;

        if cfg.storage.tasks == cfg.storage.theme {
            anyhow::bail!(
                "storage keys for tasks and theme must differ (both are {:?})",
                cfg.storage.tasks
            );
        }

        info!(
            tasks_key = %cfg.storage.tasks,
            theme_key = %cfg.storage.theme,
            display_ms = cfg.notifications.display_ms,
            exit_ms = cfg.notifications.exit_ms,
            "loaded taskdeck config"
        );
        Ok(cfg)
    }

    /// Parses `raw`, falling back to built-in defaults when it is invalid.
    pub fn from_toml_or_default(raw: &str) -> Self {
        match Self::from_toml_str(raw) {
            Ok(cfg) => cfg,
            Err(error) => {
                warn!(
                    error = %format!("{error:#}"),
                    "invalid taskdeck config; using defaults"
                );
                Self::default()
            }
        }
    }
}
