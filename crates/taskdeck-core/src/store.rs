use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::{AppConfig, Messages, StorageKeys};
use crate::confirm::Confirm;
use crate::filter::Filter;
use crate::notice::Notice;
use crate::storage::{self, KeyValueStore};
use crate::task::{IdClock, Task, TaskId};
use crate::theme::Theme;

/// What a committed mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Tasks,
    Filter,
    Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(TaskId),
    EmptyText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(TaskId),
    Missing(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled { id: TaskId, completed: bool },
    Missing(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    NothingToClear,
    Declined(usize),
    Cleared(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOutcome {
    pub theme: Theme,
}

impl AddOutcome {
    pub fn notice(self, messages: &Messages) -> Option<Notice> {
        Some(match self {
            AddOutcome::Added(_) => Notice::success(&messages.task_added),
            AddOutcome::EmptyText => Notice::error(&messages.empty_text),
        })
    }
}

impl DeleteOutcome {
    pub fn notice(self, messages: &Messages) -> Option<Notice> {
        Some(Notice::info(&messages.task_deleted))
    }
}

impl ToggleOutcome {
    pub fn notice(self, _messages: &Messages) -> Option<Notice> {
        None
    }
}

impl ClearOutcome {
    pub fn notice(self, messages: &Messages) -> Option<Notice> {
        match self {
            ClearOutcome::NothingToClear => Some(Notice::info(&messages.nothing_to_clear)),
            ClearOutcome::Declined(_) => None,
            ClearOutcome::Cleared(_) => Some(Notice::success(&messages.cleared)),
        }
    }
}

impl ThemeOutcome {
    pub fn notice(self, messages: &Messages) -> Option<Notice> {
        Some(
            Notice::info(messages.theme_changed_line(self.theme))
                .styled(self.theme.notice_style()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
}

type Listener = Box<dyn Fn(Change)>;

/// Tasks, filter and theme for one mounted root, written through to a
/// [`KeyValueStore`] on every mutation.
///
/// Mutations are computed on a copy and committed only after the write
/// succeeds, so memory and storage never disagree.
pub struct TaskStore<S> {
    storage: S,
    keys: StorageKeys,
    messages: Messages,
    tasks: Vec<Task>,
    filter: Filter,
    theme: Theme,
    clock: IdClock,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> TaskStore<S> {
    #[tracing::instrument(skip_all)]
    pub fn load(storage: S, config: &AppConfig) -> Self {
        let keys = config.storage.clone();
        let tasks = storage::load_tasks(&storage, &keys.tasks);
        let theme = storage::load_theme(&storage, &keys.theme);
        let clock = IdClock::seeded(&tasks);

        info!(
            tasks = tasks.len(),
            theme = theme.storage_value(),
            "loaded task store"
        );

        Self {
            storage,
            keys,
            messages: config.messages.clone(),
            tasks,
            filter: Filter::default(),
            theme,
            clock,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    pub fn counts(&self) -> Counts {
        Counts {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.completed).count(),
        }
    }

    pub fn summary_line(&self) -> String {
        let counts = self.counts();
        self.messages.summary_line(counts.total, counts.completed)
    }

    pub fn add(&mut self, text: &str) -> anyhow::Result<AddOutcome> {
        self.add_at(text, Utc::now())
    }

    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn add_at(&mut self, text: &str, now: DateTime<Utc>) -> anyhow::Result<AddOutcome> {
        let text = text.trim();
        if text.is_empty() {
            debug!("rejected empty task text");
            return Ok(AddOutcome::EmptyText);
        }

        let id = self.clock.next_id(now);
        if self.get(id).is_some() {
            warn!(id, "task id space exhausted");
            anyhow::bail!("no unused task id left after {id}");
        }

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(Task::new_active(id, text.to_string(), now));
        next.extend(self.tasks.iter().cloned());

        self.commit_tasks(next)?;
        info!(id, "added task");
        Ok(AddOutcome::Added(id))
    }

    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: TaskId) -> anyhow::Result<DeleteOutcome> {
        let existed = self.get(id).is_some();
        let next: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();

        self.commit_tasks(next)?;
        if existed {
            info!(id, "deleted task");
            Ok(DeleteOutcome::Deleted(id))
        } else {
            debug!(id, "delete of unknown task");
            Ok(DeleteOutcome::Missing(id))
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle(&mut self, id: TaskId) -> anyhow::Result<ToggleOutcome> {
        let Some(idx) = self.tasks.iter().position(|task| task.id == id) else {
            debug!(id, "toggle of unknown task");
            return Ok(ToggleOutcome::Missing(id));
        };

        let mut next = self.tasks.clone();
        next[idx].toggle();
        let completed = next[idx].completed;

        self.commit_tasks(next)?;
        debug!(id, completed, "toggled task");
        Ok(ToggleOutcome::Toggled { id, completed })
    }

    /// Removes every completed task once `confirm` agrees. The prompt is
    /// skipped entirely when nothing is completed.
    #[tracing::instrument(skip(self, confirm))]
    pub fn clear_completed(&mut self, confirm: &impl Confirm) -> anyhow::Result<ClearOutcome> {
        let count = self.counts().completed;
        if count == 0 {
            debug!("no completed tasks to clear");
            return Ok(ClearOutcome::NothingToClear);
        }

        let prompt = self.messages.confirm_clear_line(count);
        if !confirm.confirm(&prompt) {
            info!(count, "clear completed declined");
            return Ok(ClearOutcome::Declined(count));
        }

        let next: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| !task.completed)
            .cloned()
            .collect();

        self.commit_tasks(next)?;
        info!(count, "cleared completed tasks");
        Ok(ClearOutcome::Cleared(count))
    }

    #[tracing::instrument(skip(self))]
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        debug!(filter = filter.key(), "filter set");
        self.emit(Change::Filter);
    }

    #[tracing::instrument(skip(self))]
    pub fn set_theme(&mut self, theme: Theme) -> anyhow::Result<()> {
        storage::save_theme(&self.storage, &self.keys.theme, theme)?;
        self.theme = theme;
        debug!(theme = theme.storage_value(), "theme set");
        self.emit(Change::Theme);
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> anyhow::Result<ThemeOutcome> {
        let theme = self.theme.next();
        self.set_theme(theme)?;
        Ok(ThemeOutcome { theme })
    }

    fn commit_tasks(&mut self, next: Vec<Task>) -> anyhow::Result<()> {
        storage::save_tasks(&self.storage, &self.keys.tasks, &next)?;
        self.tasks = next;
        self.emit(Change::Tasks);
        Ok(())
    }

    fn emit(&self, change: Change) {
        for listener in &self.listeners {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> TaskStore<MemoryStore> {
        TaskStore::load(MemoryStore::new(), &AppConfig::default())
    }

    #[test]
    fn listeners_hear_each_committed_change() {
        let heard = Rc::new(RefCell::new(Vec::new()));
        let mut store = store();
        {
            let heard = heard.clone();
            store.subscribe(move |change| heard.borrow_mut().push(change));
        }

        let AddOutcome::Added(id) = store.add("write tests").expect("add") else {
            panic!("task should be added");
        };
        store.add("  ").expect("add empty");
        store.toggle(id).expect("toggle");
        store.toggle(id + 1).expect("toggle missing");
        store.set_filter(Filter::Active);
        store.toggle_theme().expect("theme");

        assert_eq!(
            *heard.borrow(),
            vec![Change::Tasks, Change::Tasks, Change::Filter, Change::Theme]
        );
    }

    #[test]
    fn outcomes_map_to_notice_kinds() {
        use crate::notice::NoticeKind;

        let messages = Messages::default();
        let kind = |notice: Option<Notice>| notice.map(|notice| notice.kind);

        assert_eq!(
            kind(AddOutcome::Added(1).notice(&messages)),
            Some(NoticeKind::Success)
        );
        assert_eq!(
            kind(AddOutcome::EmptyText.notice(&messages)),
            Some(NoticeKind::Error)
        );
        assert_eq!(
            kind(DeleteOutcome::Missing(9).notice(&messages)),
            Some(NoticeKind::Info)
        );
        assert_eq!(kind(ToggleOutcome::Missing(9).notice(&messages)), None);
        assert_eq!(kind(ClearOutcome::Declined(2).notice(&messages)), None);
        assert_eq!(
            kind(ClearOutcome::NothingToClear.notice(&messages)),
            Some(NoticeKind::Info)
        );
    }

    #[test]
    fn theme_notice_carries_theme_colors() {
        let notice = ThemeOutcome { theme: Theme::Blue }
            .notice(&Messages::default())
            .expect("theme notice");
        assert_eq!(notice.message, "Theme changed to blue!");
        assert_eq!(notice.style, Some(Theme::Blue.notice_style()));
    }

    #[test]
    fn summary_counts_ignore_the_filter() {
        let mut store = store();
        store.add("a").expect("add a");
        let AddOutcome::Added(b) = store.add("b").expect("add b") else {
            panic!("b should be added");
        };
        store.toggle(b).expect("toggle b");
        store.set_filter(Filter::Completed);

        assert_eq!(store.filtered_tasks().len(), 1);
        assert_eq!(store.summary_line(), "Total: 2 | Completed: 1");
    }
}
