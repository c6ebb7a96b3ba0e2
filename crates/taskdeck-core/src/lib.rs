//! State layer of the task list: tasks, filter and theme, persisted
//! through a [`storage::KeyValueStore`] and free of any presentation
//! surface.

pub mod config;
pub mod confirm;
pub mod filter;
pub mod notice;
pub mod storage;
pub mod store;
pub mod task;
pub mod theme;

pub use config::AppConfig;
pub use confirm::Confirm;
pub use filter::Filter;
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use store::{Change, TaskStore};
pub use task::{Task, TaskId};
pub use theme::Theme;
