mod filter_bar;
mod notifications;
mod task_item;
mod task_list;
mod theme_toggle;

pub use filter_bar::FilterBar;
pub use notifications::NotificationStack;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use theme_toggle::ThemeToggle;
