use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn all() -> [Filter; 3] {
        [Filter::All, Filter::Active, Filter::Completed]
    }

    /// Parses the key carried by a filter control. Unknown keys select
    /// every task.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn apply<'a>(self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample() -> Vec<Task> {
        let now = Utc::now();
        [("a", false), ("b", true), ("c", false), ("d", true)]
            .into_iter()
            .enumerate()
            .map(|(idx, (text, completed))| {
                let mut task = Task::new_active(idx as u64 + 1, text.to_string(), now);
                task.completed = completed;
                task
            })
            .collect()
    }

    fn texts(tasks: Vec<&Task>) -> Vec<&str> {
        tasks.into_iter().map(|task| task.text.as_str()).collect()
    }

    #[test]
    fn active_keeps_incomplete_in_order() {
        let tasks = sample();
        assert_eq!(texts(Filter::Active.apply(&tasks)), vec!["a", "c"]);
    }

    #[test]
    fn completed_is_the_complement() {
        let tasks = sample();
        assert_eq!(texts(Filter::Completed.apply(&tasks)), vec!["b", "d"]);
    }

    #[test]
    fn all_returns_everything() {
        let tasks = sample();
        assert_eq!(Filter::All.apply(&tasks).len(), tasks.len());
    }

    #[test]
    fn unknown_keys_fall_back_to_all() {
        assert_eq!(Filter::from_key("archived"), Filter::All);
        assert_eq!(Filter::from_key(""), Filter::All);
        for filter in Filter::all() {
            assert_eq!(Filter::from_key(filter.key()), filter);
        }
    }
}
