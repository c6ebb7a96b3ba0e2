use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TaskId = u64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new_active(id: TaskId, text: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: now,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Hands out millisecond-timestamp ids that never repeat, even when the
/// clock stalls or runs backwards. Once the id space is exhausted the
/// clock stays pinned at `u64::MAX`.
#[derive(Debug, Clone, Default)]
pub struct IdClock {
    last: TaskId,
}

impl IdClock {
    pub fn seeded(tasks: &[Task]) -> Self {
        Self {
            last: tasks.iter().map(|task| task.id).max().unwrap_or(0),
        }
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> TaskId {
        let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        self.last = stamp.max(self.last.saturating_add(1));
        self.last
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn ids_follow_the_clock() {
        let mut clock = IdClock::default();
        assert_eq!(clock.next_id(at(1_700_000_000_000)), 1_700_000_000_000);
        assert_eq!(clock.next_id(at(1_700_000_000_500)), 1_700_000_000_500);
    }

    #[test]
    fn ids_stay_unique_when_clock_stalls() {
        let mut clock = IdClock::default();
        let now = at(1_700_000_000_000);
        let first = clock.next_id(now);
        let second = clock.next_id(now);
        let third = clock.next_id(at(1_600_000_000_000));
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn seeded_clock_skips_persisted_ids() {
        let persisted = vec![Task::new_active(
            5_000_000_000_000,
            "from the future".to_string(),
            at(0),
        )];
        let mut clock = IdClock::seeded(&persisted);
        assert_eq!(clock.next_id(at(1_700_000_000_000)), 5_000_000_000_001);
    }

    #[test]
    fn exhausted_id_space_does_not_overflow() {
        let persisted = vec![Task::new_active(u64::MAX, "last".to_string(), at(0))];
        let mut clock = IdClock::seeded(&persisted);
        assert_eq!(clock.next_id(at(1_700_000_000_000)), u64::MAX);
    }

    #[test]
    fn serializes_with_camel_case_created_at() {
        let task = Task::new_active(1, "buy milk".to_string(), at(1_700_000_000_000));
        let json = serde_json::to_value(&task).expect("serialize task");
        assert_eq!(json["id"], 1);
        assert_eq!(json["text"], "buy milk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut task = Task::new_active(1, "x".to_string(), at(0));
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }
}
