use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How strongly a task demands attention within its day's list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

/// A single to-do item. A task belongs to exactly one calendar day and never
/// moves to another; `date` serializes as the `YYYY-MM-DD` key shared with
/// mood entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub important: bool,
}

impl Task {
    /// A fresh task starts uncompleted, low priority and outside every
    /// Eisenhower emphasis.
    pub(crate) fn new(text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            date,
            priority: Priority::default(),
            urgent: false,
            important: false,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_flags(self.important, self.urgent)
    }
}

/// Mood recorded for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

/// At most one of these exists per date key; writing a second one for the
/// same date replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
}

/// Eisenhower bucket, fully determined by the (important, urgent) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Urgent and important.
    DoFirst,
    /// Important, not urgent.
    Schedule,
    /// Urgent, not important.
    Delegate,
    /// Neither.
    Eliminate,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoFirst,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    pub fn from_flags(important: bool, urgent: bool) -> Quadrant {
        match (important, urgent) {
            (true, true) => Quadrant::DoFirst,
            (true, false) => Quadrant::Schedule,
            (false, true) => Quadrant::Delegate,
            (false, false) => Quadrant::Eliminate,
        }
    }

    pub fn flags(&self) -> (bool, bool) {
        match self {
            Quadrant::DoFirst => (true, true),
            Quadrant::Schedule => (true, false),
            Quadrant::Delegate => (false, true),
            Quadrant::Eliminate => (false, false),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Urgent & Important",
            Quadrant::Schedule => "Important, Not Urgent",
            Quadrant::Delegate => "Urgent, Not Important",
            Quadrant::Eliminate => "Not Urgent & Not Important",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Do these tasks immediately",
            Quadrant::Schedule => "Schedule these tasks",
            Quadrant::Delegate => "Delegate these tasks if possible",
            Quadrant::Eliminate => "Eliminate these tasks if possible",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Mood, MoodEntry, Priority, Quadrant, Task};

    const DAY: NaiveDate = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

    #[test]
    fn new_tasks_start_with_defaults() {
        let task = Task::new("water the plants", DAY);
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Low);
        assert!(!task.urgent);
        assert!(!task.important);
        assert_eq!(task.quadrant(), Quadrant::Eliminate);
    }

    #[test]
    fn ids_are_unique() {
        let a = Task::new("a", DAY);
        let b = Task::new("b", DAY);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn quadrant_flags_round_trip() {
        for quadrant in Quadrant::ALL {
            let (important, urgent) = quadrant.flags();
            assert_eq!(Quadrant::from_flags(important, urgent), quadrant);
        }
    }

    #[test]
    fn json_layout_matches_the_stored_format() {
        let entry = MoodEntry {
            date: DAY,
            mood: Mood::Happy,
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"date":"2024-03-05","mood":"happy"}"#
        );

        let task: Task = serde_json::from_str(
            r#"{"id":"1709580000000","text":"stretch","completed":true,"date":"2024-03-05","priority":"high","urgent":true,"important":false}"#,
        )
        .unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.quadrant(), Quadrant::Delegate);
        assert_eq!(task.date, DAY);
    }
}
