use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use super::{
    entities::{Mood, Priority, Task},
    moods::MoodLog,
    storage::StateStorage,
    tasks::TaskList,
};

/// Storage keys, kept identical to the original web app's localStorage names
/// so an exported state file stays readable.
pub const TASKS_KEY: &str = "tasks";
pub const MOODS_KEY: &str = "moodEntries";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const BACKGROUND_KEY: &str = "backgroundIndex";

/// Number of selectable background choices; the index wraps around when
/// cycling past either end.
pub const BACKGROUND_CHOICES: usize = 5;

/// Direction for cycling through background choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Prev,
}

/// Display preferences persisted alongside the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub background_index: usize,
}

/// The application root: sole owner of the two collections and the
/// preferences. Mutations go through the copy-on-write repository operations
/// and every committed change is mirrored to storage before the mutator
/// returns; readers only ever borrow.
pub struct Planner<S: StateStorage> {
    storage: S,
    tasks: TaskList,
    moods: MoodLog,
    prefs: Preferences,
}

impl<S: StateStorage> Planner<S> {
    /// Hydrates from storage. Anything missing or unreadable starts at its
    /// default; a hand-edited background index is clamped back into range.
    pub async fn load(storage: S) -> Planner<S> {
        let tasks: TaskList = storage.load(TASKS_KEY).await.unwrap_or_default();
        let moods: MoodLog = storage.load(MOODS_KEY).await.unwrap_or_default();
        let dark_mode = storage.load(DARK_MODE_KEY).await.unwrap_or_default();
        let background_index = storage
            .load::<usize>(BACKGROUND_KEY)
            .await
            .unwrap_or_default()
            .min(BACKGROUND_CHOICES - 1);

        debug!(
            "Loaded state: {} tasks, {} mood entries",
            tasks.len(),
            moods.len()
        );

        Planner {
            storage,
            tasks,
            moods,
            prefs: Preferences {
                dark_mode,
                background_index,
            },
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn moods(&self) -> &MoodLog {
        &self.moods
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    /// Creates a task for `date`. Blank text changes nothing and returns
    /// `None` without touching storage.
    pub async fn add_task(&mut self, text: &str, date: NaiveDate) -> Result<Option<Task>> {
        let (tasks, added) = self.tasks.with_task(text, date);
        if added.is_none() {
            return Ok(None);
        }
        self.tasks = tasks;
        self.storage.save(TASKS_KEY, &self.tasks).await?;
        Ok(added)
    }

    pub async fn toggle_task(&mut self, id: &str) -> Result<()> {
        self.tasks = self.tasks.with_completion_toggled(id);
        self.storage.save(TASKS_KEY, &self.tasks).await?;
        Ok(())
    }

    pub async fn remove_task(&mut self, id: &str) -> Result<()> {
        self.tasks = self.tasks.without(id);
        self.storage.save(TASKS_KEY, &self.tasks).await?;
        Ok(())
    }

    pub async fn set_priority(&mut self, id: &str, priority: Priority) -> Result<()> {
        self.tasks = self.tasks.with_priority(id, priority);
        self.storage.save(TASKS_KEY, &self.tasks).await?;
        Ok(())
    }

    pub async fn set_quadrant(&mut self, id: &str, important: bool, urgent: bool) -> Result<()> {
        self.tasks = self.tasks.with_quadrant(id, important, urgent);
        self.storage.save(TASKS_KEY, &self.tasks).await?;
        Ok(())
    }

    pub async fn set_mood(&mut self, date: NaiveDate, mood: Mood) -> Result<()> {
        self.moods = self.moods.with_mood(date, mood);
        self.storage.save(MOODS_KEY, &self.moods).await?;
        Ok(())
    }

    pub async fn set_dark_mode(&mut self, dark: bool) -> Result<bool> {
        self.prefs.dark_mode = dark;
        self.storage
            .save(DARK_MODE_KEY, &self.prefs.dark_mode)
            .await?;
        Ok(self.prefs.dark_mode)
    }

    pub async fn toggle_dark_mode(&mut self) -> Result<bool> {
        let next = !self.prefs.dark_mode;
        self.set_dark_mode(next).await
    }

    /// Steps the background index with wraparound at both ends.
    pub async fn cycle_background(&mut self, direction: CycleDirection) -> Result<usize> {
        self.prefs.background_index = match direction {
            CycleDirection::Next => (self.prefs.background_index + 1) % BACKGROUND_CHOICES,
            CycleDirection::Prev => {
                (self.prefs.background_index + BACKGROUND_CHOICES - 1) % BACKGROUND_CHOICES
            }
        };
        self.storage
            .save(BACKGROUND_KEY, &self.prefs.background_index)
            .await?;
        Ok(self.prefs.background_index)
    }
}
