use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entities::{Mood, MoodEntry};

/// Mood entries keyed by date. Upsert semantics: recording a mood for a day
/// that already has one replaces it in place, so at most one entry per date
/// key ever exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLog(Vec<MoodEntry>);

impl MoodLog {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        MoodLog(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoodEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn mood_on(&self, date: NaiveDate) -> Option<Mood> {
        self.0
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.mood)
    }

    pub fn with_mood(&self, date: NaiveDate, mood: Mood) -> MoodLog {
        let mut entries = self.0.clone();
        match entries.iter_mut().find(|entry| entry.date == date) {
            Some(existing) => existing.mood = mood,
            None => entries.push(MoodEntry { date, mood }),
        }
        MoodLog(entries)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::planner::entities::Mood;

    use super::MoodLog;

    const DAY: NaiveDate = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    const OTHER_DAY: NaiveDate = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();

    #[test]
    fn missing_date_has_no_mood() {
        assert_eq!(MoodLog::default().mood_on(DAY), None);
    }

    #[test]
    fn recording_twice_keeps_one_entry_with_the_latest_mood() {
        let log = MoodLog::default()
            .with_mood(DAY, Mood::Happy)
            .with_mood(DAY, Mood::Sad);

        assert_eq!(log.len(), 1);
        assert_eq!(log.mood_on(DAY), Some(Mood::Sad));
    }

    #[test]
    fn upsert_keeps_the_original_position() {
        let log = MoodLog::default()
            .with_mood(DAY, Mood::Happy)
            .with_mood(OTHER_DAY, Mood::Neutral)
            .with_mood(DAY, Mood::Sad);

        let dates: Vec<_> = log.iter().map(|e| e.date).collect();
        assert_eq!(dates, [DAY, OTHER_DAY]);
    }

    #[test]
    fn days_do_not_interfere() {
        let log = MoodLog::default()
            .with_mood(DAY, Mood::Happy)
            .with_mood(OTHER_DAY, Mood::Sad);

        assert_eq!(log.mood_on(DAY), Some(Mood::Happy));
        assert_eq!(log.mood_on(OTHER_DAY), Some(Mood::Sad));
    }
}
