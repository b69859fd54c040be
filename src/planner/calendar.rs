use chrono::{Datelike, NaiveDate};

use crate::utils::time::{days_in_month, first_of_month, weekday_column};

use super::{
    entities::Mood,
    moods::MoodLog,
    report::{completion_stats, tasks_on_date, CompletionStats},
    tasks::TaskList,
};

/// Color band summarizing how much of a day's work got done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBand {
    /// 75% or more completed.
    High,
    /// 50% or more.
    Medium,
    /// Anything above zero.
    Low,
    /// Nothing completed, or no tasks at all.
    Neutral,
}

impl CompletionBand {
    pub fn from_stats(stats: CompletionStats) -> CompletionBand {
        if stats.total == 0 {
            CompletionBand::Neutral
        } else if *stats.percentage >= 75 {
            CompletionBand::High
        } else if *stats.percentage >= 50 {
            CompletionBand::Medium
        } else if *stats.percentage > 0 {
            CompletionBand::Low
        } else {
            CompletionBand::Neutral
        }
    }
}

/// One real day inside a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub mood: Option<Mood>,
    pub stats: CompletionStats,
    pub band: CompletionBand,
    pub is_today: bool,
}

/// A calendar month laid out as Sunday-first weeks. `None` cells are the
/// leading and trailing blanks padding the month out to whole weeks.
#[derive(Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    cells: Vec<Option<DayCell>>,
}

impl MonthGrid {
    pub fn cells(&self) -> &[Option<DayCell>] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[Option<DayCell>]> {
        self.cells.chunks(7)
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().flatten()
    }
}

/// Builds the grid for one month. `today` is passed in rather than read from
/// ambient time so the highlight is deterministic. Returns `None` for an
/// invalid year/month pair; `month` is 1-based.
pub fn month_grid(
    year: i32,
    month: u32,
    tasks: &TaskList,
    moods: &MoodLog,
    today: NaiveDate,
) -> Option<MonthGrid> {
    let first = first_of_month(year, month)?;
    let days = days_in_month(year, month)?;
    let leading = weekday_column(first) as usize;

    let mut cells: Vec<Option<DayCell>> = Vec::with_capacity(leading + days as usize + 6);
    cells.resize(leading, None);

    for day in 1..=days {
        // Every day of a valid month is a valid date.
        let date = first.with_day(day)?;
        let stats = completion_stats(tasks_on_date(tasks, date));
        cells.push(Some(DayCell {
            date,
            day,
            mood: moods.mood_on(date),
            stats,
            band: CompletionBand::from_stats(stats),
            is_today: date == today,
        }));
    }

    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    Some(MonthGrid { year, month, cells })
}
