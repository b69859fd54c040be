use chrono::NaiveDate;

use crate::utils::percentage::Percentage;

use super::{
    entities::{Quadrant, Task},
    tasks::TaskList,
};

/// Tasks belonging to `date`, in display order.
pub fn tasks_on_date(tasks: &TaskList, date: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|task| task.date == date).collect()
}

/// Completion summary for one day's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    pub percentage: Percentage,
}

impl CompletionStats {
    pub const EMPTY: CompletionStats = CompletionStats {
        completed: 0,
        total: 0,
        percentage: Percentage::ZERO,
    };
}

pub fn completion_stats<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> CompletionStats {
    let mut completed = 0;
    let mut total = 0;
    for task in tasks {
        total += 1;
        if task.completed {
            completed += 1;
        }
    }
    CompletionStats {
        completed,
        total,
        percentage: Percentage::from_ratio(completed, total),
    }
}

/// One day's tasks partitioned over the four Eisenhower buckets. Each task
/// lands in exactly one bucket since membership is read off its two flags.
#[derive(Debug, Default)]
pub struct Quadrants<'a> {
    pub do_first: Vec<&'a Task>,
    pub schedule: Vec<&'a Task>,
    pub delegate: Vec<&'a Task>,
    pub eliminate: Vec<&'a Task>,
}

impl<'a> Quadrants<'a> {
    pub fn bucket(&self, quadrant: Quadrant) -> &[&'a Task] {
        match quadrant {
            Quadrant::DoFirst => &self.do_first,
            Quadrant::Schedule => &self.schedule,
            Quadrant::Delegate => &self.delegate,
            Quadrant::Eliminate => &self.eliminate,
        }
    }
}

pub fn quadrants<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Quadrants<'a> {
    let mut result = Quadrants::default();
    for task in tasks {
        match task.quadrant() {
            Quadrant::DoFirst => result.do_first.push(task),
            Quadrant::Schedule => result.schedule.push(task),
            Quadrant::Delegate => result.delegate.push(task),
            Quadrant::Eliminate => result.eliminate.push(task),
        }
    }
    result
}
