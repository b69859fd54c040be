use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entities::{Priority, Task};

/// Ordered collection of tasks; insertion order is display order.
///
/// Every operation builds a new list instead of editing in place, so readers
/// holding the previous value never observe a half-applied change. Operations
/// addressed at an id that is not present simply return an unchanged copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskList(tasks)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.0.iter().find(|task| task.id == id)
    }

    /// Appends a new task for `date`. Blank text is rejected: the list comes
    /// back unchanged and no task is created.
    pub fn with_task(&self, text: &str, date: NaiveDate) -> (TaskList, Option<Task>) {
        if text.trim().is_empty() {
            return (self.clone(), None);
        }
        let task = Task::new(text, date);
        let mut tasks = self.0.clone();
        tasks.push(task.clone());
        (TaskList(tasks), Some(task))
    }

    pub fn with_completion_toggled(&self, id: &str) -> TaskList {
        self.map_task(id, |task| task.completed = !task.completed)
    }

    pub fn without(&self, id: &str) -> TaskList {
        TaskList(
            self.0
                .iter()
                .filter(|task| task.id != id)
                .cloned()
                .collect(),
        )
    }

    pub fn with_priority(&self, id: &str, priority: Priority) -> TaskList {
        self.map_task(id, |task| task.priority = priority)
    }

    /// Sets both Eisenhower flags at once so a task never sits between
    /// quadrants.
    pub fn with_quadrant(&self, id: &str, important: bool, urgent: bool) -> TaskList {
        self.map_task(id, |task| {
            task.important = important;
            task.urgent = urgent;
        })
    }

    fn map_task(&self, id: &str, update: impl Fn(&mut Task)) -> TaskList {
        TaskList(
            self.0
                .iter()
                .cloned()
                .map(|mut task| {
                    if task.id == id {
                        update(&mut task);
                    }
                    task
                })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::planner::entities::{Priority, Quadrant};

    use super::TaskList;

    const DAY: NaiveDate = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

    #[test]
    fn add_appends_in_order() {
        let (list, first) = TaskList::default().with_task("first", DAY);
        let (list, second) = list.with_task("second", DAY);

        let texts: Vec<_> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert!(first.is_some());
        assert!(second.is_some());
    }

    #[test]
    fn blank_text_is_rejected_without_changing_the_list() {
        let (list, _) = TaskList::default().with_task("keep me", DAY);

        let (after_empty, added) = list.with_task("", DAY);
        assert!(added.is_none());
        assert_eq!(after_empty, list);

        let (after_spaces, added) = list.with_task("   \t", DAY);
        assert!(added.is_none());
        assert_eq!(after_spaces, list);
    }

    #[test]
    fn toggle_flips_only_the_matching_task() {
        let (list, a) = TaskList::default().with_task("a", DAY);
        let (list, _) = list.with_task("b", DAY);
        let a = a.unwrap();

        let toggled = list.with_completion_toggled(&a.id);
        assert!(toggled.get(&a.id).unwrap().completed);
        assert_eq!(toggled.iter().filter(|t| t.completed).count(), 1);

        let toggled_back = toggled.with_completion_toggled(&a.id);
        assert!(!toggled_back.get(&a.id).unwrap().completed);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let (list, _) = TaskList::default().with_task("only", DAY);

        assert_eq!(list.with_completion_toggled("missing"), list);
        assert_eq!(list.without("missing"), list);
        assert_eq!(list.with_priority("missing", Priority::High), list);
        assert_eq!(list.with_quadrant("missing", true, true), list);
    }

    #[test]
    fn removal_keeps_the_rest_in_order() {
        let (list, _) = TaskList::default().with_task("a", DAY);
        let (list, b) = list.with_task("b", DAY);
        let (list, _) = list.with_task("c", DAY);

        let remaining = list.without(&b.unwrap().id);
        let texts: Vec<_> = remaining.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn quadrant_flags_are_set_atomically() {
        let (list, task) = TaskList::default().with_task("sort inbox", DAY);
        let task = task.unwrap();

        let moved = list.with_quadrant(&task.id, true, false);
        let moved_task = moved.get(&task.id).unwrap();
        assert!(moved_task.important);
        assert!(!moved_task.urgent);
        assert_eq!(moved_task.quadrant(), Quadrant::Schedule);
    }
}
