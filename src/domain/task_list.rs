//! Ordered task collection
//!
//! Indices are 0-based here and 1-based in every message. Index operations
//! check for an empty list first, then the range, and leave the list
//! untouched when either check fails.

use thiserror::Error;

use super::task::Task;

/// Message shown when listing an empty task list
pub const EMPTY_LIST_MESSAGE: &str =
    "There is no task in your list. Please add some to see the list.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskListError {
    #[error("Error: Task list is empty. No tasks to {action}.")]
    EmptyList { action: &'static str },

    #[error("Error: Index must be between 1 and {len} for {action} request.")]
    OutOfBounds { action: &'static str, len: usize },

    #[error("Error: Cannot find an empty description.")]
    EmptySearch,
}

/// The session's tasks in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Appends a task and returns a reference to it
    pub fn add(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Removes and returns the task at `index`
    pub fn delete(&mut self, index: i64) -> Result<Task, TaskListError> {
        let index = self.check_index(index, "delete")?;
        Ok(self.tasks.remove(index))
    }

    /// Marks the task at `index` as done
    pub fn mark(&mut self, index: i64) -> Result<&Task, TaskListError> {
        let index = self.check_index(index, "mark")?;
        let task = &mut self.tasks[index];
        task.mark_done();
        Ok(&*task)
    }

    /// Marks the task at `index` as not done
    pub fn unmark(&mut self, index: i64) -> Result<&Task, TaskListError> {
        let index = self.check_index(index, "unmark")?;
        let task = &mut self.tasks[index];
        task.unmark_done();
        Ok(&*task)
    }

    /// Returns tasks whose description contains `needle`, ignoring case,
    /// paired with their position in the full list
    pub fn find(&self, needle: &str) -> Result<Vec<(usize, &Task)>, TaskListError> {
        if needle.is_empty() {
            return Err(TaskListError::EmptySearch);
        }

        Ok(self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.matches(needle))
            .collect())
    }

    /// Numbered rendering of every task, or the empty-list message
    pub fn render(&self) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_MESSAGE.to_string();
        }

        let mut out = String::from("Here are the tasks in your list:");
        for (i, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!("\n{}.{}", i + 1, task));
        }
        out
    }

    fn check_index(&self, index: i64, action: &'static str) -> Result<usize, TaskListError> {
        if self.tasks.is_empty() {
            return Err(TaskListError::EmptyList { action });
        }

        usize::try_from(index)
            .ok()
            .filter(|i| *i < self.tasks.len())
            .ok_or(TaskListError::OutOfBounds {
                action,
                len: self.tasks.len(),
            })
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(descriptions: &[&str]) -> TaskList {
        TaskList::from_tasks(
            descriptions
                .iter()
                .map(|d| Task::todo(d).unwrap())
                .collect(),
        )
    }

    #[test]
    fn add_appends_in_order() {
        let mut list = TaskList::new();
        list.add(Task::todo("a").unwrap());
        let added = list.add(Task::todo("b").unwrap());
        assert_eq!(added.description(), "b");

        let names: Vec<_> = list.iter().map(|t| t.description()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn index_ops_accept_only_valid_range() {
        let mut list = list_of(&["a", "b", "c"]);

        assert_eq!(
            list.mark(-1).unwrap_err(),
            TaskListError::OutOfBounds { action: "mark", len: 3 }
        );
        assert_eq!(
            list.unmark(3).unwrap_err(),
            TaskListError::OutOfBounds { action: "unmark", len: 3 }
        );
        assert!(list.mark(0).is_ok());
        assert!(list.mark(2).is_ok());
        assert!(list.iter().next().unwrap().is_done());
        assert!(!list.iter().nth(1).unwrap().is_done());
    }

    #[test]
    fn empty_list_is_checked_before_range() {
        let mut list = TaskList::new();
        assert_eq!(
            list.delete(5).unwrap_err(),
            TaskListError::EmptyList { action: "delete" }
        );
        assert_eq!(
            list.mark(0).unwrap_err(),
            TaskListError::EmptyList { action: "mark" }
        );
    }

    #[test]
    fn rejected_delete_leaves_list_unchanged() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();

        assert!(list.delete(2).is_err());
        assert_eq!(list, before);

        let removed = list.delete(0).unwrap();
        assert_eq!(removed.description(), "a");
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().unwrap().description(), "b");
    }

    #[test]
    fn out_of_bounds_message_names_range() {
        let err = TaskListError::OutOfBounds { action: "delete", len: 4 };
        assert_eq!(
            err.to_string(),
            "Error: Index must be between 1 and 4 for delete request."
        );
    }

    #[test]
    fn find_keeps_original_positions() {
        let list = list_of(&["apple", "Banana bread", "banana split"]);
        let found: Vec<_> = list
            .find("BANANA")
            .unwrap()
            .into_iter()
            .map(|(i, t)| (i, t.description()))
            .collect();

        assert_eq!(found, vec![(1, "Banana bread"), (2, "banana split")]);
    }

    #[test]
    fn find_rejects_empty_needle() {
        let list = list_of(&["a"]);
        assert_eq!(list.find("").unwrap_err(), TaskListError::EmptySearch);
    }

    #[test]
    fn render_numbers_from_one() {
        assert_eq!(TaskList::new().render(), EMPTY_LIST_MESSAGE);

        let list = list_of(&["a", "b"]);
        assert_eq!(
            list.render(),
            "Here are the tasks in your list:\n1.[T][ ] a\n2.[T][ ] b"
        );
    }
}
