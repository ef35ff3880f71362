//! Command execution
//!
//! Applies a [`Command`] to a [`TaskList`] and describes the outcome.
//! No I/O happens here; the caller prints the message and persists the
//! list when the result asks for it.

use super::command::Command;
use super::task::{Task, TaskError};
use super::task_list::TaskList;

pub const FAREWELL_MESSAGE: &str = "Bye. Hope to see you again soon!";

/// Outcome of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Text to show the user
    pub message: String,
    /// The task list was changed
    pub mutated: bool,
    /// The session should end
    pub exit: bool,
}

impl CommandResult {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mutated: false,
            exit: false,
        }
    }

    fn mutation(message: impl Into<String>) -> Self {
        Self {
            mutated: true,
            ..Self::message(message)
        }
    }

    fn exit(message: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::message(message)
        }
    }
}

/// Executes a command against the task list
pub fn execute(command: &Command, tasks: &mut TaskList) -> CommandResult {
    match command {
        Command::Exit => CommandResult::exit(FAREWELL_MESSAGE),
        Command::List => CommandResult::message(tasks.render()),
        Command::Find(needle) => find(tasks, needle),

        Command::Delete(index) => match tasks.delete(*index) {
            Ok(removed) => CommandResult::mutation(format!(
                "Noted. I've removed this task:\n{}\nNow you have {} tasks in the list.",
                removed,
                tasks.len()
            )),
            Err(e) => CommandResult::message(e.to_string()),
        },
        Command::Mark(index) => match tasks.mark(*index) {
            Ok(task) => {
                CommandResult::mutation(format!("Nice! I've marked this task as done:\n{}", task))
            }
            Err(e) => CommandResult::message(e.to_string()),
        },
        Command::Unmark(index) => match tasks.unmark(*index) {
            Ok(task) => CommandResult::mutation(format!(
                "OK, I've marked this task as not done yet:\n{}",
                task
            )),
            Err(e) => CommandResult::message(e.to_string()),
        },

        Command::AddTodo(description) => add(tasks, Task::todo(description)),
        Command::AddDeadline { description, due } => add(tasks, Task::deadline(description, *due)),
        Command::AddEvent {
            description,
            start,
            end,
        } => add(tasks, Task::event(description, *start, *end)),

        Command::Incorrect(message) | Command::Unknown(message) => {
            CommandResult::message(message.clone())
        }
    }
}

fn add(tasks: &mut TaskList, task: Result<Task, TaskError>) -> CommandResult {
    match task {
        Ok(task) => {
            let rendered = tasks.add(task).to_string();
            CommandResult::mutation(format!(
                "Got it. I've added this task:\n{}\nNow you have {} tasks in the list.",
                rendered,
                tasks.len()
            ))
        }
        Err(e) => CommandResult::message(e.to_string()),
    }
}

fn find(tasks: &TaskList, needle: &str) -> CommandResult {
    let matches = match tasks.find(needle) {
        Ok(matches) => matches,
        Err(e) => return CommandResult::message(e.to_string()),
    };

    if matches.is_empty() {
        return CommandResult::message("No matching tasks found.");
    }

    let lines: Vec<String> = matches
        .iter()
        .map(|(i, task)| format!("{}.{}", i + 1, task))
        .collect();
    CommandResult::message(format!("Here are the matching tasks:\n{}", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task_list::EMPTY_LIST_MESSAGE;

    fn run(tasks: &mut TaskList, line: &str) -> CommandResult {
        execute(&Command::parse(line), tasks)
    }

    fn three_tasks() -> TaskList {
        let mut tasks = TaskList::new();
        run(&mut tasks, "todo Apple pie");
        run(&mut tasks, "todo buy bread");
        run(&mut tasks, "deadline return BREAD maker /by 2/12/2019 1800");
        tasks
    }

    #[test]
    fn add_confirms_with_new_size() {
        let mut tasks = TaskList::new();
        let result = run(&mut tasks, "todo read book");

        assert!(result.mutated);
        assert!(!result.exit);
        assert_eq!(
            result.message,
            "Got it. I've added this task:\n[T][ ] read book\nNow you have 1 tasks in the list."
        );
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn add_event_renders_range() {
        let mut tasks = TaskList::new();
        let result = run(&mut tasks, "event meeting /from 2/12/2019 /to 3/12/2019 1830");
        assert!(result.message.contains(
            "[E][ ] meeting (from: 02 Dec 2019, 12:00AM to: 03 Dec 2019, 6:30PM)"
        ));
    }

    #[test]
    fn rejected_todo_leaves_list_unchanged() {
        let mut tasks = three_tasks();
        let result = run(&mut tasks, "todo ");

        assert!(!result.mutated);
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn rejected_event_is_not_added() {
        let mut tasks = TaskList::new();
        let result = run(&mut tasks, "event x /from 2/1/2020 /to 1/1/2020");

        assert_eq!(result.message, "Error: /to date cannot be before /from date for Event task");
        assert!(tasks.is_empty());
    }

    #[test]
    fn list_empty_and_populated() {
        let mut tasks = TaskList::new();
        assert_eq!(run(&mut tasks, "list").message, EMPTY_LIST_MESSAGE);

        let mut tasks = three_tasks();
        let message = run(&mut tasks, "list").message;
        assert!(message.starts_with("Here are the tasks in your list:\n1.[T][ ] Apple pie\n"));
        assert!(message.ends_with("3.[D][ ] return BREAD maker (by: 02 Dec 2019, 6:00PM)"));
    }

    #[test]
    fn index_commands_accept_one_to_n() {
        let mut tasks = three_tasks();

        for bad in ["mark 0", "mark 4", "unmark 0", "unmark 4", "delete 0", "delete 4"] {
            let result = run(&mut tasks, bad);
            assert!(!result.mutated, "{bad}");
            assert!(result.message.contains("between 1 and 3"), "{bad}: {}", result.message);
        }
        for bad in ["mark x", "unmark x", "delete x"] {
            let result = run(&mut tasks, bad);
            assert!(result.message.contains("valid index"), "{bad}");
        }

        let result = run(&mut tasks, "mark 3");
        assert!(result.mutated);
        assert!(result.message.starts_with("Nice! I've marked this task as done:\n[D][X]"));

        let result = run(&mut tasks, "unmark 3");
        assert!(result.message.starts_with("OK, I've marked this task as not done yet:\n[D][ ]"));

        let result = run(&mut tasks, "mark 1");
        assert!(result.mutated);
        let result = run(&mut tasks, "delete 1");
        assert_eq!(
            result.message,
            "Noted. I've removed this task:\n[T][X] Apple pie\nNow you have 2 tasks in the list."
        );
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn index_commands_on_empty_list() {
        let mut tasks = TaskList::new();
        let result = run(&mut tasks, "mark 1");
        assert_eq!(result.message, "Error: Task list is empty. No tasks to mark.");
        assert!(!result.mutated);
    }

    #[test]
    fn find_keeps_original_positions() {
        let mut tasks = three_tasks();
        let result = run(&mut tasks, "find bread");

        assert!(!result.mutated);
        assert_eq!(
            result.message,
            "Here are the matching tasks:\n2.[T][ ] buy bread\n3.[D][ ] return BREAD maker (by: 02 Dec 2019, 6:00PM)"
        );
    }

    #[test]
    fn find_no_matches_and_empty() {
        let mut tasks = three_tasks();
        assert_eq!(run(&mut tasks, "find cake").message, "No matching tasks found.");
        assert_eq!(
            run(&mut tasks, "find").message,
            "Error: Cannot find an empty description."
        );
    }

    #[test]
    fn exit_signals_termination() {
        let mut tasks = TaskList::new();
        let result = run(&mut tasks, "bye");
        assert!(result.exit);
        assert!(!result.mutated);
        assert_eq!(result.message, FAREWELL_MESSAGE);
    }

    #[test]
    fn unknown_and_incorrect_pass_message_through() {
        let mut tasks = TaskList::new();
        assert_eq!(
            run(&mut tasks, "dance").message,
            "Sorry, I don't know what that means."
        );
        assert_eq!(
            run(&mut tasks, "mark abc").message,
            "Please enter a valid index for mark request."
        );
    }
}
