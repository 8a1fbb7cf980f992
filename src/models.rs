//! Task list data structures

use serde::{Deserialize, Serialize};

/// A single checklist item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            done: false,
        }
    }
}

/// The full checklist. Persisted as a bare array of tasks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Append a task. Blank input is ignored.
    pub fn add(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.tasks.push(Task::new(text));
    }

    /// Flip the done flag of the task at `index`
    pub fn toggle(&mut self, index: usize) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.done = !task.done;
        }
    }

    /// Delete the task at `index`
    pub fn remove(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
        }
    }

    /// Swap the task at `index` with the one above it
    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.tasks.len() {
            self.tasks.swap(index, index - 1);
        }
    }

    /// Swap the task at `index` with the one below it
    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.tasks.len() {
            self.tasks.swap(index, index + 1);
        }
    }

    /// Number of completed tasks
    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
