use super::{Command, CommandContext};
use crate::{new_task_id, timestamp_task_id, Task, TaskId};
use chrono::{DateTime, Utc};
use tasklist_core::TaskResult;

/// Create a new task from user input
pub struct AddTask {
    pub text: String,
    pub due_date: String,
}

impl AddTask {
    pub fn new(text: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            due_date: due_date.into(),
        }
    }
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> TaskResult<()> {
        let id = unique_id(context, new_task_id(), Utc::now());
        let task = Task::new(id, &self.text, &self.due_date)?;
        tracing::info!("Creating task: {} (id: {})", task.text, task.id);
        context.tasks.push(task);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.text.trim())
    }
}

/// Keeps `candidate` unless it is taken, then falls back to a timestamp id.
fn unique_id(context: &CommandContext, candidate: TaskId, now: DateTime<Utc>) -> TaskId {
    if context.contains(&candidate) {
        tracing::debug!("Task id {} already in use, using timestamp id", candidate);
        timestamp_task_id(now)
    } else {
        candidate
    }
}

/// Set a task's completion flag to an explicit state
pub struct SetTaskCompletion {
    pub id: String,
    pub completed: bool,
}

impl Command for SetTaskCompletion {
    fn execute(&self, context: &mut CommandContext) -> TaskResult<()> {
        match context.tasks.iter_mut().find(|t| t.id == self.id) {
            Some(task) => task.set_completed(self.completed),
            None => tracing::debug!("No task with id {} to update", self.id),
        }
        Ok(())
    }

    fn description(&self) -> String {
        if self.completed {
            format!("Complete task {}", self.id)
        } else {
            format!("Reopen task {}", self.id)
        }
    }
}

/// Flip a task's completion flag
pub struct ToggleTask {
    pub id: String,
}

impl Command for ToggleTask {
    fn execute(&self, context: &mut CommandContext) -> TaskResult<()> {
        match context.tasks.iter_mut().find(|t| t.id == self.id) {
            Some(task) => task.toggle(),
            None => tracing::debug!("No task with id {} to toggle", self.id),
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.id)
    }
}

/// Remove a task from the collection
pub struct DeleteTask {
    pub id: String,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> TaskResult<()> {
        let before = context.tasks.len();
        context.tasks.retain(|t| t.id != self.id);
        if context.tasks.len() == before {
            tracing::debug!("No task with id {} to delete", self.id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.id)
    }
}
