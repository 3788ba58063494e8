use tasklist_core::TaskResult;

pub mod task_commands;

pub use task_commands::*;

/// Trait for domain commands that mutate the task collection.
/// Commands represent intent and can be executed against any loaded collection.
pub trait Command: Send + Sync {
    /// Execute this command, mutating the collection
    fn execute(&self, context: &mut CommandContext) -> TaskResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub tasks: &'a mut Vec<crate::Task>,
}

impl<'a> CommandContext<'a> {
    pub fn new(tasks: &'a mut Vec<crate::Task>) -> Self {
        Self { tasks }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }
}
