use std::path::Path;
use tasklist_core::{TaskError, TaskResult};
use tasklist_domain::commands::Command;
use tasklist_domain::Task;
use tasklist_persistence::{JsonFileStore, TaskStore};

/// The data file a scripted subcommand works against.
pub struct CliContext {
    store: JsonFileStore,
}

impl CliContext {
    pub fn open(path: &Path) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.store.load_all().await
    }

    /// Fails with `NotFound` unless a task with `id` is stored.
    pub async fn require(&self, id: &str) -> TaskResult<Task> {
        self.tasks()
            .await
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(format!("task {}", id)))
    }

    pub async fn execute(&self, command: &dyn Command) -> TaskResult<Vec<Task>> {
        tracing::debug!("CLI: {}", command.description());
        self.store.apply(command).await
    }
}
