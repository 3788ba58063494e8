use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{Serializer, TaskStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tasklist_core::TaskResult;
use tasklist_domain::Task;
use tokio::sync::Mutex;

/// JSON file-based task slot.
/// The file holds a bare JSON array of tasks; no envelope, no version.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    // Shared by clones so they serialize against each other
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[async_trait::async_trait]
impl TaskStore for JsonFileStore {
    async fn load_all(&self) -> Vec<Task> {
        if !self.exists() {
            tracing::debug!("No task file at {}", self.path.display());
            return Vec::new();
        }

        let bytes = match AtomicWriter::read_all(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to read tasks from {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match JsonSerializer.deserialize(&bytes) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!(
                    "Discarding unreadable task data in {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn save_all(&self, tasks: &[Task]) -> TaskResult<()> {
        let bytes = JsonSerializer.serialize(tasks)?;
        AtomicWriter::write_atomic(&self.path, &bytes).await?;
        tracing::info!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.write_lock
    }
}
