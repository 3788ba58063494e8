use crate::serialization::JsonSerializer;
use crate::traits::{Serializer, TaskStore};
use tasklist_core::TaskResult;
use tasklist_domain::Task;
use tokio::sync::Mutex;

/// In-process task slot.
///
/// Keeps the serialized bytes rather than the tasks so reads go through the
/// same decode path as [`crate::JsonFileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Vec<u8>>>,
    write_lock: Mutex<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: &[Task]) -> TaskResult<Self> {
        Ok(Self::with_raw(JsonSerializer.serialize(tasks)?))
    }

    pub fn with_raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Mutex::new(Some(bytes.into())),
            write_lock: Mutex::new(()),
        }
    }

    /// Current raw slot contents, `None` if never written.
    pub async fn raw(&self) -> Option<Vec<u8>> {
        self.slot.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl TaskStore for MemoryStore {
    async fn load_all(&self) -> Vec<Task> {
        let slot = self.slot.lock().await;
        match slot.as_deref() {
            None => Vec::new(),
            Some(bytes) => JsonSerializer.deserialize(bytes).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable in-memory task data: {}", e);
                Vec::new()
            }),
        }
    }

    async fn save_all(&self, tasks: &[Task]) -> TaskResult<()> {
        let bytes = JsonSerializer.serialize(tasks)?;
        *self.slot.lock().await = Some(bytes);
        tracing::debug!("Saved {} tasks in memory", tasks.len());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.write_lock
    }
}
