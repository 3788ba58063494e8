use async_trait::async_trait;
use tasklist_core::TaskResult;
use tasklist_domain::commands::{Command, CommandContext};
use tasklist_domain::Task;
use tokio::sync::Mutex;

/// Trait for the persistent task slot.
/// Implementations hold the whole collection as one serialized blob.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Load every task. Missing or unreadable data yields an empty list;
    /// this never fails.
    async fn load_all(&self) -> Vec<Task>;

    /// Overwrite the slot with exactly these tasks.
    async fn save_all(&self, tasks: &[Task]) -> TaskResult<()>;

    /// Human-readable location of the slot, for logs.
    fn location(&self) -> String;

    /// Held across every read-modify-write of the slot in this process.
    fn write_lock(&self) -> &Mutex<()>;

    async fn is_empty(&self) -> bool {
        self.load_all().await.is_empty()
    }

    /// Read all, run the command in memory, write all.
    /// Nothing is written when the command fails.
    async fn apply(&self, command: &dyn Command) -> TaskResult<Vec<Task>> {
        let _guard = self.write_lock().lock().await;
        let mut tasks = self.load_all().await;
        {
            let mut ctx = CommandContext::new(&mut tasks);
            command.execute(&mut ctx)?;
        }
        self.save_all(&tasks).await?;
        tracing::info!("{} ({})", command.description(), self.location());
        Ok(tasks)
    }

    /// Writes `tasks` only if the slot holds no tasks. Returns whether it
    /// wrote.
    async fn save_if_empty(&self, tasks: &[Task]) -> TaskResult<bool> {
        let _guard = self.write_lock().lock().await;
        if !self.load_all().await.is_empty() {
            return Ok(false);
        }
        self.save_all(tasks).await?;
        Ok(true)
    }
}

/// Trait for encoding the task collection into the slot's bytes.
pub trait Serializer: Send + Sync {
    fn serialize(&self, tasks: &[Task]) -> TaskResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> TaskResult<Vec<Task>>;
}
