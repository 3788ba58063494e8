//! One-time population of an empty task slot from a remote list.

use crate::traits::TaskStore;
use async_trait::async_trait;
use serde::Deserialize;
use tasklist_core::TaskResult;
use tasklist_domain::Task;

/// Item shape returned by the remote list endpoint.
/// Fields beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTodo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl RemoteTodo {
    pub fn into_task(self) -> Task {
        Task {
            id: self.id.to_string(),
            text: self.title,
            due_date: String::new(),
            completed: self.completed,
        }
    }
}

/// Source of the seed batch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn fetch(&self) -> TaskResult<Vec<RemoteTodo>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The slot already had tasks, nothing written.
    Skipped,
    /// The slot was filled with this many tasks. Zero means the batch had
    /// no usable items and nothing was written.
    Seeded(usize),
    /// The fetch failed; the slot is untouched.
    Failed(String),
}

/// Fills the store from `source` if, and only if, it is empty.
///
/// Emptiness is checked again after the fetch, under the store's write lock,
/// so a task added in this process while the request was in flight is never
/// overwritten. Remote items whose title is blank are dropped; a batch with
/// nothing usable writes nothing and reports `Seeded(0)`. Failures are logged
/// and reported as [`SeedOutcome::Failed`], never raised.
pub async fn seed_if_empty(store: &dyn TaskStore, source: &dyn SeedSource) -> SeedOutcome {
    if !store.is_empty().await {
        tracing::debug!("Store {} already has tasks, skipping seed", store.location());
        return SeedOutcome::Skipped;
    }

    let items = match source.fetch().await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Seed fetch failed: {}", e);
            return SeedOutcome::Failed(e.to_string());
        }
    };

    let fetched = items.len();
    let tasks: Vec<Task> = items
        .into_iter()
        .map(RemoteTodo::into_task)
        .filter(|t| !t.text.trim().is_empty())
        .collect();
    if tasks.len() < fetched {
        tracing::debug!(
            "Dropped {} seed items with blank titles",
            fetched - tasks.len()
        );
    }
    if tasks.is_empty() {
        return SeedOutcome::Seeded(0);
    }

    match store.save_if_empty(&tasks).await {
        Ok(true) => {
            tracing::info!("Seeded {} tasks into {}", tasks.len(), store.location());
            SeedOutcome::Seeded(tasks.len())
        }
        Ok(false) => {
            tracing::info!("Store was filled while seeding, discarding fetched batch");
            SeedOutcome::Skipped
        }
        Err(e) => {
            tracing::warn!("Failed to persist seeded tasks: {}", e);
            SeedOutcome::Failed(e.to_string())
        }
    }
}
