use std::path::Path;
use tasklist_core::TaskResult;
use tokio::fs;

/// Atomic file writer that prevents torn task files.
/// Uses write-to-temp-file → rename so readers only ever see a whole blob.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating parent directories as needed.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TaskResult<()> {
        // Temp file must live on the same filesystem for the rename
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(temp_file.path(), data).await?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub async fn read_all(path: &Path) -> TaskResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
