//! JSON-lines file backend for post history.

use async_trait::async_trait;
use chrono::NaiveDate;
use griot_core::PostRecord;
use griot_error::{GriotResult, StoreError, StoreErrorKind};
use griot_interface::PostStore;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Append-only post log stored as one JSON record per line.
///
/// Each [`append`](PostStore::append) writes a single line and fsyncs before
/// returning, so a record is durable once the call succeeds. Queries re-read
/// the file on every call: the file, not process memory, is the source of
/// truth, which lets independently scheduled invocations share one log.
///
/// # Examples
///
/// ```no_run
/// use griot_store::JsonFileStore;
///
/// let store = JsonFileStore::new("/var/griot/post_log.jsonl").unwrap();
/// ```
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a file store at the given path.
    ///
    /// Creates the parent directory if missing. The log file itself is
    /// created lazily on first append; a missing file reads as empty
    /// history.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    #[tracing::instrument]
    pub fn new(path: impl Into<PathBuf> + std::fmt::Debug) -> GriotResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::unavailable(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        tracing::debug!(path = %path.display(), "Opened post log");
        Ok(Self { path })
    }

    /// Path of the backing log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> GriotResult<Vec<PostRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::new(StoreErrorKind::Read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let mut records = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: PostRecord = serde_json::from_str(line).map_err(|e| {
                StoreError::new(StoreErrorKind::Corrupt(format!(
                    "{} line {}: {}",
                    self.path.display(),
                    number + 1,
                    e
                )))
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn records_for_date(&self, date: NaiveDate) -> GriotResult<Vec<PostRecord>> {
        let records = self.read_all().await?;
        Ok(records.into_iter().filter(|r| r.date == date).collect())
    }

    async fn records_since(&self, since: NaiveDate) -> GriotResult<Vec<PostRecord>> {
        let records = self.read_all().await?;
        Ok(records.into_iter().filter(|r| r.date >= since).collect())
    }

    #[tracing::instrument(skip(self, record), fields(date = %record.date, seq = record.sequence_number))]
    async fn append(&self, record: &PostRecord) -> GriotResult<()> {
        let mut line = serde_json::to_string(record).map_err(|e| {
            StoreError::new(StoreErrorKind::Encode(format!("sequence {}: {}", record.sequence_number, e)))
        })?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| StoreError::unavailable(format!("{}: {}", self.path.display(), e)))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| StoreError::unavailable(format!("{}: {}", self.path.display(), e)))?;

        // Durable before return: a record the caller believes persisted
        // must survive a crash immediately after this call.
        file.sync_all()
            .await
            .map_err(|e| StoreError::unavailable(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), "Appended post record");
        Ok(())
    }
}
