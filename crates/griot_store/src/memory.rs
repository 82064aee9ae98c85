//! In-memory post store for tests and dry runs.

use async_trait::async_trait;
use chrono::NaiveDate;
use griot_core::PostRecord;
use griot_error::GriotResult;
use griot_interface::PostStore;
use parking_lot::Mutex;

/// Post store held entirely in process memory.
///
/// Same append-and-query semantics as the file backend, without
/// durability. Useful for tests and `--dry-run` style invocations where
/// nothing should touch disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<PostRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with history, for resume scenarios.
    pub fn with_records(records: Vec<PostRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Total number of records across all dates.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// True when no records have been appended.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn records_for_date(&self, date: NaiveDate) -> GriotResult<Vec<PostRecord>> {
        Ok(self
            .records
            .lock()
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }

    async fn records_since(&self, since: NaiveDate) -> GriotResult<Vec<PostRecord>> {
        Ok(self
            .records
            .lock()
            .iter()
            .filter(|r| r.date >= since)
            .cloned()
            .collect())
    }

    async fn append(&self, record: &PostRecord) -> GriotResult<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }
}
