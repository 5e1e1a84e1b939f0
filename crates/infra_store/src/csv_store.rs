//! Append-only sinks for pricing records.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::record::PricingRecord;

/// Destination for pricing records.
///
/// The pipeline appends one record per run; implementations decide where
/// the row lands.
pub trait PriceSink {
    /// Appends a single record.
    fn append(&mut self, record: &PricingRecord) -> Result<(), StoreError>;
}

/// CSV-file sink.
///
/// Appends rows to the configured file, writing the header exactly once
/// (when the file is new or empty). Existing rows are never truncated or
/// rewritten.
///
/// # Examples
/// ```no_run
/// use infra_store::{CsvStore, PriceSink};
///
/// let mut store = CsvStore::new("option_data.csv");
/// # let record: infra_store::PricingRecord = unimplemented!();
/// store.append(&record)?;
/// # Ok::<(), infra_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Creates a sink writing to `path`. The file is created lazily on
    /// the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> bool {
        match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }
}

impl PriceSink for CsvStore {
    fn append(&mut self, record: &PricingRecord) -> Result<(), StoreError> {
        let needs_header = self.needs_header();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }
}

/// In-memory sink for pipeline tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<PricingRecord>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the records appended so far, in order.
    pub fn records(&self) -> &[PricingRecord] {
        &self.records
    }
}

impl PriceSink for MemorySink {
    fn append(&mut self, record: &PricingRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }
}
