//! Document persistence
//!
//! Every processed document is written somewhere, accepted or not. The
//! classifier never depends on the outcome of a write.

pub mod temp_files;

use async_trait::async_trait;
use chrono::Local;
use std::path::PathBuf;

use crate::classifier::Identifier;
use crate::error::Result;

pub use temp_files::TempFileStore;

/// Source of the timestamp and unique suffix used in stored file names
pub trait IdGenerator: Send + Sync {
    /// Local timestamp formatted as `%Y%m%d_%H%M%S`
    fn timestamp(&self) -> String;

    /// Short random identifier
    fn unique_id(&self) -> String;
}

/// Wall clock + UUIDv4
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdGenerator;

impl IdGenerator for SystemIdGenerator {
    fn timestamp(&self) -> String {
        Local::now().format("%Y%m%d_%H%M%S").to_string()
    }

    fn unique_id(&self) -> String {
        let mut id = uuid::Uuid::new_v4().to_string();
        id.truncate(8);
        id
    }
}

/// Storage backend for processed documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `data` and return where it was written
    async fn save(
        &self,
        data: &[u8],
        record_id: &Identifier,
        document_id: &Identifier,
        extension: &str,
    ) -> Result<PathBuf>;

    /// Delete a stored document by file name or full path
    async fn remove(&self, name_or_path: &str) -> Result<PathBuf>;
}
