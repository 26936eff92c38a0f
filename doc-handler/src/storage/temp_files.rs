use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{info, warn};

use super::{DocumentStore, IdGenerator, SystemIdGenerator};
use crate::classifier::Identifier;
use crate::error::{DocError, Result};

/// Flat directory of document copies.
///
/// File names follow `record_{record}_doc_{document}_{timestamp}_{id}.{ext}`.
pub struct TempFileStore {
    base_path: PathBuf,
    ids: Arc<dyn IdGenerator>,
}

impl TempFileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_id_generator(base_path, Arc::new(SystemIdGenerator))
    }

    pub fn with_id_generator(base_path: impl Into<PathBuf>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            base_path: base_path.into(),
            ids,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Build the file name for a new document copy
    pub fn file_name(
        &self,
        record_id: &Identifier,
        document_id: &Identifier,
        extension: &str,
    ) -> String {
        let extension = match sanitize(extension) {
            ext if ext.is_empty() => "bin".to_string(),
            ext => ext,
        };

        format!(
            "record_{}_doc_{}_{}_{}.{}",
            sanitize(&record_id.to_string()),
            sanitize(&document_id.to_string()),
            self.ids.timestamp(),
            self.ids.unique_id(),
            extension
        )
    }

    async fn ensure_dir(&self) -> Result<()> {
        if !fs::try_exists(&self.base_path).await.unwrap_or(false) {
            fs::create_dir_all(&self.base_path).await.map_err(|e| {
                DocError::Storage(format!(
                    "Failed to create directory {:?}: {}",
                    self.base_path, e
                ))
            })?;
        }
        Ok(())
    }

    /// Resolve `name_or_path` to a file directly inside the store directory
    async fn resolve(&self, name_or_path: &str) -> Option<PathBuf> {
        let candidate = Path::new(name_or_path);
        let candidate = if candidate.is_absolute() || candidate.parent() != Some(Path::new("")) {
            candidate.to_path_buf()
        } else {
            self.base_path.join(candidate)
        };

        let file_name = candidate.file_name()?;
        let parent = fs::canonicalize(candidate.parent()?).await.ok()?;
        let base = fs::canonicalize(&self.base_path).await.ok()?;

        (parent == base).then(|| base.join(file_name))
    }
}

#[async_trait]
impl DocumentStore for TempFileStore {
    async fn save(
        &self,
        data: &[u8],
        record_id: &Identifier,
        document_id: &Identifier,
        extension: &str,
    ) -> Result<PathBuf> {
        self.ensure_dir().await?;

        let path = self
            .base_path
            .join(self.file_name(record_id, document_id, extension));

        fs::write(&path, data).await.map_err(|e| {
            DocError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!("💾 File saved to: {}", path.display());
        info!("📁 File size: {} bytes", data.len());

        Ok(path)
    }

    async fn remove(&self, name_or_path: &str) -> Result<PathBuf> {
        let resolved = match self.resolve(name_or_path).await {
            Some(path) => fs::metadata(&path)
                .await
                .ok()
                .filter(|meta| meta.is_file())
                .map(|_| path),
            None => None,
        };

        let path = match resolved {
            Some(path) => path,
            None => {
                warn!("Cleanup refused for {}", name_or_path);
                return Err(DocError::NotFound(name_or_path.to_string()));
            }
        };

        fs::remove_file(&path).await?;
        info!("🧹 Deleted file: {}", path.display());

        Ok(path)
    }
}

/// Keep only characters that are safe in a single path component
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}
