//! Request processing pipeline
//!
//! decode → detect → classify → persist. The verdict is computed before the
//! copy is written and does not depend on what happens to it.

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::classifier::{self, Identifier, TypeDetectionResult, Verdict};
use crate::decode::decode_payload;
use crate::error::Result;
use crate::storage::DocumentStore;

/// Incoming document
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentRequest {
    pub record_id: Identifier,
    pub document_id: Identifier,
    pub base64_data: String,
}

/// Everything known about a processed document
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub verdict: Verdict,
    pub detection: TypeDetectionResult,
    pub stored_at: PathBuf,
    pub size: usize,
}

/// Runs the pipeline against a document store
#[derive(Clone)]
pub struct DocumentProcessor {
    store: Arc<dyn DocumentStore>,
}

impl DocumentProcessor {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    #[instrument(skip_all, fields(record_id = %request.record_id, document_id = %request.document_id))]
    pub async fn process(&self, request: DocumentRequest) -> Result<ProcessedDocument> {
        info!("🚀 Processing document request");

        let document = decode_payload(&request.base64_data)?;

        let (detection, verdict) =
            classifier::evaluate(request.record_id, request.document_id, &document);

        // Rejected documents are kept as well
        let stored_at = self
            .store
            .save(
                &document.bytes,
                &verdict.record_id,
                &verdict.document_id,
                &detection.extension,
            )
            .await?;

        info!(
            status = %verdict.status,
            confidence_score = verdict.confidence_score,
            reason = %verdict.reason,
            mime_type = %detection.mime_type,
            extension = %detection.extension,
            size = document.len(),
            saved_to = %stored_at.display(),
            "📤 Sending response"
        );

        Ok(ProcessedDocument {
            verdict,
            detection,
            stored_at,
            size: document.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Status;
    use crate::error::DocError;
    use crate::storage::TempFileStore;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn save(
            &self,
            _data: &[u8],
            _record_id: &Identifier,
            _document_id: &Identifier,
            _extension: &str,
        ) -> Result<PathBuf> {
            Err(DocError::Storage("disk full".to_string()))
        }

        async fn remove(&self, name_or_path: &str) -> Result<PathBuf> {
            Err(DocError::NotFound(name_or_path.to_string()))
        }
    }

    fn request(data: &str) -> DocumentRequest {
        DocumentRequest {
            record_id: Identifier::Int(101),
            document_id: "doc-9".into(),
            base64_data: data.to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_accepted_pdf() {
        let dir = TempDir::new().unwrap();
        let processor = DocumentProcessor::new(Arc::new(TempFileStore::new(dir.path())));

        let processed = processor.process(request("JVBERi0xLjQK")).await.unwrap();

        assert_eq!(processed.verdict.status, Status::Accepted);
        assert_eq!(processed.verdict.reason, "PDF document - Accepted");
        assert_eq!(processed.detection.extension, "pdf");
        assert_eq!(processed.size, 9);
        assert_eq!(std::fs::read(&processed.stored_at).unwrap(), b"%PDF-1.4\n");
    }

    #[tokio::test]
    async fn test_process_persists_rejected() {
        let dir = TempDir::new().unwrap();
        let processor = DocumentProcessor::new(Arc::new(TempFileStore::new(dir.path())));

        // "<?php echo 1;"
        let processed = processor.process(request("PD9waHAgZWNobyAxOw==")).await.unwrap();

        assert_eq!(processed.verdict.status, Status::Rejected);
        assert_eq!(processed.detection.mime_type, "application/x-httpd-php");
        assert!(processed.stored_at.exists());
        assert_eq!(
            processed.stored_at.extension().and_then(|e| e.to_str()),
            Some("php")
        );
    }

    #[tokio::test]
    async fn test_process_uses_declared_data_url_type() {
        let dir = TempDir::new().unwrap();
        let processor = DocumentProcessor::new(Arc::new(TempFileStore::new(dir.path())));

        let processed = processor
            .process(request("data:text/csv;base64,YSxiCjEsMgo="))
            .await
            .unwrap();

        assert_eq!(processed.detection.mime_type, "text/csv");
        assert_eq!(processed.verdict.confidence_score, 0.75);
    }

    #[tokio::test]
    async fn test_process_invalid_input_skips_storage() {
        let processor = DocumentProcessor::new(Arc::new(FailingStore));

        let err = processor.process(request("%%%")).await.unwrap_err();
        assert!(err.is_invalid_input());

        let err = processor.process(request("")).await.unwrap_err();
        assert!(matches!(err, DocError::EmptyPayload));
    }

    #[tokio::test]
    async fn test_process_storage_failure_surfaces() {
        let processor = DocumentProcessor::new(Arc::new(FailingStore));

        let err = processor.process(request("JVBERi0xLjQK")).await.unwrap_err();
        assert!(matches!(err, DocError::Storage(_)));
        assert!(!err.is_invalid_input());
    }
}
