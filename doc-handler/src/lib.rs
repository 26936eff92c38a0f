//! doc-handler: document intake service
//!
//! Accepts base64-encoded documents over HTTP, sniffs their file type,
//! scores them against an allow-list of accepted document types and keeps a
//! local copy of every payload.
//!
//! # Features
//!
//! - **Classifier**: pure type detection from `data:` prefixes, magic bytes
//!   and textual prefixes, with a fixed acceptance table
//! - **Storage**: flat temp directory, one file per processed document
//! - **API**: axum router with permissive CORS, request tracing and timeouts
//!
//! # Example
//!
//! ```
//! use doc_handler::classifier::{classify, detect_type, Status};
//!
//! let detection = detect_type(b"%PDF-1.7\n", "JVBERi0xLjcK");
//! assert_eq!(detection.mime_type, "application/pdf");
//!
//! let assessment = classify(&detection.mime_type);
//! assert_eq!(assessment.status, Status::Accepted);
//! assert_eq!(assessment.confidence_score, 0.95);
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: type detection and acceptance scoring
//! - [`decode`]: base64 / data URL payload decoding
//! - [`storage`]: persistence of document copies
//! - [`processor`]: the decode → classify → persist pipeline
//! - [`api`]: HTTP endpoints
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod api;
pub mod classifier;
pub mod config;
pub mod decode;
pub mod error;
pub mod processor;
pub mod storage;

// Re-export commonly used types
pub use api::ApiServer;
pub use config::Config;
pub use error::{DocError, Result};
pub use processor::{DocumentProcessor, DocumentRequest};
