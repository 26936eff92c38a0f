use serde::{Deserialize, Serialize};
use std::fmt;

/// Record or document identifier, passed through untouched.
///
/// Clients send either JSON numbers or strings; the same shape is echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Int(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Text(value)
    }
}

/// Decoded request payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    /// Raw document bytes
    pub bytes: Vec<u8>,
    /// MIME type declared by a `data:` prefix, if any
    pub declared_mime: Option<String>,
}

impl DecodedDocument {
    pub fn new(bytes: Vec<u8>, declared_mime: Option<String>) -> Self {
        Self {
            bytes,
            declared_mime,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Detected file type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDetectionResult {
    pub mime_type: String,
    pub extension: String,
}

impl TypeDetectionResult {
    pub fn new(mime_type: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            extension: extension.into(),
        }
    }

    /// Generic binary fallback
    pub fn octet_stream() -> Self {
        Self::new("application/octet-stream", "bin")
    }
}

/// Acceptance status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Accepted,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Accepted => "accepted",
            Status::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the acceptance table lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub status: Status,
    pub confidence_score: f64,
    pub reason: String,
}

/// Final acceptance verdict returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub record_id: Identifier,
    pub document_id: Identifier,
    pub status: Status,
    pub confidence_score: f64,
    pub reason: String,
}

impl Verdict {
    pub fn new(record_id: Identifier, document_id: Identifier, assessment: Assessment) -> Self {
        Self {
            record_id,
            document_id,
            status: assessment.status,
            confidence_score: assessment.confidence_score,
            reason: assessment.reason,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accepted
    }
}
