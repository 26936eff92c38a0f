//! Allow-list of accepted document types

use tracing::debug;

use super::types::{Assessment, Status};

/// Confidence assigned to every type outside the allow-list
pub const REJECTED_CONFIDENCE: f64 = 0.3;

/// An accepted MIME type with its fixed score
#[derive(Debug, Clone, Copy)]
pub struct AcceptedType {
    pub mime_type: &'static str,
    pub confidence_score: f64,
    pub reason: &'static str,
}

pub static ACCEPTED_TYPES: &[AcceptedType] = &[
    AcceptedType {
        mime_type: "application/pdf",
        confidence_score: 0.95,
        reason: "PDF document - Accepted",
    },
    AcceptedType {
        mime_type: "image/jpeg",
        confidence_score: 0.85,
        reason: "JPEG image - Accepted",
    },
    AcceptedType {
        mime_type: "image/png",
        confidence_score: 0.85,
        reason: "PNG image - Accepted",
    },
    AcceptedType {
        mime_type: "image/gif",
        confidence_score: 0.80,
        reason: "GIF image - Accepted",
    },
    AcceptedType {
        mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        confidence_score: 0.90,
        reason: "DOCX document - Accepted",
    },
    AcceptedType {
        mime_type: "application/msword",
        confidence_score: 0.85,
        reason: "DOC document - Accepted",
    },
    AcceptedType {
        mime_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        confidence_score: 0.90,
        reason: "XLSX spreadsheet - Accepted",
    },
    AcceptedType {
        mime_type: "application/vnd.ms-excel",
        confidence_score: 0.85,
        reason: "XLS spreadsheet - Accepted",
    },
    AcceptedType {
        mime_type: "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        confidence_score: 0.90,
        reason: "PPTX presentation - Accepted",
    },
    AcceptedType {
        mime_type: "application/vnd.ms-powerpoint",
        confidence_score: 0.85,
        reason: "PPT presentation - Accepted",
    },
    AcceptedType {
        mime_type: "text/plain",
        confidence_score: 0.70,
        reason: "Text file - Accepted",
    },
    AcceptedType {
        mime_type: "application/json",
        confidence_score: 0.75,
        reason: "JSON file - Accepted",
    },
    AcceptedType {
        mime_type: "application/xml",
        confidence_score: 0.75,
        reason: "XML file - Accepted",
    },
    AcceptedType {
        mime_type: "text/html",
        confidence_score: 0.70,
        reason: "HTML file - Accepted",
    },
    AcceptedType {
        mime_type: "text/csv",
        confidence_score: 0.75,
        reason: "CSV file - Accepted",
    },
];

/// Look up an accepted type by exact MIME string
pub fn lookup(mime_type: &str) -> Option<&'static AcceptedType> {
    ACCEPTED_TYPES.iter().find(|t| t.mime_type == mime_type)
}

/// Score a MIME type against the allow-list
pub fn classify(mime_type: &str) -> Assessment {
    match lookup(mime_type) {
        Some(accepted) => {
            debug!("✅ Document accepted: {}", accepted.reason);
            Assessment {
                status: Status::Accepted,
                confidence_score: accepted.confidence_score,
                reason: accepted.reason.to_string(),
            }
        }
        None => {
            let reason = format!("File type '{}' not in accepted list - Rejected", mime_type);
            debug!("❌ Document rejected: {}", reason);
            Assessment {
                status: Status::Rejected,
                confidence_score: REJECTED_CONFIDENCE,
                reason,
            }
        }
    }
}
