//! Document classification
//!
//! Sniffs the file type of a decoded payload and scores it against the
//! allow-list. Everything here is pure: no I/O, no shared state, and no
//! error paths. Unrecognized input degrades to `application/octet-stream`
//! and a rejected verdict.

pub mod acceptance;
pub mod detect;
pub mod types;

pub use acceptance::classify;
pub use detect::{detect_document, detect_type};
pub use types::{
    Assessment, DecodedDocument, Identifier, Status, TypeDetectionResult, Verdict,
};

/// Detect the type of `document` and build the verdict for it.
///
/// A MIME type declared by a `data:` prefix takes precedence over the bytes.
pub fn evaluate(
    record_id: Identifier,
    document_id: Identifier,
    document: &DecodedDocument,
) -> (TypeDetectionResult, Verdict) {
    let detection = detect_document(document);
    let assessment = classify(&detection.mime_type);
    let verdict = Verdict::new(record_id, document_id, assessment);
    (detection, verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_pdf() {
        let doc = DecodedDocument::new(b"%PDF-1.4\n%\xe2\xe3".to_vec(), None);
        let (detection, verdict) = evaluate(Identifier::Int(7), "D-1".into(), &doc);

        assert_eq!(detection.extension, "pdf");
        assert_eq!(verdict.record_id, Identifier::Int(7));
        assert_eq!(verdict.document_id, Identifier::Text("D-1".to_string()));
        assert_eq!(verdict.status, Status::Accepted);
        assert_eq!(verdict.confidence_score, 0.95);
    }

    #[test]
    fn test_evaluate_unknown_binary_rejected() {
        let doc = DecodedDocument::new(vec![0x00, 0x01, 0x02, 0x03, 0x04], None);
        let (detection, verdict) = evaluate(Identifier::Int(1), Identifier::Int(2), &doc);

        assert_eq!(detection, TypeDetectionResult::octet_stream());
        assert_eq!(verdict.status, Status::Rejected);
        assert_eq!(verdict.confidence_score, 0.3);
        assert_eq!(
            verdict.reason,
            "File type 'application/octet-stream' not in accepted list - Rejected"
        );
    }

    #[test]
    fn test_evaluate_zip_family_labeled_docx() {
        let doc = DecodedDocument::new(b"PK\x03\x04[Content_Types].xml".to_vec(), None);
        let (detection, verdict) = evaluate(Identifier::Int(1), Identifier::Int(1), &doc);

        assert_eq!(detection.extension, "docx");
        assert_eq!(verdict.reason, "DOCX document - Accepted");
    }

    #[test]
    fn test_evaluate_prefers_declared_mime() {
        let doc = DecodedDocument::new(b"%PDF-1.4".to_vec(), Some("image/png".to_string()));
        let (detection, verdict) = evaluate(Identifier::Int(1), Identifier::Int(1), &doc);

        assert_eq!(detection, TypeDetectionResult::new("image/png", "png"));
        assert_eq!(verdict.reason, "PNG image - Accepted");
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let doc = DecodedDocument::new(b"<?php phpinfo(); ?>".to_vec(), None);
        let first = evaluate("r".into(), "d".into(), &doc);
        let second = evaluate("r".into(), "d".into(), &doc);
        assert_eq!(first, second);
        assert_eq!(first.1.status, Status::Rejected);
    }
}
