//! Base64 payload decoding
//!
//! Accepts plain base64 or a `data:<mime>;base64,<payload>` URL and
//! rejects anything the classifier should never see.

use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use tracing::{debug, warn};

use crate::classifier::detect::parse_data_url;
use crate::classifier::DecodedDocument;
use crate::error::{DocError, Result};

/// Standard alphabet, padding required, non-zero trailing bits tolerated
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a client payload into a [`DecodedDocument`].
///
/// Fails with [`DocError::InvalidBase64`] on malformed base64,
/// [`DocError::MalformedDataUrl`] on a `data:` string without a payload
/// separator, and [`DocError::EmptyPayload`] when nothing decodes.
pub fn decode_payload(raw: &str) -> Result<DecodedDocument> {
    let (payload, declared_mime) = split_payload(raw)?;

    let bytes = PAYLOAD_ENGINE.decode(payload).map_err(|e| {
        warn!("❌ Invalid base64 data: {}", e);
        DocError::InvalidBase64(e.to_string())
    })?;

    if bytes.is_empty() {
        warn!("❌ Empty file data");
        return Err(DocError::EmptyPayload);
    }

    debug!("✅ Base64 validation successful ({} bytes)", bytes.len());
    Ok(DecodedDocument::new(bytes, declared_mime))
}

/// Strip a `data:` header, returning the base64 payload and declared MIME type
fn split_payload(raw: &str) -> Result<(&str, Option<String>)> {
    if !raw.starts_with("data:") {
        return Ok((raw, None));
    }

    if let Some((mime, payload)) = parse_data_url(raw) {
        return Ok((payload, Some(mime.to_string())));
    }

    // Header without a usable MIME type still carries a payload
    match raw.split_once(',') {
        Some((_, payload)) => Ok((payload, None)),
        None => {
            warn!("❌ Data URL without payload separator");
            Err(DocError::MalformedDataUrl)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_base64() {
        let doc = decode_payload("JVBERi0xLjQK").unwrap();
        assert_eq!(doc.bytes, b"%PDF-1.4\n");
        assert!(doc.declared_mime.is_none());
    }

    #[test]
    fn test_decode_data_url() {
        let doc = decode_payload("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(doc.bytes, b"\x89PNG\r\n\x1a\n");
        assert_eq!(doc.declared_mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_decode_data_url_with_empty_mime() {
        let doc = decode_payload("data:;base64,eyJhIjoxfQ==").unwrap();
        assert_eq!(doc.bytes, b"{\"a\":1}");
        assert!(doc.declared_mime.is_none());
    }

    #[test]
    fn test_invalid_base64() {
        let err = decode_payload("not base64 at all!").unwrap_err();
        assert!(matches!(err, DocError::InvalidBase64(_)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_missing_padding_is_invalid() {
        assert!(matches!(
            decode_payload("JVBERi0xLjQ"),
            Err(DocError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_trailing_bits_are_tolerated() {
        // 'R' leaves non-zero bits after the single decoded byte
        let doc = decode_payload("QR==").unwrap();
        assert_eq!(doc.bytes, b"A");

        let doc = decode_payload("JVBERi0xLjR=").unwrap();
        assert_eq!(doc.bytes, b"%PDF-1.4");
    }

    #[test]
    fn test_empty_payload() {
        assert!(matches!(decode_payload(""), Err(DocError::EmptyPayload)));
        assert!(matches!(
            decode_payload("data:text/plain;base64,"),
            Err(DocError::EmptyPayload)
        ));
    }

    #[test]
    fn test_data_url_without_separator() {
        assert!(matches!(
            decode_payload("data:image/png;base64"),
            Err(DocError::MalformedDataUrl)
        ));
    }
}
