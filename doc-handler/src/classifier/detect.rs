//! File type detection
//!
//! Detection runs in a fixed order, first match wins:
//! 1. `data:<mime>;base64,` prefix on the raw input
//! 2. magic byte signatures on the decoded buffer
//! 3. textual prefixes on the first 100 bytes
//! 4. `application/octet-stream`

use tracing::debug;

use super::types::{DecodedDocument, TypeDetectionResult};

/// MIME type assigned to every ZIP-family signature.
///
/// docx, xlsx, pptx and plain zip archives share these leading bytes and are
/// not told apart without reading the central directory.
pub const ZIP_FAMILY_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Minimum buffer length before the text heuristics apply
const MIN_TEXT_LEN: usize = 4;

/// Number of leading bytes inspected by the text heuristics
const TEXT_SNIFF_LEN: usize = 100;

/// A leading byte pattern and the type it identifies
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub magic: &'static [u8],
    pub mime_type: &'static str,
    pub extension: &'static str,
}

/// Binary signatures, most specific first
pub static SIGNATURES: &[Signature] = &[
    Signature {
        magic: b"\x89PNG\r\n\x1a\n",
        mime_type: "image/png",
        extension: "png",
    },
    Signature {
        magic: b"\xff\xd8\xff",
        mime_type: "image/jpeg",
        extension: "jpg",
    },
    Signature {
        magic: b"GIF87a",
        mime_type: "image/gif",
        extension: "gif",
    },
    Signature {
        magic: b"GIF89a",
        mime_type: "image/gif",
        extension: "gif",
    },
    Signature {
        magic: b"%PDF",
        mime_type: "application/pdf",
        extension: "pdf",
    },
    Signature {
        magic: b"PK\x03\x04",
        mime_type: ZIP_FAMILY_MIME,
        extension: "docx",
    },
    Signature {
        magic: b"PK\x05\x06",
        mime_type: ZIP_FAMILY_MIME,
        extension: "docx",
    },
    Signature {
        magic: b"PK\x07\x08",
        mime_type: ZIP_FAMILY_MIME,
        extension: "docx",
    },
];

/// Textual prefixes, tested in order against the sniffed text
static TEXT_PREFIXES: &[(&[&str], &str, &str)] = &[
    (&["<?xml"], "application/xml", "xml"),
    (&["{", "["], "application/json", "json"),
    (&["<html", "<!DOCTYPE"], "text/html", "html"),
    (&["<?php"], "application/x-httpd-php", "php"),
    (&["#!/"], "text/plain", "txt"),
];

/// Split a `data:` URL into its declared MIME type and payload.
///
/// Returns `None` when `raw` is not a data URL or the header is malformed
/// (no `,` separator, or an empty MIME type).
pub fn parse_data_url(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header
        .split(|c: char| c == ';' || c == ':')
        .next()
        .unwrap_or_default();

    if mime.is_empty() {
        return None;
    }

    Some((mime, payload))
}

/// Extension derived from a MIME type: the part after the last `/`
pub fn extension_for_mime(mime: &str) -> &str {
    match mime.rsplit_once('/') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => "bin",
    }
}

/// Detect the file type of `decoded`, consulting `raw_input` for a data URL.
///
/// Total: every input maps to some result.
pub fn detect_type(decoded: &[u8], raw_input: &str) -> TypeDetectionResult {
    let declared = parse_data_url(raw_input).map(|(mime, _)| mime);
    detect_with_declared(decoded, declared)
}

/// Detect the file type of an already decoded payload
pub fn detect_document(document: &DecodedDocument) -> TypeDetectionResult {
    detect_with_declared(&document.bytes, document.declared_mime.as_deref())
}

fn detect_with_declared(decoded: &[u8], declared: Option<&str>) -> TypeDetectionResult {
    debug!("🔍 Analyzing file... File size: {} bytes", decoded.len());

    if let Some(mime) = declared.filter(|m| !m.is_empty()) {
        let result = TypeDetectionResult::new(mime, extension_for_mime(mime));
        debug!(
            "📄 Detected from data URL: {} -> .{}",
            result.mime_type, result.extension
        );
        return result;
    }

    if let Some(sig) = match_signature(decoded) {
        debug!("📄 Detected from signature: {} -> .{}", sig.mime_type, sig.extension);
        return TypeDetectionResult::new(sig.mime_type, sig.extension);
    }

    if let Some(result) = sniff_text(decoded) {
        debug!(
            "📄 Detected from content: {} -> .{}",
            result.mime_type, result.extension
        );
        return result;
    }

    debug!("📄 Could not detect file type, using generic binary -> .bin");
    TypeDetectionResult::octet_stream()
}

/// First signature whose magic bytes prefix `data`
pub fn match_signature(data: &[u8]) -> Option<&'static Signature> {
    SIGNATURES.iter().find(|sig| data.starts_with(sig.magic))
}

fn sniff_text(data: &[u8]) -> Option<TypeDetectionResult> {
    if data.len() < MIN_TEXT_LEN {
        return None;
    }

    let head = &data[..data.len().min(TEXT_SNIFF_LEN)];
    let text = lossless_prefix_text(head);

    TEXT_PREFIXES
        .iter()
        .find(|(prefixes, _, _)| prefixes.iter().any(|p| text.starts_with(p)))
        .map(|(_, mime, ext)| TypeDetectionResult::new(*mime, *ext))
}

/// UTF-8 decode that drops invalid sequences instead of replacing them
fn lossless_prefix_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
