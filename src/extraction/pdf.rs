// src/extraction/pdf.rs
//! PDF text extraction from a base64 payload, as uploaded by the frontend
//! (`data:application/pdf;base64,...` or bare base64).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::errors::ExtractionError;

/// Decode the payload and pull the text out of the PDF. Page texts come
/// back newline-joined; a document with no extractable text is an error,
/// not an empty success.
pub fn extract_text(payload: &str) -> Result<String, ExtractionError> {
    // Browsers send FileReader results as data URIs; the header before the
    // first comma is not base64
    let encoded = match payload.split_once(',') {
        Some((_, data)) => data,
        None => payload,
    };

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ExtractionError::InvalidPayload(e.to_string()))?;

    debug!("Decoded PDF payload: {} bytes", bytes.len());

    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractionError::NoTextExtracted);
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A structurally valid single-page PDF whose page carries no content
    /// stream, so parsing succeeds but yields no text
    const TEXTLESS_PDF_BASE64: &str = "JVBERi0xLjQKMSAwIG9iago8PCAvVHlwZSAvQ2F0YWxvZyAvUGFnZXMgMiAwIFIgPj4KZW5kb2JqCjIgMCBvYmoKPDwgL1R5cGUgL1BhZ2VzIC9LaWRzIFszIDAgUl0gL0NvdW50IDEgPj4KZW5kb2JqCjMgMCBvYmoKPDwgL1R5cGUgL1BhZ2UgL1BhcmVudCAyIDAgUiAvTWVkaWFCb3ggWzAgMCA2MTIgNzkyXSAvUmVzb3VyY2VzIDw8ID4+ID4+CmVuZG9iagp4cmVmCjAgNAowMDAwMDAwMDAwIDY1NTM1IGYgCjAwMDAwMDAwMDkgMDAwMDAgbiAKMDAwMDAwMDA1OCAwMDAwMCBuIAowMDAwMDAwMTE1IDAwMDAwIG4gCnRyYWlsZXIKPDwgL1NpemUgNCAvUm9vdCAxIDAgUiA+PgpzdGFydHhyZWYKMjAzCiUlRU9GCg==";

    #[test]
    fn test_pdf_without_text_is_an_error_not_an_empty_success() {
        let payload = format!("data:application/pdf;base64,{}", TEXTLESS_PDF_BASE64);
        let err = extract_text(&payload).expect_err("textless PDF");
        assert!(matches!(err, ExtractionError::NoTextExtracted));
        assert_eq!(err.to_string(), "No text could be extracted from the PDF");
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let err = extract_text("!!!not-base64!!!").expect_err("invalid payload");
        assert!(matches!(err, ExtractionError::InvalidPayload(_)));
    }

    #[test]
    fn test_data_uri_header_is_stripped_before_decoding() {
        // Valid base64 after the comma, but not a PDF; decoding must
        // succeed and the failure must come from the PDF parser
        let payload = "data:application/pdf;base64,aGVsbG8gd29ybGQ=";
        let err = extract_text(payload).expect_err("not a real PDF");
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn test_bare_base64_without_header_is_accepted() {
        let err = extract_text("aGVsbG8gd29ybGQ=").expect_err("not a real PDF");
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}
