//! Resume document reading. PDF bytes in, plain text out.

use thiserror::Error;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Error extracting text from PDF: {0}")]
    Unreadable(String),

    #[error("No readable text found in PDF.")]
    NoText,
}

/// Converts an uploaded document into plain text. Implementations are called
/// from the blocking pool.
pub trait DocumentReader: Send + Sync {
    fn read_text(&self, bytes: &[u8]) -> Result<String, DocumentError>;
}

/// In-memory PDF text extraction backed by `pdf-extract`.
#[derive(Debug, Clone, Default)]
pub struct PdfDocumentReader;

impl DocumentReader for PdfDocumentReader {
    fn read_text(&self, bytes: &[u8]) -> Result<String, DocumentError> {
        // pdf-extract panics on some malformed documents instead of erroring.
        let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| DocumentError::Unreadable("malformed PDF structure".to_string()))?
            .map_err(|e| DocumentError::Unreadable(e.to_string()))?;
        non_empty(text)
    }
}

fn non_empty(text: String) -> Result<String, DocumentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DocumentError::NoText);
    }
    Ok(trimmed.to_string())
}

/// True for a `Content-Type` naming a PDF, ignoring case and parameters.
pub fn is_pdf(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(Some("application/pdf")));
        assert!(is_pdf(Some("Application/PDF; charset=binary")));
        assert!(!is_pdf(Some("text/plain")));
        assert!(!is_pdf(Some("application/pdfx")));
        assert!(!is_pdf(None));
    }

    #[test]
    fn test_garbage_bytes_are_unreadable() {
        let result = PdfDocumentReader.read_text(b"definitely not a pdf");
        assert!(matches!(result, Err(DocumentError::Unreadable(_))));
    }

    #[test]
    fn test_blank_text_is_no_text() {
        assert!(matches!(non_empty(" \n\t".to_string()), Err(DocumentError::NoText)));
        assert_eq!(non_empty("  Rust  \n".to_string()).unwrap(), "Rust");
    }
}
