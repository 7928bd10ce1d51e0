//! Text extraction from uploaded documents

use crate::error::{PlacementError, Result};
use crate::input::file_detector::FileType;
use log::warn;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(PlacementError::Io)?;
        decode_pdf(&bytes).map_err(|e| {
            PlacementError::Decode(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(PlacementError::Io)?;
        Ok(decode_lossy(&bytes))
    }
}

/// Word documents are not parsed; their bytes are read as text. Scores for
/// such files come from whatever readable runs survive the decode.
pub struct RawDocumentExtractor;

impl TextExtractor for RawDocumentExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(PlacementError::Io)?;
        warn!(
            "Reading '{}' as raw text; Word formatting is not decoded",
            path.display()
        );
        Ok(decode_lossy(&bytes))
    }
}

/// Extract text from an upload already held in memory.
pub fn extract_from_bytes(file_type: FileType, bytes: &[u8]) -> Result<String> {
    match file_type {
        FileType::Pdf => decode_pdf(bytes).map_err(PlacementError::Decode),
        FileType::Doc | FileType::Docx | FileType::Text => Ok(decode_lossy(bytes)),
        FileType::Unknown => Err(PlacementError::UnsupportedFileType(
            "unrecognised document".to_string(),
        )),
    }
}

fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn decode_pdf(bytes: &[u8]) -> std::result::Result<String, String> {
    // pdf-extract panics on some malformed inputs instead of returning an error
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("PDF parser aborted on malformed input".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_bytes_decode_lossily() {
        let text = extract_from_bytes(FileType::Text, b"Skills: Rust\xff").unwrap();
        assert!(text.starts_with("Skills: Rust"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_garbage_pdf_is_decode_error() {
        let err = extract_from_bytes(FileType::Pdf, b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PlacementError::Decode(_)));
    }

    #[test]
    fn test_docx_read_as_raw_text() {
        let text = extract_from_bytes(FileType::Docx, b"PK\x03\x04 Experience").unwrap();
        assert!(text.contains("Experience"));
    }
}
