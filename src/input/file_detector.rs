//! File type detection

use serde::{Deserialize, Serialize};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    Pdf,
    Doc,
    Docx,
    Text,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "doc" => FileType::Doc,
            "docx" => FileType::Docx,
            "txt" => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    pub fn from_mime(mime: &str) -> Self {
        // Browsers sometimes append parameters, e.g. "text/plain; charset=utf-8"
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_lowercase().as_str() {
            MIME_PDF => FileType::Pdf,
            MIME_DOC => FileType::Doc,
            MIME_DOCX => FileType::Docx,
            MIME_TEXT => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    pub fn from_file_name(name: &str) -> Self {
        std::path::Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    /// Canonical extension, as listed in `upload.allowed_extensions`.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            FileType::Pdf => Some("pdf"),
            FileType::Doc => Some("doc"),
            FileType::Docx => Some("docx"),
            FileType::Text => Some("txt"),
            FileType::Unknown => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FileType::Unknown)
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Pdf => write!(f, "PDF"),
            FileType::Doc => write!(f, "DOC"),
            FileType::Docx => write!(f, "DOCX"),
            FileType::Text => write!(f, "TXT"),
            FileType::Unknown => write!(f, "unknown"),
        }
    }
}
