//! Input manager: validates an upload and routes it to the right extractor

use crate::error::{PlacementError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    PdfExtractor, PlainTextExtractor, RawDocumentExtractor, TextExtractor,
};
use crate::input::upload::UploadValidator;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    validator: UploadValidator,
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_validator(UploadValidator::default())
    }

    pub fn with_validator(validator: UploadValidator) -> Self {
        Self {
            validator,
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Validate and read the document at `path`. `declared_mime` stands in
    /// for the content type a browser would attach to the upload.
    pub async fn extract_text(&mut self, path: &Path, declared_mime: Option<&str>) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(PlacementError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let size = tokio::fs::metadata(path).await?.len();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path_str.clone());
        let file_type = self.validator.validate(&file_name, declared_mime, size)?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Doc | FileType::Docx => {
                info!("Reading Word document as text: {}", path.display());
                RawDocumentExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(PlacementError::UnsupportedFileType(file_name));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_serves_repeat_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        std::fs::write(&path, "Skills: Rust").unwrap();

        let mut manager = InputManager::new();
        let first = manager.extract_text(&path, None).await.unwrap();
        std::fs::write(&path, "changed").unwrap();
        let second = manager.extract_text(&path, None).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.cache_size(), 1);

        manager.clear_cache();
        assert_eq!(manager.extract_text(&path, None).await.unwrap(), "changed");
    }

    #[tokio::test]
    async fn test_rejections_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.png");
        std::fs::write(&path, [0u8; 8]).unwrap();

        let mut manager = InputManager::new().with_cache(true);
        assert!(matches!(
            manager.extract_text(&path, Some("image/png")).await,
            Err(PlacementError::UnsupportedFileType(_))
        ));
        assert_eq!(manager.cache_size(), 0);
    }
}
