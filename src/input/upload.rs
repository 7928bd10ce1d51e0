//! Upload boundary checks applied before any text is read

use crate::config::UploadConfig;
use crate::error::{PlacementError, Result};
use crate::input::file_detector::FileType;
use log::debug;

/// Rejects uploads with an unexpected type or size.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    max_bytes: u64,
    allowed_extensions: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_bytes: u64, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_bytes,
            allowed_extensions,
        }
    }

    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(config.max_bytes, config.allowed_extensions.clone())
    }

    /// Accepts the upload if either the declared MIME type or the file name
    /// extension is allowed, then checks the size. Returns the detected type.
    /// A MIME type only counts when its extension is in the allowed list.
    pub fn validate(&self, file_name: &str, declared_mime: Option<&str>, size: u64) -> Result<FileType> {
        let by_mime = declared_mime
            .map(FileType::from_mime)
            .filter(|file_type| self.is_allowed(*file_type))
            .unwrap_or(FileType::Unknown);
        let by_name = self.extension_type(file_name);

        let file_type = if by_mime.is_supported() { by_mime } else { by_name };
        if !file_type.is_supported() {
            return Err(PlacementError::UnsupportedFileType(file_name.to_string()));
        }

        if size > self.max_bytes {
            return Err(PlacementError::FileTooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        debug!("Accepted upload {} as {} ({} bytes)", file_name, file_type, size);
        Ok(file_type)
    }

    fn is_allowed(&self, file_type: FileType) -> bool {
        file_type
            .extension()
            .map_or(false, |ext| self.allowed_extensions.iter().any(|allowed| allowed == ext))
    }

    fn extension_type(&self, file_name: &str) -> FileType {
        let ext = std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match ext {
            Some(ext) if self.allowed_extensions.iter().any(|allowed| *allowed == ext) => {
                FileType::from_extension(&ext)
            }
            _ => FileType::Unknown,
        }
    }
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::from_config(&crate::config::Config::default().upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
    use crate::input::file_detector::MIME_DOCX;

    #[test]
    fn test_accepts_by_extension_or_mime() {
        let validator = UploadValidator::default();

        assert_eq!(validator.validate("resume.txt", None, 10).unwrap(), FileType::Text);
        assert_eq!(
            validator.validate("resume", Some(MIME_DOCX), 10).unwrap(),
            FileType::Docx
        );
        assert_eq!(
            validator.validate("resume.PDF", Some("application/octet-stream"), 10).unwrap(),
            FileType::Pdf
        );
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let validator = UploadValidator::default();
        let err = validator.validate("photo.png", Some("image/png"), 10).unwrap_err();
        assert!(matches!(err, PlacementError::UnsupportedFileType(_)));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let validator = UploadValidator::default();
        assert!(validator.validate("cv.pdf", None, DEFAULT_MAX_UPLOAD_BYTES).is_ok());

        let err = validator
            .validate("cv.pdf", None, DEFAULT_MAX_UPLOAD_BYTES + 1)
            .unwrap_err();
        assert!(matches!(err, PlacementError::FileTooLarge { .. }));
    }

    #[test]
    fn test_type_checked_before_size() {
        let validator = UploadValidator::default();
        let err = validator.validate("movie.mp4", None, u64::MAX).unwrap_err();
        assert!(matches!(err, PlacementError::UnsupportedFileType(_)));
    }

    #[test]
    fn test_respects_configured_extensions() {
        let validator = UploadValidator::new(100, vec!["txt".to_string()]);
        assert!(validator.validate("cv.txt", None, 1).is_ok());
        assert!(validator.validate("cv.pdf", None, 1).is_err());
    }

    #[test]
    fn test_declared_mime_respects_configured_extensions() {
        let validator = UploadValidator::new(100, vec!["txt".to_string()]);
        assert!(matches!(
            validator.validate("cv.pdf", Some("application/pdf"), 1),
            Err(PlacementError::UnsupportedFileType(_))
        ));
        assert_eq!(
            validator.validate("cv.bin", Some("text/plain"), 1).unwrap(),
            FileType::Text
        );
        // a disallowed MIME still falls back to an allowed file name
        assert_eq!(
            validator.validate("cv.txt", Some("application/pdf"), 1).unwrap(),
            FileType::Text
        );
    }
}
