//! Error handling for the placement toolkit

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file type: {0}. Please upload a PDF, DOC, DOCX, or TXT file")]
    UnsupportedFileType(String),

    #[error("File is too large ({size} bytes); it must be at most {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Failed to read document text: {0}")]
    Decode(String),

    #[error("Question index {index} is out of range (0..{len})")]
    InvalidQuizIndex { index: usize, len: usize },

    #[error("Answer option {0} is out of range (0..=3)")]
    InvalidAnswerOption(usize),

    #[error("Quiz operation '{operation}' is not allowed while {phase}")]
    InvalidQuizState {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Backend request failed: {0}")]
    Backend(String),

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("User already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl PlacementError {
    /// True for errors the user can fix by changing what they submitted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlacementError::UnsupportedFileType(_)
                | PlacementError::FileTooLarge { .. }
                | PlacementError::InvalidQuizIndex { .. }
                | PlacementError::InvalidAnswerOption(_)
                | PlacementError::InvalidQuizState { .. }
                | PlacementError::InvalidInput(_)
        )
    }

    /// Message shown to the person at the keyboard, without internals.
    pub fn user_message(&self) -> String {
        match self {
            PlacementError::Decode(_) => {
                "Failed to analyze resume. Please try again with a text-based file.".to_string()
            }
            PlacementError::Backend(_) => "Something went wrong. Please try again.".to_string(),
            PlacementError::FileTooLarge { .. } => "File size must be less than 5MB".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlacementError>;
