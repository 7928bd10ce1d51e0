//! Configuration management for the placement toolkit

use crate::error::{PlacementError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest upload accepted by the analyzer (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Length of one aptitude attempt in seconds.
pub const DEFAULT_QUIZ_DURATION_SECS: u32 = 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub upload: UploadConfig,
    pub quiz: QuizConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: u64,
    pub allowed_extensions: Vec<String>,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub duration_secs: u32,
    pub pass_percentage: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload: UploadConfig {
                max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
                allowed_extensions: ["pdf", "doc", "docx", "txt"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                enable_caching: true,
            },
            quiz: QuizConfig {
                duration_secs: DEFAULT_QUIZ_DURATION_SECS,
                pass_percentage: 60.0,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                PlacementError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            PlacementError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-prep")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.upload.max_bytes == 0 {
            return Err(PlacementError::Configuration(
                "upload.max_bytes must be greater than zero".to_string(),
            ));
        }
        if self.quiz.duration_secs == 0 {
            return Err(PlacementError::Configuration(
                "quiz.duration_secs must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.quiz.pass_percentage) {
            return Err(PlacementError::Configuration(format!(
                "quiz.pass_percentage must be within 0-100, got {}",
                self.quiz.pass_percentage
            )));
        }
        Ok(())
    }

    /// Set a single value addressed as `section.key`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |e: String| PlacementError::Configuration(format!("{}: {}", key, e));

        match key {
            "upload.max_bytes" => {
                self.upload.max_bytes = value.parse().map_err(|e| invalid(format!("{}", e)))?
            }
            "upload.enable_caching" => {
                self.upload.enable_caching = value.parse().map_err(|e| invalid(format!("{}", e)))?
            }
            "upload.allowed_extensions" => {
                self.upload.allowed_extensions = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect()
            }
            "quiz.duration_secs" => {
                self.quiz.duration_secs = value.parse().map_err(|e| invalid(format!("{}", e)))?
            }
            "quiz.pass_percentage" => {
                self.quiz.pass_percentage = value.parse().map_err(|e| invalid(format!("{}", e)))?
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value).map_err(invalid)?
            }
            "output.detailed" => {
                self.output.detailed = value.parse().map_err(|e| invalid(format!("{}", e)))?
            }
            "output.color_output" => {
                self.output.color_output = value.parse().map_err(|e| invalid(format!("{}", e)))?
            }
            _ => {
                return Err(PlacementError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }

        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_portal_limits() {
        let config = Config::default();
        assert_eq!(config.upload.max_bytes, 5 * 1024 * 1024);
        assert_eq!(config.quiz.duration_secs, 3600);
        assert_eq!(config.upload.allowed_extensions, vec!["pdf", "doc", "docx", "txt"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("quiz.duration_secs", "1800").unwrap();
        config.set_value("output.format", "json").unwrap();
        config.set_value("upload.allowed_extensions", ".PDF, txt").unwrap();

        assert_eq!(config.quiz.duration_secs, 1800);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.upload.allowed_extensions, vec!["pdf", "txt"]);

        assert!(config.set_value("quiz.duration_secs", "0").is_err());
        assert!(config.set_value("quiz.colour", "red").is_err());
        assert!(config.set_value("output.detailed", "maybe").is_err());
    }

    #[test]
    fn test_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "upload = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, PlacementError::Configuration(_)));
    }
}
