//! CLI interface for the placement toolkit

use crate::config::OutputFormat;
use crate::quiz::QuizCommand;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "placement-prep")]
#[command(about = "Resume scoring, aptitude practice and job matching for campus placements")]
#[command(long_about = "Score a resume against ATS heuristics, take the timed 50-question aptitude test, and rank job postings by skill match")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume file
    Analyze {
        /// Path to resume file (PDF, DOC, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// MIME type reported by the uploader, checked before the extension
        #[arg(long)]
        mime: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include the per-check ATS breakdown
        #[arg(short, long)]
        detailed: bool,
    },

    /// Take the timed aptitude test
    Quiz {
        /// Print the question catalog instead of starting an attempt
        #[arg(long)]
        list: bool,

        /// Output format for the final result
        #[arg(short, long)]
        output: Option<String>,

        /// Save the final result to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Match score between a job's skills and a candidate's skills
    Match {
        /// Comma separated job skills
        #[arg(short, long)]
        job: String,

        /// Comma separated candidate skills
        #[arg(short = 'k', long)]
        candidate: String,
    },

    /// Browse a job board export ranked by skill match
    Jobs {
        /// JSON array of job postings
        #[arg(short, long)]
        file: PathBuf,

        /// Comma separated candidate skills
        #[arg(short = 'k', long)]
        skills: String,

        /// Search title, company, location and skills
        #[arg(long, default_value = "")]
        search: String,

        /// Work mode: all, remote, hybrid, on-site
        #[arg(short, long, default_value = "all")]
        mode: String,

        /// Only show on-campus or off-campus postings
        #[arg(long)]
        job_type: Option<String>,

        /// Print JSON instead of the console listing
        #[arg(long)]
        json: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "quiz.duration_secs")
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// One line typed during an interactive quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    Command(QuizCommand),
    ShowMap,
    Help,
    Nothing,
}

/// Options and question numbers are typed 1-based.
pub fn parse_quiz_input(line: &str) -> Result<QuizInput, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(QuizInput::Nothing);
    };

    let input = match head.to_lowercase().as_str() {
        "1" | "2" | "3" | "4" => {
            let option: usize = head.parse().map_err(|_| format!("Invalid option: {}", head))?;
            QuizInput::Command(QuizCommand::Select(option - 1))
        }
        "n" | "next" => QuizInput::Command(QuizCommand::Next),
        "p" | "prev" | "previous" => QuizInput::Command(QuizCommand::Previous),
        "g" | "goto" => {
            let number: usize = parts
                .next()
                .ok_or("Usage: g <question number>")?
                .parse()
                .map_err(|_| "Question number must be a positive integer".to_string())?;
            if number == 0 {
                return Err("Questions are numbered from 1".to_string());
            }
            QuizInput::Command(QuizCommand::GoTo(number - 1))
        }
        "s" | "submit" => QuizInput::Command(QuizCommand::Submit),
        "r" | "restart" => QuizInput::Command(QuizCommand::Reset),
        "m" | "map" => QuizInput::ShowMap,
        "h" | "help" | "?" => QuizInput::Help,
        other => return Err(format!("Unknown command '{}'. Type h for help", other)),
    };
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("html").unwrap(), OutputFormat::Html);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.exe"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }

    #[test]
    fn test_parse_quiz_input() {
        assert_eq!(
            parse_quiz_input("2").unwrap(),
            QuizInput::Command(QuizCommand::Select(1))
        );
        assert_eq!(
            parse_quiz_input(" g 12 ").unwrap(),
            QuizInput::Command(QuizCommand::GoTo(11))
        );
        assert_eq!(parse_quiz_input("S").unwrap(), QuizInput::Command(QuizCommand::Submit));
        assert_eq!(parse_quiz_input("m").unwrap(), QuizInput::ShowMap);
        assert_eq!(parse_quiz_input("   ").unwrap(), QuizInput::Nothing);

        assert!(parse_quiz_input("5").is_err());
        assert!(parse_quiz_input("g").is_err());
        assert!(parse_quiz_input("g 0").is_err());
        assert!(parse_quiz_input("g x").is_err());
    }

    #[test]
    fn test_parses_jobs_command() {
        let cli = Cli::try_parse_from([
            "placement-prep",
            "jobs",
            "--file",
            "jobs.json",
            "--skills",
            "React,Node.js",
            "--mode",
            "remote",
        ])
        .unwrap();

        match cli.command {
            Commands::Jobs { skills, mode, search, .. } => {
                assert_eq!(skills, "React,Node.js");
                assert_eq!(mode, "remote");
                assert_eq!(search, "");
            }
            _ => panic!("expected jobs command"),
        }
    }
}
