//! Report structures wrapped around the raw analysis results

use crate::resume::scoring::{ats_breakdown, TextFacts};
use crate::resume::ResumeAnalysis;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the analysis formatters render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub analysis: ResumeAnalysis,
    /// One entry per ATS check, with the points it earned.
    pub ats_checks: Vec<AtsCheck>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsCheck {
    pub criterion: String,
    pub awarded: u32,
    pub max: u32,
}

impl AtsCheck {
    pub fn passed(&self) -> bool {
        self.awarded == self.max
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub processing_time_ms: u64,
    pub tool_version: String,
}

impl AnalysisReport {
    pub fn new(
        analysis: ResumeAnalysis,
        facts: &TextFacts,
        resume_file: impl Into<String>,
        processing_time_ms: u64,
    ) -> Self {
        let ats_checks = ats_breakdown(facts)
            .into_iter()
            .map(|(criterion, awarded)| AtsCheck {
                criterion: criterion.name.to_string(),
                awarded,
                max: criterion.points,
            })
            .collect();

        Self {
            analysis,
            ats_checks,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_file: resume_file.into(),
                processing_time_ms,
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata
            .generated_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
    }
}

/// Verbal band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Needs Work",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "score-excellent",
            ScoreBand::Good => "score-good",
            ScoreBand::Fair => "score-fair",
            ScoreBand::Poor => "score-poor",
        }
    }
}
