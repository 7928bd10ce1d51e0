//! Résumé heuristic scoring
//! Section flags, catalog keywords, ATS/grammar rules and written feedback

pub mod analyzer;
pub mod catalog;
pub mod insights;
pub mod keywords;
pub mod scoring;
pub mod sections;

pub use analyzer::{analyze, ResumeAnalysis, ResumeAnalyzer};
pub use sections::SectionFlags;
