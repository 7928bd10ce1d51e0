//! Résumé analysis: one pass from raw text to a scored report

use crate::error::{PlacementError, Result};
use crate::resume::insights;
use crate::resume::keywords::{KeywordMatcher, MISSING_KEYWORD_LIMIT};
use crate::resume::scoring::{self, FactPatterns, TextFacts};
use crate::resume::sections::{SectionDetector, SectionFlags};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub score: u8,
    pub completeness: u8,
    pub ats_compliance: u8,
    pub keywords: u8,
    pub grammar: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub present_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub sections: SectionFlags,
    pub word_count: usize,
}

/// Holds the compiled catalogs so repeated analyses don't rebuild them.
pub struct ResumeAnalyzer {
    sections: SectionDetector,
    keywords: KeywordMatcher,
    patterns: FactPatterns,
}

impl ResumeAnalyzer {
    pub fn new() -> Result<Self> {
        let patterns = FactPatterns::new()
            .map_err(|e| PlacementError::Configuration(format!("Failed to compile scoring patterns: {}", e)))?;

        Ok(Self {
            sections: SectionDetector::new()?,
            keywords: KeywordMatcher::new()?,
            patterns,
        })
    }

    pub fn analyze(&self, text: &str) -> ResumeAnalysis {
        self.analyze_with_facts(text).0
    }

    /// One pass that also hands back the facts the ATS checks were judged
    /// on, for detailed reports.
    pub fn analyze_with_facts(&self, text: &str) -> (ResumeAnalysis, TextFacts) {
        let sections = self.sections.detect(text);
        let hits = self.keywords.find(text);
        let facts = self.patterns.facts(text, sections, &hits);

        let completeness = scoring::completeness(&sections);
        let ats_compliance = scoring::ats_compliance(&facts);
        let keywords = scoring::keyword_score(hits.len());
        let grammar = scoring::grammar_score(text, &self.patterns);
        let score = scoring::overall_score(completeness, ats_compliance, keywords, grammar);

        debug!(
            "Scored resume: overall={} completeness={} ats={} keywords={} grammar={} ({} words)",
            score, completeness, ats_compliance, keywords, grammar, facts.word_count
        );

        let analysis = ResumeAnalysis {
            score,
            completeness,
            ats_compliance,
            keywords,
            grammar,
            strengths: insights::strengths(&facts),
            improvements: insights::improvements(&facts),
            present_keywords: hits.terms().iter().map(|t| t.to_string()).collect(),
            missing_keywords: self
                .keywords
                .missing(&hits, MISSING_KEYWORD_LIMIT)
                .into_iter()
                .map(str::to_string)
                .collect(),
            suggestions: insights::suggestions(ats_compliance),
            sections,
            word_count: facts.word_count,
        };
        (analysis, facts)
    }

    pub fn catalog_size(&self) -> usize {
        self.keywords.catalog_size()
    }
}

/// Convenience wrapper that builds a fresh analyzer.
pub fn analyze(text: &str) -> Result<ResumeAnalysis> {
    Ok(ResumeAnalyzer::new()?.analyze(text))
}
