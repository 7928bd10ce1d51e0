//! Whole-word keyword matching against the fixed catalogs

use crate::error::{PlacementError, Result};
use crate::resume::catalog::{all_keywords, KeywordCategory};
use regex::Regex;
use std::collections::HashSet;

/// How many absent catalog terms are reported back to the user.
pub const MISSING_KEYWORD_LIMIT: usize = 10;

struct CatalogEntry {
    term: &'static str,
    category: KeywordCategory,
    pattern: Regex,
}

pub struct KeywordMatcher {
    entries: Vec<CatalogEntry>,
}

/// Keywords found in one document, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordHits {
    terms: Vec<&'static str>,
    categories: Vec<KeywordCategory>,
}

impl KeywordHits {
    pub fn terms(&self) -> &[&'static str] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn count_in(&self, category: KeywordCategory) -> usize {
        self.categories.iter().filter(|c| **c == category).count()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t.eq_ignore_ascii_case(term))
    }
}

impl KeywordMatcher {
    pub fn new() -> Result<Self> {
        let entries = all_keywords()
            .map(|(term, category)| {
                let pattern = Regex::new(&word_pattern(term)).map_err(|e| {
                    PlacementError::Configuration(format!("Bad keyword pattern for '{}': {}", term, e))
                })?;
                Ok(CatalogEntry {
                    term,
                    category,
                    pattern,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn find(&self, text: &str) -> KeywordHits {
        let mut hits = KeywordHits::default();
        let mut seen = HashSet::new();

        for entry in &self.entries {
            if entry.pattern.is_match(text) && seen.insert(entry.term.to_lowercase()) {
                hits.terms.push(entry.term);
                hits.categories.push(entry.category);
            }
        }

        hits
    }

    /// First catalog terms (in catalog order) absent from `hits`.
    pub fn missing(&self, hits: &KeywordHits, limit: usize) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|e| e.term)
            .filter(|term| !hits.contains(term))
            .take(limit)
            .collect()
    }

    pub fn catalog_size(&self) -> usize {
        self.entries.len()
    }
}

/// Case-insensitive whole-word pattern. Word boundaries are only anchored on
/// edges that are word characters, so "C++" and "CI/CD" still match.
fn word_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let leading = term.chars().next().map(is_word).unwrap_or(false);
    let trailing = term.chars().last().map(is_word).unwrap_or(false);

    format!(
        "(?i){}{}{}",
        if leading { r"\b" } else { "" },
        regex::escape(term),
        if trailing { r"\b" } else { "" }
    )
}
