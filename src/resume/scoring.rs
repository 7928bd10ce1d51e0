//! Score rules for the résumé heuristics
//!
//! Every sub-score is driven by [`TextFacts`], the booleans and counts
//! extracted once from the document, so rules stay plain data.

use crate::resume::keywords::KeywordHits;
use crate::resume::sections::SectionFlags;
use regex::Regex;

/// Word count range an ATS treats as a one-to-two page résumé.
pub const IDEAL_WORD_RANGE: std::ops::RangeInclusive<usize> = 300..=800;

/// Matched keywords needed for a full keyword score.
pub const KEYWORD_SATURATION: usize = 15;

pub const GRAMMAR_FLOOR: i32 = 60;
const MAX_CAPITALIZATION_PENALTY: i32 = 30;

/// Everything the rule tables look at, computed in one pass over the text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFacts {
    pub sections: SectionFlags,
    pub keyword_count: usize,
    pub has_action_verb: bool,
    /// `\d+%`, `\d+\+`, "increased", "decreased" or "improved by"
    pub has_quantified_achievement: bool,
    /// Same as above without "improved by"; used for the strengths list.
    pub has_metric_claim: bool,
    /// Only `\d+%` or `\d+\+`.
    pub has_numeric_metric: bool,
    pub word_count: usize,
}

/// Regexes behind the quantification facts. Case-sensitive on purpose:
/// "Increased" at the start of a bullet does not count, only the percentage does.
pub struct FactPatterns {
    quantified: Regex,
    metric_claim: Regex,
    numeric: Regex,
    multiple_spaces: Regex,
    missing_space_after_period: Regex,
}

impl FactPatterns {
    pub fn new() -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            quantified: Regex::new(r"\d+%|\d+\+|increased|decreased|improved by")?,
            metric_claim: Regex::new(r"\d+%|\d+\+|increased|decreased")?,
            numeric: Regex::new(r"\d+%|\d+\+")?,
            multiple_spaces: Regex::new(r"\s{2,}")?,
            missing_space_after_period: Regex::new(r"[a-z]\.[A-Z]")?,
        })
    }

    pub fn facts(&self, text: &str, sections: SectionFlags, keywords: &KeywordHits) -> TextFacts {
        use crate::resume::catalog::KeywordCategory;

        TextFacts {
            sections,
            keyword_count: keywords.len(),
            has_action_verb: keywords.count_in(KeywordCategory::ActionVerb) > 0,
            has_quantified_achievement: self.quantified.is_match(text),
            has_metric_claim: self.metric_claim.is_match(text),
            has_numeric_metric: self.numeric.is_match(text),
            word_count: word_count(text),
        }
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// One binary ATS check and the points it awards.
pub struct AtsCriterion {
    pub name: &'static str,
    pub points: u32,
    pub test: fn(&TextFacts) -> bool,
}

pub const ATS_CRITERIA: &[AtsCriterion] = &[
    AtsCriterion {
        name: "Contact information",
        points: 10,
        test: |f| f.sections.has_contact_info,
    },
    AtsCriterion {
        name: "Experience section",
        points: 10,
        test: |f| f.sections.has_experience,
    },
    AtsCriterion {
        name: "Education section",
        points: 10,
        test: |f| f.sections.has_education,
    },
    AtsCriterion {
        name: "Skills section",
        points: 10,
        test: |f| f.sections.has_skills,
    },
    AtsCriterion {
        name: "Action verbs",
        points: 20,
        test: |f| f.has_action_verb,
    },
    AtsCriterion {
        name: "Quantified achievements",
        points: 20,
        test: |f| f.has_quantified_achievement,
    },
    AtsCriterion {
        name: "Length between 300 and 800 words",
        points: 20,
        test: |f| IDEAL_WORD_RANGE.contains(&f.word_count),
    },
];

/// `(criterion, awarded points)` for every ATS check, in table order.
pub fn ats_breakdown(facts: &TextFacts) -> Vec<(&'static AtsCriterion, u32)> {
    ATS_CRITERIA
        .iter()
        .map(|c| (c, if (c.test)(facts) { c.points } else { 0 }))
        .collect()
}

pub fn ats_compliance(facts: &TextFacts) -> u8 {
    let total: u32 = ats_breakdown(facts).iter().map(|(_, points)| points).sum();
    total.min(100) as u8
}

pub fn completeness(sections: &SectionFlags) -> u8 {
    let ratio = sections.present_count() as f64 / sections.total() as f64;
    (ratio * 100.0).round() as u8
}

pub fn keyword_score(matched: usize) -> u8 {
    let score = (matched as f64 / KEYWORD_SATURATION as f64 * 100.0).min(100.0);
    score.round() as u8
}

/// Capitalisation and spacing proxy for grammar; never below [`GRAMMAR_FLOOR`].
pub fn grammar_score(text: &str, patterns: &FactPatterns) -> u8 {
    let capitalization_errors = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| !segment.starts_with(|c: char| c.is_ascii_uppercase()))
        .count() as i32;

    let mut score = 100 - (capitalization_errors * 2).min(MAX_CAPITALIZATION_PENALTY);
    if patterns.multiple_spaces.is_match(text) {
        score -= 5;
    }
    if patterns.missing_space_after_period.is_match(text) {
        score -= 5;
    }

    score.max(GRAMMAR_FLOOR) as u8
}

pub fn overall_score(completeness: u8, ats: u8, keywords: u8, grammar: u8) -> u8 {
    let weighted = completeness as f64 * 0.3
        + ats as f64 * 0.3
        + keywords as f64 * 0.25
        + grammar as f64 * 0.15;
    weighted.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> FactPatterns {
        FactPatterns::new().unwrap()
    }

    #[test]
    fn test_completeness_rounding() {
        let mut flags = SectionFlags::default();
        assert_eq!(completeness(&flags), 0);

        flags.has_contact_info = true;
        assert_eq!(completeness(&flags), 17);

        flags.has_skills = true;
        flags.has_summary = true;
        flags.has_projects = true;
        assert_eq!(completeness(&flags), 67);
    }

    #[test]
    fn test_keyword_score_saturates() {
        assert_eq!(keyword_score(0), 0);
        assert_eq!(keyword_score(1), 7);
        assert_eq!(keyword_score(10), 67);
        assert_eq!(keyword_score(15), 100);
        assert_eq!(keyword_score(40), 100);
    }

    #[test]
    fn test_ats_is_additive() {
        let facts = TextFacts {
            sections: SectionFlags {
                has_contact_info: true,
                has_skills: true,
                ..Default::default()
            },
            has_action_verb: true,
            word_count: 120,
            ..Default::default()
        };

        assert_eq!(ats_compliance(&facts), 40);
        let breakdown = ats_breakdown(&facts);
        assert_eq!(breakdown.len(), 7);
        assert_eq!((breakdown[0].0.name, breakdown[0].1), ("Contact information", 10));
        assert_eq!((breakdown[2].0.name, breakdown[2].1), ("Education section", 0));
    }

    #[test]
    fn test_ats_word_range_bounds() {
        let mut facts = TextFacts {
            word_count: 300,
            ..Default::default()
        };
        assert_eq!(ats_compliance(&facts), 20);
        facts.word_count = 800;
        assert_eq!(ats_compliance(&facts), 20);
        facts.word_count = 801;
        assert_eq!(ats_compliance(&facts), 0);
    }

    #[test]
    fn test_grammar_penalties() {
        let p = patterns();
        assert_eq!(grammar_score("", &p), 100);
        assert_eq!(grammar_score("All good. Fine here!", &p), 100);
        // two lower-case sentence starts
        assert_eq!(grammar_score("Fine. bad one. another bad", &p), 96);
        // double space and a missing space after a period
        assert_eq!(grammar_score("Fine  here.Next one", &p), 90);
    }

    #[test]
    fn test_grammar_floor() {
        let p = patterns();
        let text = "a. b. c. d. e. f. g. h. i. j. k. l. m. n. o. p. q.  r.S";
        assert_eq!(grammar_score(text, &p), 60);
    }

    #[test]
    fn test_quantification_is_case_sensitive() {
        let p = patterns();
        let hits = KeywordHits::default();

        let facts = p.facts("Increased revenue", SectionFlags::default(), &hits);
        assert!(!facts.has_quantified_achievement);

        let facts = p.facts("revenue improved by a lot", SectionFlags::default(), &hits);
        assert!(facts.has_quantified_achievement);
        assert!(!facts.has_metric_claim);

        let facts = p.facts("served 10+ clients", SectionFlags::default(), &hits);
        assert!(facts.has_numeric_metric);
    }

    #[test]
    fn test_overall_weights() {
        assert_eq!(overall_score(0, 0, 0, 100), 15);
        assert_eq!(overall_score(100, 100, 100, 100), 100);
        assert_eq!(overall_score(50, 90, 67, 84), 71);
    }
}
