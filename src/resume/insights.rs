//! Strengths, improvements and suggestions as ordered rule tables

use crate::resume::scoring::TextFacts;

const STRONG_KEYWORD_COUNT: usize = 10;
const MAX_SUGGESTIONS: usize = 5;
const SUGGESTION_ATS_THRESHOLD: u8 = 70;

pub struct InsightRule {
    pub applies: fn(&TextFacts) -> bool,
    pub message: fn(&TextFacts) -> String,
}

pub const STRENGTH_RULES: &[InsightRule] = &[
    InsightRule {
        applies: |f| f.sections.has_contact_info,
        message: |_| "Complete contact information included".to_string(),
    },
    InsightRule {
        applies: |f| f.sections.has_summary,
        message: |_| "Professional summary present".to_string(),
    },
    InsightRule {
        applies: |f| f.keyword_count >= STRONG_KEYWORD_COUNT,
        message: |f| format!("Strong keyword presence ({} industry terms found)", f.keyword_count),
    },
    InsightRule {
        applies: |f| f.has_action_verb,
        message: |_| "Uses action verbs to describe achievements".to_string(),
    },
    InsightRule {
        applies: |f| f.has_metric_claim,
        message: |_| "Includes quantified achievements with metrics".to_string(),
    },
    InsightRule {
        applies: |f| f.sections.has_projects,
        message: |_| "Project experience highlighted".to_string(),
    },
];

pub const DEFAULT_STRENGTH: &str = "Resume structure is clear and organized";

pub const IMPROVEMENT_RULES: &[InsightRule] = &[
    InsightRule {
        applies: |f| !f.sections.has_summary,
        message: |_| "Add a professional summary at the top".to_string(),
    },
    InsightRule {
        applies: |f| !f.sections.has_contact_info,
        message: |_| "Include complete contact information".to_string(),
    },
    InsightRule {
        applies: |f| f.keyword_count < STRONG_KEYWORD_COUNT,
        message: |_| "Add more industry-relevant keywords".to_string(),
    },
    InsightRule {
        applies: |f| !f.sections.has_projects,
        message: |_| "Include projects to showcase practical experience".to_string(),
    },
    InsightRule {
        applies: |f| !f.has_numeric_metric,
        message: |_| "Quantify achievements with numbers and percentages".to_string(),
    },
    InsightRule {
        applies: |f| f.word_count < 300,
        message: |_| "Expand content - resume seems too brief".to_string(),
    },
    InsightRule {
        applies: |f| f.word_count > 800,
        message: |_| "Condense content - keep to 1-2 pages".to_string(),
    },
];

pub const DEFAULT_IMPROVEMENT: &str = "Consider adding certifications if available";

pub fn strengths(facts: &TextFacts) -> Vec<String> {
    evaluate(STRENGTH_RULES, facts, DEFAULT_STRENGTH)
}

pub fn improvements(facts: &TextFacts) -> Vec<String> {
    evaluate(IMPROVEMENT_RULES, facts, DEFAULT_IMPROVEMENT)
}

fn evaluate(rules: &[InsightRule], facts: &TextFacts, fallback: &str) -> Vec<String> {
    let fired: Vec<String> = rules
        .iter()
        .filter(|rule| (rule.applies)(facts))
        .map(|rule| (rule.message)(facts))
        .collect();

    if fired.is_empty() {
        vec![fallback.to_string()]
    } else {
        fired
    }
}

/// General tips; the section-header tip is only given to weak ATS scores.
pub fn suggestions(ats_compliance: u8) -> Vec<String> {
    let mut tips = vec![
        "Use a simple, clean format without tables or graphics",
        "Start bullet points with strong action verbs",
    ];

    if ats_compliance < SUGGESTION_ATS_THRESHOLD {
        tips.push("Include industry-standard section headers (Experience, Education, Skills)");
    }

    tips.extend([
        "Tailor resume to each job posting",
        "Keep file format as PDF for best compatibility",
        "Use standard fonts like Arial, Calibri, or Times New Roman",
    ]);

    tips.into_iter()
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::sections::SectionFlags;

    fn all_sections() -> SectionFlags {
        SectionFlags {
            has_contact_info: true,
            has_summary: true,
            has_experience: true,
            has_education: true,
            has_skills: true,
            has_projects: true,
        }
    }

    #[test]
    fn test_empty_facts_fall_back_for_strengths() {
        let facts = TextFacts::default();
        assert_eq!(strengths(&facts), vec![DEFAULT_STRENGTH.to_string()]);
    }

    #[test]
    fn test_strength_order_and_counts() {
        let facts = TextFacts {
            sections: all_sections(),
            keyword_count: 12,
            has_action_verb: true,
            has_metric_claim: true,
            ..Default::default()
        };

        let result = strengths(&facts);
        assert_eq!(result.len(), 6);
        assert_eq!(result[0], "Complete contact information included");
        assert_eq!(result[2], "Strong keyword presence (12 industry terms found)");
        assert_eq!(result[5], "Project experience highlighted");
    }

    #[test]
    fn test_polished_resume_gets_default_improvement() {
        let facts = TextFacts {
            sections: all_sections(),
            keyword_count: 20,
            has_numeric_metric: true,
            word_count: 500,
            ..Default::default()
        };
        assert_eq!(improvements(&facts), vec![DEFAULT_IMPROVEMENT.to_string()]);
    }

    #[test]
    fn test_length_improvements() {
        let short = TextFacts {
            word_count: 10,
            ..Default::default()
        };
        assert!(improvements(&short).contains(&"Expand content - resume seems too brief".to_string()));

        let long = TextFacts {
            word_count: 900,
            ..Default::default()
        };
        let result = improvements(&long);
        assert!(result.contains(&"Condense content - keep to 1-2 pages".to_string()));
        assert!(!result.contains(&"Expand content - resume seems too brief".to_string()));
    }

    #[test]
    fn test_suggestions_insert_header_tip_for_low_ats() {
        let low = suggestions(40);
        assert_eq!(low.len(), 5);
        assert_eq!(
            low[2],
            "Include industry-standard section headers (Experience, Education, Skills)"
        );
        assert_eq!(low[4], "Keep file format as PDF for best compatibility");

        let high = suggestions(70);
        assert_eq!(high.len(), 5);
        assert_eq!(high[2], "Tailor resume to each job posting");
        assert_eq!(high[4], "Use standard fonts like Arial, Calibri, or Times New Roman");
    }
}
