//! Topic-word section detection

use crate::error::{PlacementError, Result};
use crate::resume::catalog::ResumeSection;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// Presence flags for the six résumé sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFlags {
    pub has_contact_info: bool,
    pub has_summary: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub has_projects: bool,
}

impl SectionFlags {
    pub fn get(&self, section: ResumeSection) -> bool {
        match section {
            ResumeSection::ContactInfo => self.has_contact_info,
            ResumeSection::Summary => self.has_summary,
            ResumeSection::Experience => self.has_experience,
            ResumeSection::Education => self.has_education,
            ResumeSection::Skills => self.has_skills,
            ResumeSection::Projects => self.has_projects,
        }
    }

    fn set(&mut self, section: ResumeSection) {
        match section {
            ResumeSection::ContactInfo => self.has_contact_info = true,
            ResumeSection::Summary => self.has_summary = true,
            ResumeSection::Experience => self.has_experience = true,
            ResumeSection::Education => self.has_education = true,
            ResumeSection::Skills => self.has_skills = true,
            ResumeSection::Projects => self.has_projects = true,
        }
    }

    pub fn present_count(&self) -> usize {
        ResumeSection::ALL.iter().filter(|s| self.get(**s)).count()
    }

    pub fn total(&self) -> usize {
        ResumeSection::ALL.len()
    }

    /// `(section, present)` pairs in fixed section order.
    pub fn iter(&self) -> impl Iterator<Item = (ResumeSection, bool)> + '_ {
        ResumeSection::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

/// Finds indicator words with one case-insensitive automaton over all sections.
pub struct SectionDetector {
    matcher: AhoCorasick,
    owners: Vec<ResumeSection>,
}

impl SectionDetector {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::new();
        let mut owners = Vec::new();
        for section in ResumeSection::ALL {
            for word in section.indicators() {
                patterns.push(*word);
                owners.push(section);
            }
        }

        // Standard match kind so overlapping reports work ("portfolio" is shared)
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| PlacementError::Configuration(format!("Failed to build section matcher: {}", e)))?;

        Ok(Self { matcher, owners })
    }

    pub fn detect(&self, text: &str) -> SectionFlags {
        let mut flags = SectionFlags::default();
        for mat in self.matcher.find_overlapping_iter(text) {
            flags.set(self.owners[mat.pattern().as_usize()]);
            if flags.present_count() == flags.total() {
                break;
            }
        }
        flags
    }
}
