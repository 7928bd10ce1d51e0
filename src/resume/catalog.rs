//! Fixed keyword catalogs and section indicator words

/// Technologies recruiters screen for.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Node.js", "Python", "Java",
    "C++", "SQL", "MongoDB", "PostgreSQL", "AWS", "Azure", "Docker",
    "Kubernetes", "Git", "CI/CD", "Agile", "Scrum", "REST API",
    "GraphQL", "HTML", "CSS", "Angular", "Vue", "Next.js",
];

pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "Leadership", "Communication", "Team", "Collaboration", "Problem Solving",
    "Critical Thinking", "Project Management", "Analytical", "Creative",
];

pub const ACTION_VERBS: &[&str] = &[
    "Developed", "Implemented", "Designed", "Led", "Managed", "Created",
    "Built", "Optimized", "Improved", "Achieved", "Delivered", "Coordinated",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Technical,
    SoftSkill,
    ActionVerb,
}

/// All catalog terms in their canonical order: technical, soft, action.
pub fn all_keywords() -> impl Iterator<Item = (&'static str, KeywordCategory)> {
    TECHNICAL_KEYWORDS
        .iter()
        .map(|k| (*k, KeywordCategory::Technical))
        .chain(SOFT_SKILL_KEYWORDS.iter().map(|k| (*k, KeywordCategory::SoftSkill)))
        .chain(ACTION_VERBS.iter().map(|k| (*k, KeywordCategory::ActionVerb)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResumeSection {
    ContactInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 6] = [
        ResumeSection::ContactInfo,
        ResumeSection::Summary,
        ResumeSection::Experience,
        ResumeSection::Education,
        ResumeSection::Skills,
        ResumeSection::Projects,
    ];

    /// Words whose presence anywhere in the text marks the section as present.
    pub fn indicators(&self) -> &'static [&'static str] {
        match self {
            ResumeSection::ContactInfo => &["email", "phone", "linkedin", "github", "portfolio"],
            ResumeSection::Summary => &["summary", "objective", "profile", "about"],
            ResumeSection::Experience => &["experience", "work", "employment", "position", "job"],
            ResumeSection::Education => &["education", "degree", "university", "college", "school"],
            ResumeSection::Skills => &["skills", "technologies", "technical", "proficient"],
            ResumeSection::Projects => &["projects", "portfolio", "built", "developed"],
        }
    }

    pub fn flag_name(&self) -> &'static str {
        match self {
            ResumeSection::ContactInfo => "hasContactInfo",
            ResumeSection::Summary => "hasSummary",
            ResumeSection::Experience => "hasExperience",
            ResumeSection::Education => "hasEducation",
            ResumeSection::Skills => "hasSkills",
            ResumeSection::Projects => "hasProjects",
        }
    }
}

impl std::fmt::Display for ResumeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResumeSection::ContactInfo => write!(f, "Contact Info"),
            ResumeSection::Summary => write!(f, "Summary"),
            ResumeSection::Experience => write!(f, "Experience"),
            ResumeSection::Education => write!(f, "Education"),
            ResumeSection::Skills => write!(f, "Skills"),
            ResumeSection::Projects => write!(f, "Projects"),
        }
    }
}
