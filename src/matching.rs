//! Skill overlap between a job posting and a candidate

/// Percentage of job skills that some candidate skill contains, or is
/// contained by, ignoring case. Blank entries on either side are skipped.
pub fn calculate_match_score<J, C>(job_skills: &[J], candidate_skills: &[C]) -> u8
where
    J: AsRef<str>,
    C: AsRef<str>,
{
    let job: Vec<String> = normalized(job_skills);
    if job.is_empty() {
        return 0;
    }
    let candidate: Vec<String> = normalized(candidate_skills);

    let matched = job
        .iter()
        .filter(|skill| {
            candidate
                .iter()
                .any(|c| c.contains(skill.as_str()) || skill.contains(c.as_str()))
        })
        .count();

    (matched as f64 / job.len() as f64 * 100.0).round() as u8
}

fn normalized<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split a comma separated skill list as typed on the command line.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overlap() {
        let job = ["React", "Node.js", "SQL"];
        let candidate = ["react", "TypeScript", "Node.js"];
        assert_eq!(calculate_match_score(&job, &candidate), 67);
    }

    #[test]
    fn test_containment_works_both_ways() {
        assert_eq!(calculate_match_score(&["Java"], &["JavaScript"]), 100);
        assert_eq!(calculate_match_score(&["JavaScript"], &["java"]), 100);
    }

    #[test]
    fn test_empty_inputs() {
        let none: [&str; 0] = [];
        assert_eq!(calculate_match_score(&none, &["Rust"]), 0);
        assert_eq!(calculate_match_score(&["Rust"], &none), 0);
    }

    #[test]
    fn test_blank_entries_are_ignored() {
        // a blank candidate skill would otherwise be contained in everything
        assert_eq!(calculate_match_score(&["Go", "Rust"], &["", "  "]), 0);
        assert_eq!(calculate_match_score(&["Go", " "], &["go"]), 100);
        assert_eq!(calculate_match_score(&["", ""], &["go"]), 0);
    }

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(
            parse_skill_list("React, Node.js,,  SQL "),
            vec!["React", "Node.js", "SQL"]
        );
        assert!(parse_skill_list("").is_empty());
    }
}
