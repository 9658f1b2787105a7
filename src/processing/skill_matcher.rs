//! Matched / missing skill lists between a resume and a job description

use crate::processing::features::FeatureExtractor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MAX_MATCHED_SKILLS: usize = 15;
pub const MAX_MISSING_SKILLS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Skills present in both documents, alphabetical
    pub matched: Vec<String>,
    /// Job description skills absent from the resume, alphabetical
    pub missing: Vec<String>,
}

pub fn match_skills(extractor: &FeatureExtractor, resume_text: &str, jd_text: &str) -> SkillMatch {
    let resume_skills = extractor.extract_skills(resume_text);
    let jd_skills = extractor.extract_skills(jd_text);
    compare_skill_sets(&resume_skills, &jd_skills)
}

pub fn compare_skill_sets(resume_skills: &[String], jd_skills: &[String]) -> SkillMatch {
    let resume: BTreeSet<&str> = resume_skills.iter().map(String::as_str).collect();
    let jd: BTreeSet<&str> = jd_skills.iter().map(String::as_str).collect();

    // BTreeSet iteration is already sorted
    let matched = resume
        .intersection(&jd)
        .take(MAX_MATCHED_SKILLS)
        .map(|s| s.to_string())
        .collect();
    let missing = jd
        .difference(&resume)
        .take(MAX_MISSING_SKILLS)
        .map(|s| s.to_string())
        .collect();

    SkillMatch { matched, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_match_skills_from_text() {
        let extractor = FeatureExtractor::new().unwrap();
        let resume = "Python, Docker and React developer";
        let jd = "Looking for Python, AWS, Docker and Kubernetes";

        let result = match_skills(&extractor, resume, jd);

        assert_eq!(result.matched, vec!["Docker", "Python"]);
        assert_eq!(result.missing, vec!["AWS", "Kubernetes"]);
    }

    #[test]
    fn test_lists_are_disjoint_and_sorted() {
        let resume = owned(&["SQL", "Agile", "Python", "AWS"]);
        let jd = owned(&["Python", "Scrum", "AWS", "Django", "Agile"]);

        let result = compare_skill_sets(&resume, &jd);

        assert_eq!(result.matched, vec!["AWS", "Agile", "Python"]);
        assert_eq!(result.missing, vec!["Django", "Scrum"]);
        assert!(result.matched.iter().all(|s| !result.missing.contains(s)));
    }

    #[test]
    fn test_lists_are_capped() {
        let jd: Vec<String> = (0..30).map(|i| format!("Skill{:02}", i)).collect();
        let resume: Vec<String> = jd.iter().take(20).cloned().collect();

        let result = compare_skill_sets(&resume, &jd);
        assert_eq!(result.matched.len(), MAX_MATCHED_SKILLS);
        assert_eq!(result.missing.len(), MAX_MISSING_SKILLS);
        assert_eq!(result.matched[0], "Skill00");
        assert_eq!(result.missing[0], "Skill20");

        let result = compare_skill_sets(&[], &jd);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing.len(), MAX_MISSING_SKILLS);
    }

    #[test]
    fn test_empty_job_description() {
        let result = compare_skill_sets(&owned(&["Python"]), &[]);
        assert_eq!(result, SkillMatch::default());
    }
}
