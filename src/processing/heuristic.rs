//! Keyword-overlap relevance score with an experience adjustment

use crate::processing::features::FeatureExtractor;
use crate::processing::relevance::{RelevanceScore, Verdict};
use log::debug;
use std::collections::HashSet;

/// Returned when there is nothing to compare
pub const NEUTRAL_SCORE: u32 = 50;

const SKILL_WEIGHT: f64 = 80.0;
const EXPERIENCE_MET: u32 = 20;
const EXPERIENCE_UNKNOWN: u32 = 15;
const EXPERIENCE_CLOSE: u32 = 15;
const EXPERIENCE_SHORT: u32 = 10;
const CLOSE_EXPERIENCE_RATIO: f64 = 0.7;

pub fn score_heuristic(extractor: &FeatureExtractor, resume_text: &str, jd_text: &str) -> RelevanceScore {
    if resume_text.is_empty() || jd_text.is_empty() {
        return neutral();
    }

    let jd_skills: HashSet<String> = extractor.extract_skills(jd_text).into_iter().collect();
    if jd_skills.is_empty() {
        return neutral();
    }

    let resume_skills: HashSet<String> = extractor.extract_skills(resume_text).into_iter().collect();
    let matching = jd_skills.intersection(&resume_skills).count();
    let skill_match_rate = matching as f64 / jd_skills.len() as f64;

    let jd_years = extractor.extract_experience_years(jd_text);
    let resume_years = extractor.extract_experience_years(resume_text);
    let experience = experience_component(resume_years, jd_years);

    let score = (skill_match_rate * SKILL_WEIGHT + experience as f64)
        .round()
        .clamp(0.0, 100.0) as u32;

    debug!(
        "heuristic score {}: {}/{} skills, experience {}y vs {}y required",
        score,
        matching,
        jd_skills.len(),
        resume_years,
        jd_years
    );

    RelevanceScore {
        score,
        verdict: Verdict::from_heuristic_score(score),
    }
}

/// Points awarded for experience; an unstated requirement counts as adequate
pub fn experience_component(resume_years: u32, jd_years: u32) -> u32 {
    if jd_years == 0 {
        EXPERIENCE_UNKNOWN
    } else if resume_years >= jd_years {
        EXPERIENCE_MET
    } else if resume_years as f64 >= jd_years as f64 * CLOSE_EXPERIENCE_RATIO {
        EXPERIENCE_CLOSE
    } else {
        EXPERIENCE_SHORT
    }
}

fn neutral() -> RelevanceScore {
    RelevanceScore {
        score: NEUTRAL_SCORE,
        verdict: Verdict::Medium,
    }
}
