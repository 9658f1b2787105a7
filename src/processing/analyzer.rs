//! Analysis engine combining feature extraction, heuristic and semantic scoring

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::processing::embeddings::Embedder;
use crate::processing::features::{DocumentFeatures, FeatureExtractor};
use crate::processing::heuristic::score_heuristic;
use crate::processing::jd_parser::{JdParser, ParsedJobDescription};
use crate::processing::relevance::{SemanticResult, Verdict};
use crate::processing::semantic::SemanticScorer;
use crate::processing::skill_matcher::compare_skill_sets;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const EXPERIENCE_NOT_SPECIFIED: &str = "Not specified";

/// Coordinates every pipeline component behind one handle
pub struct AnalysisEngine {
    extractor: FeatureExtractor,
    jd_parser: JdParser,
    semantic: SemanticScorer,
}

/// Heuristic result for one resume against one job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAnalysis {
    pub resume_name: String,
    pub score: u32,
    pub verdict: Verdict,
    pub location: String,
    pub experience_years: u32,
    /// "N years", or "Not specified" when nothing was found
    pub experience: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub job_name: String,
    pub job_description: ParsedJobDescription,
    /// Highest score first
    pub results: Vec<CandidateAnalysis>,
    pub created_at: DateTime<Utc>,
}

impl BatchAnalysis {
    /// Orders results by descending score. Ties keep their input order.
    pub fn new(
        job_name: impl Into<String>,
        job_description: ParsedJobDescription,
        mut results: Vec<CandidateAnalysis>,
    ) -> Self {
        results.sort_by(|a, b| b.score.cmp(&a.score));

        Self {
            job_name: job_name.into(),
            job_description,
            results,
            created_at: Utc::now(),
        }
    }

    pub fn top_candidate(&self) -> Option<&CandidateAnalysis> {
        self.results.first()
    }

    pub fn count_by_verdict(&self, verdict: Verdict) -> usize {
        self.results.iter().filter(|r| r.verdict == verdict).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEngineStats {
    pub vocabulary_size: usize,
    pub reference_year: i32,
    pub semantic_model: Option<String>,
}

impl AnalysisEngine {
    /// `embedder` is `None` when the model could not be loaded
    pub fn new(config: &ExtractionConfig, embedder: Option<Arc<dyn Embedder>>) -> Result<Self> {
        Ok(Self {
            extractor: FeatureExtractor::from_config(config)?,
            jd_parser: JdParser::new()?,
            semantic: SemanticScorer::new(embedder)?,
        })
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn extract_features(&self, text: &str) -> DocumentFeatures {
        self.extractor.extract_features(text)
    }

    pub fn parse_jd(&self, jd_text: &str) -> ParsedJobDescription {
        self.jd_parser.parse(jd_text)
    }

    pub fn score_semantic(&self, resume_text: &str, jd_text: &str) -> SemanticResult {
        self.semantic.score(resume_text, jd_text)
    }

    pub fn analyze_candidate(&self, resume_name: &str, resume_text: &str, jd_text: &str) -> CandidateAnalysis {
        let relevance = score_heuristic(&self.extractor, resume_text, jd_text);
        let resume = self.extractor.extract_features(resume_text);
        let jd_skills = self.extractor.extract_skills(jd_text);
        let skills = compare_skill_sets(&resume.skills, &jd_skills);

        debug!(
            "{}: score {} ({}), {} matched, {} missing",
            resume_name,
            relevance.score,
            relevance.verdict,
            skills.matched.len(),
            skills.missing.len()
        );

        CandidateAnalysis {
            resume_name: resume_name.to_string(),
            score: relevance.score,
            verdict: relevance.verdict,
            location: resume.location,
            experience_years: resume.experience_years,
            experience: experience_display(resume.experience_years),
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            analyzed_at: Utc::now(),
        }
    }

    /// Analyze named resumes against one job description
    pub fn analyze_batch(&self, job_name: &str, jd_text: &str, resumes: &[(String, String)]) -> BatchAnalysis {
        let results = resumes
            .iter()
            .map(|(name, text)| self.analyze_candidate(name, text, jd_text))
            .collect();

        BatchAnalysis::new(job_name, self.parse_jd(jd_text), results)
    }

    pub fn get_stats(&self) -> AnalysisEngineStats {
        AnalysisEngineStats {
            vocabulary_size: self.extractor.vocabulary_size(),
            reference_year: self.extractor.reference_year(),
            semantic_model: self.semantic.model_name().map(str::to_string),
        }
    }
}

pub fn experience_display(years: u32) -> String {
    if years > 0 {
        format!("{} years", years)
    } else {
        EXPERIENCE_NOT_SPECIFIED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Job Title: Backend Engineer\n\
                      Must have: Python, Django, PostgreSQL, Docker\n\
                      3+ years of experience";

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(&ExtractionConfig::default(), None).unwrap()
    }

    #[test]
    fn test_analyze_candidate() {
        let resume = "Python and Django developer based in Pune. 4 years of experience with Docker.";
        let analysis = engine().analyze_candidate("alice.txt", resume, JD);

        assert_eq!(analysis.resume_name, "alice.txt");
        assert_eq!(analysis.location, "Pune");
        assert_eq!(analysis.experience_years, 4);
        assert_eq!(analysis.experience, "4 years");
        assert_eq!(analysis.matched_skills, vec!["Django", "Docker", "Python"]);
        assert_eq!(analysis.missing_skills, vec!["PostgreSQL"]);
        // 3/4 skills: 60 points, experience met: 20 points
        assert_eq!(analysis.score, 80);
        assert_eq!(analysis.verdict, Verdict::High);
    }

    #[test]
    fn test_empty_resume_is_neutral() {
        let analysis = engine().analyze_candidate("empty.txt", "", JD);

        assert_eq!(analysis.score, 50);
        assert_eq!(analysis.verdict, Verdict::Medium);
        assert_eq!(analysis.location, "Not specified");
        assert_eq!(analysis.experience, "Not specified");
        assert!(analysis.matched_skills.is_empty());
        assert_eq!(analysis.missing_skills.len(), 4);
    }

    #[test]
    fn test_batch_sorted_by_descending_score() {
        let resumes = vec![
            ("weak.txt".to_string(), "Java developer, 1 year of experience".to_string()),
            ("strong.txt".to_string(), "Python, Django, PostgreSQL, Docker. 6 years of experience".to_string()),
            ("middle.txt".to_string(), "Python and Docker, 3 years of experience".to_string()),
            ("also-weak.txt".to_string(), "Scrum master, 1 year of experience".to_string()),
        ];
        let batch = engine().analyze_batch("backend.txt", JD, &resumes);

        let names: Vec<&str> = batch.results.iter().map(|r| r.resume_name.as_str()).collect();
        assert_eq!(names, vec!["strong.txt", "middle.txt", "weak.txt", "also-weak.txt"]);
        assert_eq!(batch.top_candidate().map(|r| r.score), Some(100));
        assert_eq!(batch.count_by_verdict(Verdict::Low), 2);
        assert_eq!(batch.job_description.role_title, "backend engineer");
    }

    #[test]
    fn test_semantic_without_model() {
        let result = engine().score_semantic("Python", "Python");
        assert_eq!(result.missing_note, "Model not available");
        assert!(engine().get_stats().semantic_model.is_none());
    }

    #[test]
    fn test_stats_report_vocabulary_and_reference_year() {
        let config = ExtractionConfig {
            reference_year: 2027,
            ..ExtractionConfig::default()
        };
        let stats = AnalysisEngine::new(&config, None).unwrap().get_stats();

        assert_eq!(stats.vocabulary_size, crate::processing::vocabulary::SKILL_VOCABULARY.len());
        assert_eq!(stats.reference_year, 2027);
        assert_eq!(engine().get_stats().reference_year, 2025);
    }

    #[test]
    fn test_experience_display() {
        assert_eq!(experience_display(0), "Not specified");
        assert_eq!(experience_display(1), "1 years");
        assert_eq!(experience_display(12), "12 years");
    }

    #[test]
    fn test_candidate_serializes_verdict_as_name() {
        let analysis = engine().analyze_candidate("a.txt", "Python", "Python");
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["verdict"], "High");
        assert_eq!(json["experience"], "Not specified");
        assert!(json["analyzed_at"].is_string());
    }
}
