//! Embedding-based relevance scoring

use crate::error::Result;
use crate::processing::embeddings::{cosine_similarity, Embedder};
use crate::processing::keywords::KeywordSet;
use crate::processing::relevance::{SemanticResult, Verdict};
use crate::processing::vocabulary::SEMANTIC_GAP_SKILLS;
use log::{debug, warn};
use std::sync::Arc;

pub const MODEL_UNAVAILABLE: &str = "Model not available";
pub const INSUFFICIENT_TEXT: &str = "Insufficient text data";
pub const NO_GAPS: &str = "None identified";

const MAX_REPORTED_GAPS: usize = 5;

pub struct SemanticScorer {
    embedder: Option<Arc<dyn Embedder>>,
    gap_skills: KeywordSet,
}

impl SemanticScorer {
    /// `None` records that the model failed to load; scoring then degrades
    pub fn new(embedder: Option<Arc<dyn Embedder>>) -> Result<Self> {
        Ok(Self {
            embedder,
            gap_skills: KeywordSet::new(SEMANTIC_GAP_SKILLS)?,
        })
    }

    pub fn is_model_available(&self) -> bool {
        self.embedder.is_some()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.embedder.as_deref().map(|e| e.model_name())
    }

    pub fn score(&self, resume_text: &str, jd_text: &str) -> SemanticResult {
        let Some(embedder) = self.embedder.as_deref() else {
            return SemanticResult::degraded(MODEL_UNAVAILABLE);
        };

        let resume_text = resume_text.trim();
        let jd_text = jd_text.trim();
        if resume_text.is_empty() || jd_text.is_empty() {
            return SemanticResult::degraded(INSUFFICIENT_TEXT);
        }

        let similarity = match Self::similarity(embedder, resume_text, jd_text) {
            Ok(similarity) => similarity,
            Err(e) => {
                warn!("Error computing relevance: {}", e);
                return SemanticResult::degraded(format!("Error: {}", e));
            }
        };

        let percentage = (similarity as f64 * 100.0).clamp(0.0, 100.0);
        let verdict = Verdict::from_semantic_score(percentage);
        let score = (percentage * 100.0).round() / 100.0;
        debug!("semantic similarity {:.4} -> {} ({})", similarity, score, verdict);

        SemanticResult {
            score,
            verdict,
            missing_note: self.missing_skills_note(resume_text, jd_text),
        }
    }

    fn similarity(embedder: &dyn Embedder, resume_text: &str, jd_text: &str) -> Result<f32> {
        let resume_embedding = embedder.embed(resume_text)?;
        let jd_embedding = embedder.embed(jd_text)?;
        cosine_similarity(&resume_embedding, &jd_embedding)
    }

    /// Skills mentioned anywhere in the job description but nowhere in the
    /// resume, plain substring test
    pub fn missing_skills_note(&self, resume_text: &str, jd_text: &str) -> String {
        let in_jd = self.gap_skills.substring_matches(&jd_text.to_lowercase());
        let in_resume = self.gap_skills.substring_matches(&resume_text.to_lowercase());

        let missing: Vec<&str> = in_jd
            .difference(&in_resume)
            .take(MAX_REPORTED_GAPS)
            .map(|&id| SEMANTIC_GAP_SKILLS[id])
            .collect();

        if missing.is_empty() {
            NO_GAPS.to_string()
        } else {
            missing.join(", ")
        }
    }
}
