//! Verdict buckets and the score records produced by both scoring paths

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Low,
    Medium,
    High,
}

impl Verdict {
    /// Heuristic path: inclusive thresholds at 70 and 40
    pub fn from_heuristic_score(score: u32) -> Self {
        if score >= 70 {
            Verdict::High
        } else if score >= 40 {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }

    /// Semantic path: strict thresholds at 75 and 50
    pub fn from_semantic_score(score: f64) -> Self {
        if score > 75.0 {
            Verdict::High
        } else if score > 50.0 {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Low => "Low",
            Verdict::Medium => "Medium",
            Verdict::High => "High",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic relevance: integer score in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub score: u32,
    pub verdict: Verdict,
}

/// Embedding relevance: cosine similarity as a percentage, plus a gap note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticResult {
    pub score: f64,
    pub verdict: Verdict,
    pub missing_note: String,
}

impl SemanticResult {
    pub(crate) fn degraded(note: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            verdict: Verdict::Low,
            missing_note: note.into(),
        }
    }
}
