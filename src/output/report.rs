//! Report structures handed to the output formatters

use crate::processing::analyzer::{experience_display, BatchAnalysis};
use crate::processing::features::DocumentFeatures;
use crate::processing::jd_parser::ParsedJobDescription;
use crate::processing::relevance::SemanticResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything the CLI can render. Serializes as the wrapped record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Batch(BatchAnalysis),
    Semantic(SemanticReport),
    JobDescription(JobDescriptionReport),
    Features(FeatureReport),
}

impl Report {
    /// Short name used when suggesting an output file name
    pub fn subject(&self) -> &str {
        match self {
            Report::Batch(batch) => &batch.job_name,
            Report::Semantic(report) => &report.resume_name,
            Report::JobDescription(report) => &report.job_name,
            Report::Features(report) => &report.file_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticReport {
    pub resume_name: String,
    pub job_name: String,
    /// `None` when no model was loaded
    pub model: Option<String>,
    pub result: SemanticResult,
    pub generated_at: DateTime<Utc>,
}

impl SemanticReport {
    pub fn new(
        resume_name: impl Into<String>,
        job_name: impl Into<String>,
        model: Option<String>,
        result: SemanticResult,
    ) -> Self {
        Self {
            resume_name: resume_name.into(),
            job_name: job_name.into(),
            model,
            result,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionReport {
    pub job_name: String,
    pub parsed: ParsedJobDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureReport {
    pub file_name: String,
    pub features: DocumentFeatures,
    pub experience: String,
}

impl FeatureReport {
    pub fn new(file_name: impl Into<String>, features: DocumentFeatures) -> Self {
        Self {
            file_name: file_name.into(),
            experience: experience_display(features.experience_years),
            features,
        }
    }
}
