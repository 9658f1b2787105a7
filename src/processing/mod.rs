//! Text processing and analysis module

pub mod vocabulary;
pub mod keywords;
pub mod features;
pub mod skill_matcher;
pub mod relevance;
pub mod heuristic;
pub mod embeddings;
pub mod semantic;
pub mod jd_parser;
pub mod analyzer;

pub use analyzer::{AnalysisEngine, BatchAnalysis, CandidateAnalysis};
pub use features::{DocumentFeatures, FeatureExtractor};
pub use jd_parser::{JdParser, ParsedJobDescription};
pub use relevance::{RelevanceScore, SemanticResult, Verdict};
