//! Report rendering

pub mod formatter;
pub mod report;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{FeatureReport, JobDescriptionReport, Report, SemanticReport};
