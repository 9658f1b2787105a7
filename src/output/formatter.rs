//! Output formatters: console, JSON and Markdown renderings of reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::processing::analyzer::{BatchAnalysis, CandidateAnalysis};
use crate::processing::jd_parser::ParsedJobDescription;
use crate::processing::relevance::Verdict;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering reports into a printable string
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for a requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

const NONE_FOUND: &str = "None";

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_FOUND.to_string()
    } else {
        items.join(", ")
    }
}

fn or_none(text: &str) -> &str {
    if text.is_empty() {
        NONE_FOUND
    } else {
        text
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_verdict_badge(&self, verdict: Verdict) -> String {
        let color = match verdict {
            Verdict::High => Color::Green,
            Verdict::Medium => Color::Yellow,
            Verdict::Low => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", verdict.as_str().color(color).bold())
        } else {
            format!("[{}]", verdict)
        }
    }

    fn format_batch(&self, batch: &BatchAnalysis) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME SCREENING RESULTS", 1));
        output.push_str(&format!(
            "Job: {} | Role: {} | Candidates: {}\n",
            batch.job_name,
            self.colorize(&batch.job_description.role_title, Color::Cyan),
            batch.results.len()
        ));
        output.push_str(&format!(
            "High: {} | Medium: {} | Low: {}\n",
            batch.count_by_verdict(Verdict::High),
            batch.count_by_verdict(Verdict::Medium),
            batch.count_by_verdict(Verdict::Low)
        ));

        output.push_str(&self.format_header("Ranking", 2));
        for (rank, candidate) in batch.results.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} {}% {}\n",
                rank + 1,
                self.colorize(&candidate.resume_name, Color::White),
                candidate.score,
                self.format_verdict_badge(candidate.verdict)
            ));
            output.push_str(&format!(
                "   Location: {} | Experience: {}\n",
                candidate.location, candidate.experience
            ));
            output.push_str(&format!(
                "   Matched: {}\n",
                self.colorize(&join_or_none(&candidate.matched_skills), Color::Green)
            ));
            output.push_str(&format!(
                "   Missing: {}\n",
                self.colorize(&join_or_none(&candidate.missing_skills), Color::Yellow)
            ));
        }

        if self.detailed {
            output.push_str(&self.format_job_description(&batch.job_description));
            output.push_str(&format!(
                "\nGenerated: {}\n",
                batch.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        output
    }

    fn format_job_description(&self, parsed: &ParsedJobDescription) -> String {
        let mut output = self.format_header("Job Description", 2);

        output.push_str(&format!("Role: {}\n", self.colorize(&parsed.role_title, Color::Cyan)));
        output.push_str(&format!("Must have: {}\n", or_none(&parsed.must_have)));
        output.push_str(&format!("Good to have: {}\n", or_none(&parsed.good_to_have)));
        output.push_str(&format!("Qualifications: {}\n", or_none(&parsed.qualifications)));
        output
    }

    fn format_semantic(&self, report: &SemanticReport) -> String {
        let mut output = self.format_header("SEMANTIC RELEVANCE", 1);

        output.push_str(&format!("Resume: {} | Job: {}\n", report.resume_name, report.job_name));
        output.push_str(&format!(
            "Model: {}\n",
            report.model.as_deref().unwrap_or("unavailable")
        ));
        output.push_str(&format!(
            "Score: {:.2}% {}\n",
            report.result.score,
            self.format_verdict_badge(report.result.verdict)
        ));
        output.push_str(&format!(
            "Missing skills: {}\n",
            self.colorize(&report.result.missing_note, Color::Yellow)
        ));
        output
    }

    fn format_features(&self, report: &FeatureReport) -> String {
        let mut output = self.format_header(&format!("Features: {}", report.file_name), 1);

        output.push_str(&format!(
            "Skills: {}\n",
            self.colorize(&join_or_none(&report.features.skills), Color::Green)
        ));
        output.push_str(&format!("Experience: {}\n", report.experience));
        output.push_str(&format!("Location: {}\n", report.features.location));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Batch(batch) => self.format_batch(batch),
            Report::Semantic(semantic) => self.format_semantic(semantic),
            Report::JobDescription(jd) => {
                let mut output = self.format_header(&format!("Job Description: {}", jd.job_name), 1);
                output.push_str(&self.format_job_description(&jd.parsed));
                output
            }
            Report::Features(features) => self.format_features(features),
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_verdict_badge(verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::High => "🟢 High",
            Verdict::Medium => "🟡 Medium",
            Verdict::Low => "🔴 Low",
        }
    }

    /// Pipes would break table rows
    fn cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_candidate_row(rank: usize, candidate: &CandidateAnalysis) -> String {
        format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
            rank,
            Self::cell(&candidate.resume_name),
            candidate.score,
            Self::markdown_verdict_badge(candidate.verdict),
            candidate.location,
            candidate.experience,
            join_or_none(&candidate.matched_skills),
            join_or_none(&candidate.missing_skills)
        )
    }

    fn format_job_description(parsed: &ParsedJobDescription) -> String {
        let mut output = String::new();
        output.push_str(&format!("**Role:** {}\n\n", parsed.role_title));
        output.push_str(&format!("**Must have:** {}\n\n", Self::cell(or_none(&parsed.must_have))));
        output.push_str(&format!("**Good to have:** {}\n\n", Self::cell(or_none(&parsed.good_to_have))));
        output.push_str(&format!("**Qualifications:** {}\n\n", Self::cell(or_none(&parsed.qualifications))));
        output
    }

    fn format_batch(&self, batch: &BatchAnalysis) -> String {
        let mut output = String::from("# Resume Screening Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Job:** `{}` | **Candidates:** {}\n\n",
                batch.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                batch.job_name,
                batch.results.len()
            ));
        }

        output.push_str("## Job Description\n\n");
        output.push_str(&Self::format_job_description(&batch.job_description));

        output.push_str("## Ranking\n\n");
        output.push_str("| # | Resume | Score | Verdict | Location | Experience | Matched | Missing |\n");
        output.push_str("|---|--------|-------|---------|----------|------------|---------|---------|\n");
        for (rank, candidate) in batch.results.iter().enumerate() {
            output.push_str(&Self::format_candidate_row(rank + 1, candidate));
        }

        output
    }

    fn format_semantic(&self, report: &SemanticReport) -> String {
        let mut output = String::from("# Semantic Relevance Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Model:** {}\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.model.as_deref().unwrap_or("unavailable")
            ));
        }

        output.push_str(&format!("**Resume:** `{}` | **Job:** `{}`\n\n", report.resume_name, report.job_name));
        output.push_str(&format!(
            "**Score:** {:.2}% {}\n\n",
            report.result.score,
            Self::markdown_verdict_badge(report.result.verdict)
        ));
        output.push_str(&format!("**Missing skills:** {}\n", report.result.missing_note));
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Batch(batch) => self.format_batch(batch),
            Report::Semantic(semantic) => self.format_semantic(semantic),
            Report::JobDescription(jd) => {
                let mut output = format!("# Job Description: {}\n\n", jd.job_name);
                output.push_str(&Self::format_job_description(&jd.parsed));
                output
            }
            Report::Features(features) => format!(
                "# Features: {}\n\n- **Skills:** {}\n- **Experience:** {}\n- **Location:** {}\n",
                features.file_name,
                join_or_none(&features.features.skills),
                features.experience,
                features.features.location
            ),
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: OutputFormat) -> Result<String> {
        self.formatter_for(format).format_report(report)
    }

    pub fn formatter_for(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, subject: &str, timestamp: bool) -> String {
    let base_name = Path::new(subject)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_screening{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_screening{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_screening{}.md", base_name, timestamp_suffix),
    }
}
