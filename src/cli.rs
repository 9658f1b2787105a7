//! CLI interface for the resume screener

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions the input pipeline can read
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Rule-based resume screening against a job description")]
#[command(long_about = "Score resumes against a job description with keyword heuristics or sentence embeddings, \
and split job descriptions into role, must-have, good-to-have and qualification sections")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank one or more resumes against a job description
    Analyze {
        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Paths to resume files (PDF, DOCX, TXT, MD)
        #[arg(short, long, required = true, num_args = 1..)]
        resume: Vec<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include the parsed job description in console output
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Embedding-based relevance of one resume
    Semantic {
        #[arg(short, long)]
        job: PathBuf,

        #[arg(short, long)]
        resume: PathBuf,

        /// Embedding model (HuggingFace repo id or local path)
        #[arg(short, long)]
        model: Option<String>,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Split a job description into sections
    ParseJd {
        #[arg(short, long)]
        job: PathBuf,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show skills, experience and location found in a document
    Features {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), SUPPORTED_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), SUPPORTED_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("cv.doc"), SUPPORTED_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("README"), SUPPORTED_EXTENSIONS).is_err());
    }

    #[test]
    fn test_analyze_accepts_many_resumes() {
        let cli = Cli::try_parse_from([
            "resume-screener", "analyze", "--job", "jd.txt", "--resume", "a.pdf", "b.md", "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { resume, detailed, .. } => {
                assert_eq!(resume, vec![PathBuf::from("a.pdf"), PathBuf::from("b.md")]);
                assert!(!detailed);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_a_resume() {
        assert!(Cli::try_parse_from(["resume-screener", "analyze", "--job", "jd.txt"]).is_err());
    }

    #[test]
    fn test_config_action_is_optional() {
        let cli = Cli::try_parse_from(["resume-screener", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: None }));

        let cli = Cli::try_parse_from(["resume-screener", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: Some(ConfigAction::Path) }));
    }
}
