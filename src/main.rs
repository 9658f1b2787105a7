//! resume-screener: rank resumes against a job description

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_screener::cli::{self, Cli, Commands, ConfigAction, SUPPORTED_EXTENSIONS};
use resume_screener::config::{Config, OutputFormat};
use resume_screener::error::{Result, ScreenerError};
use resume_screener::input::file_detector::candidate_name;
use resume_screener::input::InputManager;
use resume_screener::output::{
    save_report_to_file, suggest_filename, FeatureReport, JobDescriptionReport, Report, ReportGenerator,
    SemanticReport,
};
use resume_screener::processing::embeddings::load_embedder;
use resume_screener::processing::{AnalysisEngine, BatchAnalysis};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            job,
            resume,
            output,
            detailed,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let mut input_manager = InputManager::new();

            let job_text = load_document(&mut input_manager, &job, &config).await?;
            let engine = AnalysisEngine::new(&config.extraction, None)?;

            let progress = if resume.len() > 1 {
                let pb = ProgressBar::new(resume.len() as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                        .map_err(|e| ScreenerError::OutputFormatting(e.to_string()))?
                        .progress_chars("#>-"),
                );
                Some(pb)
            } else {
                None
            };

            let mut results = Vec::with_capacity(resume.len());
            for path in &resume {
                if let Some(pb) = &progress {
                    pb.set_message(display_name(path));
                }

                match load_document(&mut input_manager, path, &config).await {
                    Ok(text) => results.push(engine.analyze_candidate(&candidate_name(path), &text, &job_text)),
                    Err(e) if resume.len() > 1 => {
                        warn!("Skipping {}: {}", path.display(), e);
                        if let Some(pb) = &progress {
                            pb.println(format!("{} {} - {}", "✗".red(), path.display(), e));
                        }
                    }
                    Err(e) => return Err(e),
                }

                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }

            if let Some(pb) = progress {
                pb.finish_with_message("done");
            }

            if results.is_empty() {
                return Err(ScreenerError::InvalidInput("No resume could be analyzed".to_string()));
            }

            info!("Analyzed {} of {} resumes", results.len(), resume.len());
            let batch = BatchAnalysis::new(display_name(&job), engine.parse_jd(&job_text), results);
            emit(&Report::Batch(batch), format, detailed, save.as_deref(), &config)
        }

        Commands::Semantic {
            job,
            resume,
            model,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            validate_input_path(&job)?;
            validate_input_path(&resume)?;

            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text_or_empty(&job).await;
            let resume_text = input_manager.extract_text_or_empty(&resume).await;

            let embedder = load_embedder(&config, model.as_deref());
            let engine = AnalysisEngine::new(&config.extraction, embedder)?;
            let result = engine.score_semantic(&resume_text, &job_text);

            let report = SemanticReport::new(
                candidate_name(&resume),
                display_name(&job),
                engine.get_stats().semantic_model,
                result,
            );
            emit(&Report::Semantic(report), format, false, save.as_deref(), &config)
        }

        Commands::ParseJd { job, output, save } => {
            let format = resolve_format(output.as_deref(), &config)?;
            validate_input_path(&job)?;

            let job_text = InputManager::new().extract_text(&job).await?;
            let engine = AnalysisEngine::new(&config.extraction, None)?;
            let report = JobDescriptionReport {
                job_name: display_name(&job),
                parsed: engine.parse_jd(&job_text),
            };
            emit(&Report::JobDescription(report), format, false, save.as_deref(), &config)
        }

        Commands::Features { file, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            validate_input_path(&file)?;

            let text = InputManager::new().extract_text(&file).await?;
            let engine = AnalysisEngine::new(&config.extraction, None)?;
            let report = FeatureReport::new(display_name(&file), engine.extract_features(&text));
            emit(&Report::Features(report), format, false, None, &config)
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Config File: {}", config_path.display());
                    println!("Models Directory: {}", config.models_dir().display());
                    println!("Default Embedding Model: {}", config.models.default_embedding_model);
                    println!("\nExtraction:");
                    println!("  Reference year: {}", config.extraction.reference_year);
                    println!("  Minimum text length: {}", config.extraction.min_text_length);

                    let stats = AnalysisEngine::new(&config.extraction, None)?.get_stats();
                    println!("  Skill vocabulary: {} keywords", stats.vocabulary_size);
                    println!("  Effective reference year: {}", stats.reference_year);
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(config_path)?;
                    println!("✅ Configuration reset to defaults: {}", config_path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }
            }
            Ok(())
        }
    }
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(ScreenerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn validate_input_path(path: &Path) -> Result<()> {
    cli::validate_file_extension(path, SUPPORTED_EXTENSIONS)
        .map_err(|e| ScreenerError::UnsupportedFormat(format!("{}: {}", path.display(), e)))
}

/// Extract and validate one document for the heuristic path
async fn load_document(input_manager: &mut InputManager, path: &Path, config: &Config) -> Result<String> {
    validate_input_path(path)?;
    input_manager
        .load_document(path, config.extraction.min_text_length)
        .await
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn emit(report: &Report, format: OutputFormat, detailed: bool, save: Option<&Path>, config: &Config) -> Result<()> {
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
    let content = generator.generate_report(report, format)?;

    match save {
        Some(path) => {
            let target: PathBuf = if path.is_dir() {
                path.join(suggest_filename(format, report.subject(), true))
            } else {
                path.to_path_buf()
            };
            save_report_to_file(&content, &target)?;
            println!("📁 Report saved to: {}", target.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
