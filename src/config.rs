//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub default_embedding_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Year used to close open-ended ranges such as "2019 - present"
    pub reference_year: i32,
    /// Documents shorter than this (after trimming) are rejected as empty
    pub min_text_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 20;

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-screener")
            .join("models");

        Self {
            models: ModelConfig {
                models_dir,
                default_embedding_model: "minishlab/potion-base-8M".to_string(),
            },
            extraction: ExtractionConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if !(2000..=2099).contains(&self.extraction.reference_year) {
            return Err(ScreenerError::Configuration(format!(
                "extraction.reference_year must be within 2000..=2099, got {}",
                self.extraction.reference_year
            )));
        }
        Ok(())
    }

    pub fn models_dir(&self) -> &PathBuf {
        &self.models.models_dir
    }

    /// Resolve an embedding model name to a local directory when one exists,
    /// otherwise hand the name through as a hub repo id
    pub fn resolve_embedding_model(&self, name: Option<&str>) -> PathBuf {
        let name = name.unwrap_or(&self.models.default_embedding_model);
        let as_path = PathBuf::from(name);
        if as_path.exists() {
            return as_path;
        }

        let local_path = self.models_dir().join(name);
        if local_path.exists() {
            local_path
        } else {
            as_path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.extraction.reference_year, 2025);
        assert_eq!(config.extraction.min_text_length, 20);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.extraction.reference_year = 2026;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_rejects_bad_reference_year() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.extraction.reference_year = 1999;
        config.save_to(&path).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ScreenerError::Configuration(_))
        ));
    }

    #[test]
    fn test_resolve_embedding_model_falls_back_to_repo_id() {
        let mut config = Config::default();
        config.models.models_dir = PathBuf::from("/nonexistent/models");

        let resolved = config.resolve_embedding_model(None);
        assert_eq!(resolved, PathBuf::from("minishlab/potion-base-8M"));
    }
}
