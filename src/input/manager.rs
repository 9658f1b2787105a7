//! Input manager for handling different file types

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ScreenerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Extraction as seen by the pipeline: any failure becomes "no usable text"
    pub async fn extract_text_or_empty(&mut self, path: &Path) -> String {
        match self.extract_text(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Error extracting text from {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    /// Strict extraction followed by `validate_document`; the error names the file
    pub async fn load_document(&mut self, path: &Path, min_length: usize) -> Result<String> {
        let text = self.extract_text(path).await?;
        if is_too_short(&text, min_length) {
            return Err(ScreenerError::InvalidInput(format!("{}: {}", path.display(), EMPTY_DOCUMENT)));
        }
        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

pub const EMPTY_DOCUMENT: &str = "File appears to be empty";

/// Reject documents that carry too little text to analyze
pub fn validate_document(text: &str, min_length: usize) -> Result<()> {
    if is_too_short(text, min_length) {
        return Err(ScreenerError::InvalidInput(EMPTY_DOCUMENT.to_string()));
    }
    Ok(())
}

fn is_too_short(text: &str, min_length: usize) -> bool {
    text.trim().chars().count() < min_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_document() {
        assert!(validate_document("", 20).is_err());
        assert!(validate_document("   short text   ", 20).is_err());
        assert!(validate_document("Senior Python developer based in Pune", 20).is_ok());
    }
}
