//! Input manager: dispatch by file type and produce normalized extractions

use crate::error::{Result, ResumeInsightError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    normalize_text, DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// Normalized text plus counts, the input to every downstream stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    pub text: String,
    pub word_count: usize,
    pub char_count: usize,
}

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extract and normalize text from a resume file. Failure here is
    /// terminal for the whole pipeline: no text means nothing downstream
    /// can run.
    pub async fn extract(&self, path: &Path) -> Result<Extraction> {
        if !path.exists() {
            return Err(ResumeInsightError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let raw = match file_type {
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
            FileType::Unknown => {
                return Err(ResumeInsightError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(Self::finalize(&raw))
    }

    fn finalize(raw: &str) -> Extraction {
        let text = normalize_text(raw);
        let word_count = text.split_whitespace().count();
        // Grapheme clusters, so accented names count as one character
        let char_count = text.graphemes(true).count();

        Extraction {
            text,
            word_count,
            char_count,
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeInsightError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_counts() {
        let extraction = InputManager::finalize("John  Doe\n\nSoftware Engineer");
        assert_eq!(extraction.text, "John Doe Software Engineer");
        assert_eq!(extraction.word_count, 4);
        assert_eq!(extraction.char_count, 26);
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.xyz");
        std::fs::write(&path, "text").unwrap();

        let result = InputManager::new().extract(&path).await;
        assert!(matches!(result, Err(ResumeInsightError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_nonexistent_file() {
        let result = InputManager::new()
            .extract(Path::new("/nonexistent/resume.txt"))
            .await;
        assert!(matches!(result, Err(ResumeInsightError::InvalidInput(_))));
    }
}
