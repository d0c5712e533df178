//! Text extraction from various file formats

use crate::error::{Result, ResumeInsightError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeInsightError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeInsightError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeInsightError::Io)?;

        // The XML walk is synchronous and cheap; only the read above awaits.
        let xml = Self::read_document_xml(&bytes).map_err(|e| {
            ResumeInsightError::DocxExtraction(format!(
                "Failed to extract text from DOCX '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::xml_to_text(&xml))
    }
}

impl DocxExtractor {
    /// Pull `word/document.xml` out of the OOXML container.
    fn read_document_xml(bytes: &[u8]) -> anyhow::Result<String> {
        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor)?;
        let mut file = archive.by_name("word/document.xml")?;
        let mut xml = String::new();
        file.read_to_string(&mut xml)?;
        Ok(xml)
    }

    /// Strip WordprocessingML markup down to raw text. Paragraph and break
    /// elements become newlines so section headings stay separated.
    fn xml_to_text(xml: &str) -> String {
        static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

        let with_breaks = xml
            .replace("</w:p>", "\n")
            .replace("<w:br/>", "\n")
            .replace("<w:tab/>", " ");

        let text = TAG_RE.replace_all(&with_breaks, "");

        text.replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeInsightError::Io)?;
        Ok(content)
    }
}

/// Normalize extracted text regardless of source format: collapse whitespace
/// runs to single spaces, strip characters outside the safe set, collapse
/// repeated newlines, and trim.
pub fn normalize_text(text: &str) -> String {
    static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
    static UNSAFE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.,@\-+#()/]").unwrap());
    static NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

    let text = WHITESPACE_RE.replace_all(text, " ");
    let text = UNSAFE_RE.replace_all(&text, "");
    let text = NEWLINES_RE.replace_all(&text, "\n");
    text.trim().to_string()
}
