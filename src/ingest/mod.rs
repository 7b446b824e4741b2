// src/ingest/mod.rs
use crate::utils::error::ExtractError;
use std::fs;
use std::path::Path;

/// Input formats we can turn into text. DOCX/RTF are deliberately not
/// supported; they fail up front as unsupported rather than decoding badly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    PlainText,
    Pdf,
}

/// Determines the format from the file extension.
pub fn detect_format(path: &Path) -> Result<ResumeFormat, ExtractError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "text" | "md" | "markdown" => Ok(ResumeFormat::PlainText),
        "pdf" => Ok(ResumeFormat::Pdf),
        _ => Err(ExtractError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Reads a resume file and returns its decoded text.
///
/// Plain-text formats are read verbatim; PDFs go through `pdf_extract`. A
/// decode that produces only whitespace is reported as its own failure so the
/// caller never parses a silently-empty document.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let format = detect_format(path)?;
    tracing::info!("Extracting text from {} ({:?})", path.display(), format);

    let text = match format {
        ResumeFormat::PlainText => fs::read_to_string(path)?,
        ResumeFormat::Pdf => {
            pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))?
        }
    };

    if text.trim().is_empty() {
        return Err(ExtractError::NoText(path.display().to_string()));
    }

    tracing::debug!("Extracted {} bytes of text", text.len());
    Ok(text)
}
