// src/report/mod.rs
use crate::github::models::GithubIntel;
use crate::parser::resume::ParsedResume;
use crate::utils::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The composite candidate-intelligence report: everything the resume parser
/// derived plus, when available, the aggregated GitHub profile data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReport {
    pub source_file: String,
    pub generated_at: String,
    pub resume: ParsedResume,
    pub github: Option<GithubIntel>,
}

impl CandidateReport {
    pub fn new(source_file: &Path, resume: ParsedResume, github: Option<GithubIntel>) -> Self {
        Self {
            source_file: source_file.display().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            resume,
            github,
        }
    }

    /// A filesystem-safe identifier derived from the source file stem.
    pub fn slug(&self) -> String {
        let stem = Path::new(&self.source_file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("candidate");
        let slug: String = stem
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        if slug.trim_matches('_').is_empty() {
            "candidate".to_string()
        } else {
            slug
        }
    }
}

pub struct ReportWriter {
    base_dir: PathBuf,
}

impl ReportWriter {
    /// Creates a new ReportWriter with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, ReportError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(ReportError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes the report as pretty-printed JSON under `<base>/<slug>/`.
    pub fn save_report(&self, report: &CandidateReport) -> Result<PathBuf, ReportError> {
        let target_dir = self.target_dir(report)?;
        let file_path = target_dir.join(format!("{}_report.json", report.slug()));

        let json = serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(ReportError::IoError)?;

        tracing::info!("Saved report to {}", file_path.display());
        Ok(file_path)
    }

    /// Dumps the normalized resume text beside the report (debug aid).
    pub fn save_raw_text(&self, report: &CandidateReport) -> Result<PathBuf, ReportError> {
        let target_dir = self.target_dir(report)?;
        let file_path = target_dir.join(format!("{}_normalized.txt", report.slug()));

        fs::write(&file_path, &report.resume.raw_text).map_err(ReportError::IoError)?;

        tracing::info!("Saved normalized text to {}", file_path.display());
        Ok(file_path)
    }

    fn target_dir(&self, report: &CandidateReport) -> Result<PathBuf, ReportError> {
        let target_dir = self.base_dir.join(report.slug());
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(ReportError::IoError)?;
        }
        Ok(target_dir)
    }
}
