// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500 Internal Server Error

    #[error("GitHub rate limit likely exceeded")]
    RateLimited, // 403 on the public API without credentials is almost always this

    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    #[error("Failed to parse GitHub response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("No extractable text in: {0}")]
    NoText(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("GitHub interaction failed: {0}")]
    Github(#[from] GithubError),

    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Report output failed: {0}")]
    Report(#[from] ReportError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
