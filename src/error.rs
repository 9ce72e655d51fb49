use std::path::PathBuf;
use thiserror::Error;

/// Main error type for summarizer operations
#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Could not read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Function \"{name}\" not found in {}", path.display())]
    FunctionNotFound { name: String, path: PathBuf },

    #[error("API key not provided. Pass --apikey or set GEMINI_API_KEY")]
    MissingApiKey,

    #[error("Generation service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid boundary pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SummarizerError>;
