use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SummarizerError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// LLM provider (gemini, openai)
    pub provider: String,

    /// Model name (e.g., "gemini-2.0-flash", "gpt-4o-mini")
    pub model: String,

    /// API key, used when neither --apikey nor GEMINI_API_KEY is set
    pub api_key: Option<String>,

    /// Base URL override for the provider endpoint
    pub base_url: Option<String>,

    /// Maximum tokens for LLM responses
    pub max_tokens: Option<u32>,

    /// Temperature for LLM responses (0.0 to 1.0)
    pub temperature: Option<f32>,

    /// HTTP timeout for a single generation call
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory summaries are saved into
    pub dir: PathBuf,

    /// Default save format (md, txt, json)
    pub format: String,

    /// Style terminal output with ANSI colors
    pub color: bool,
}

/// Prompt template overrides, rendered with tera.
///
/// Available variables: `code`, `language`, `prompt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub file: Option<String>,
    pub function: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM integration settings
    pub llm: LlmConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Prompt templates
    pub prompts: PromptConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            base_url: None,
            max_tokens: Some(2048),
            temperature: Some(0.3),
            timeout_secs: 120,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("summaries"),
            format: "md".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| SummarizerError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration with fallback to default
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => {
                if p.as_ref().exists() {
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
            None => {
                // Try common config file locations
                let candidates = [
                    "Summarizer.toml",
                    "summarizer.toml",
                    ".summarizer.toml",
                ];

                for candidate in &candidates {
                    if Path::new(candidate).exists() {
                        return Self::load(candidate);
                    }
                }

                Ok(Self::default())
            }
        }
    }
}
