use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::config::LlmConfig;
use crate::error::{Result, SummarizerError};
use super::generator::Generator;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Factory function to create the configured generator.
///
/// `api_key` is the key given on the command line or through the
/// environment; it takes precedence over `llm.api_key`. A missing key fails
/// here, before any request is made.
pub fn create_generator(config: &LlmConfig, api_key: Option<String>) -> Result<Box<dyn Generator>> {
    let api_key = api_key
        .or_else(|| config.api_key.clone())
        .filter(|key| !key.trim().is_empty())
        .ok_or(SummarizerError::MissingApiKey)?;

    match config.provider.as_str() {
        "gemini" => Ok(Box::new(GeminiGenerator::new(config, api_key)?)),
        "openai" => Ok(Box::new(OpenAiGenerator::new(config, api_key)?)),
        _ => Err(SummarizerError::Config(format!(
            "Unsupported LLM provider: {}",
            config.provider
        ))),
    }
}

fn build_client(config: &LlmConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| SummarizerError::ExternalService(format!("Failed to create HTTP client: {}", e)))
}

/// Google Gemini provider
pub struct GeminiGenerator {
    client: Client,
    config: LlmConfig,
    api_key: String,
}

impl GeminiGenerator {
    pub fn new(config: &LlmConfig, api_key: String) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            config: config.clone(),
            api_key,
        })
    }

    /// The key travels in the `x-goog-api-key` header, never in the URL
    fn generate_url(&self) -> String {
        let base_url = self.config.base_url.as_deref().unwrap_or(GEMINI_BASE_URL);
        format!(
            "{}/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: Some(prompt.to_string()) }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: self.config.max_tokens,
                temperature: self.config.temperature,
            },
        }
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Sending {} byte prompt to Gemini model {}", prompt.len(), self.config.model);

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| SummarizerError::ExternalService(format!("Gemini request failed: {}", e.without_url())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| {
                SummarizerError::ExternalService(format!("Failed to read Gemini response: {}", e.without_url()))
            })?;

        if !status.is_success() {
            return Err(parse_gemini_error(status.as_u16(), &body));
        }

        parse_gemini_response(&body)
    }

    fn provider_name(&self) -> &str {
        "Google Gemini"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

/// Concatenate the text parts of the first candidate
fn parse_gemini_response(body: &str) -> Result<String> {
    let response: GeminiResponse = serde_json::from_str(body)?;

    if let Some(usage) = &response.usage_metadata {
        debug!(
            "Gemini usage: {} prompt tokens, {} output tokens",
            usage.prompt_token_count.unwrap_or(0),
            usage.candidates_token_count.unwrap_or(0)
        );
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(SummarizerError::ExternalService(
            "Gemini returned an empty response".to_string(),
        ));
    }

    Ok(text)
}

fn parse_gemini_error(status: u16, body: &str) -> SummarizerError {
    let message = serde_json::from_str::<GeminiErrorResponse>(body)
        .map(|e| match e.error.status {
            Some(kind) => format!("{} ({})", e.error.message, kind),
            None => e.error.message,
        })
        .unwrap_or_else(|_| body.to_string());

    SummarizerError::ExternalService(format!("Gemini API error {}: {}", status, message))
}

/// OpenAI-compatible chat completions provider
pub struct OpenAiGenerator {
    client: Client,
    config: LlmConfig,
    api_key: String,
}

impl OpenAiGenerator {
    pub fn new(config: &LlmConfig, api_key: String) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            config: config.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl Generator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let base_url = self.config.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);

        let payload = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are an expert software engineer who explains code clearly and concisely."
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": self.config.max_tokens.unwrap_or(2048),
            "temperature": self.config.temperature.unwrap_or(0.3)
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", base_url.trim_end_matches('/')))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| SummarizerError::ExternalService(format!("OpenAI API request failed: {}", e.without_url())))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SummarizerError::ExternalService(format!(
                "OpenAI API error {}: {}",
                status, error_text
            )));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| {
                SummarizerError::ExternalService(format!("Failed to parse OpenAI response: {}", e.without_url()))
            })?;

        if let Some(usage) = response_data.get("usage") {
            debug!("OpenAI tokens used: {}", usage["total_tokens"]);
        }

        response_data["choices"][0]["message"]["content"]
            .as_str()
            .filter(|content| !content.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| SummarizerError::ExternalService("OpenAI returned an empty response".to_string()))
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// Gemini wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
    status: Option<String>,
}
