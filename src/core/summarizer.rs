use std::path::Path;
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::config::PromptConfig;
use crate::error::{Result, SummarizerError};
use super::languages::Language;
use super::llm::Generator;

const FILE_TEMPLATE: &str = "Summarize the purpose and key logic of the following file. \
Use bullet points and use less emojis to make it engaging:\n\n```{{ language }}\n{{ code }}\n```";

const FUNCTION_TEMPLATE: &str = "Explain this function in detail using less emojis and examples if needed:\n\n\
```{{ language }}\n{{ code }}\n```";

const PROMPT_TEMPLATE: &str = "Summarize this prompt instruction using less emojis:\n\"{{ prompt }}\"";

/// What is being summarized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    File,
    Function,
    Prompt,
}

/// Renders the instruction sent to the model for each mode
pub struct PromptBuilder {
    templates: PromptConfig,
}

impl PromptBuilder {
    pub fn new(templates: &PromptConfig) -> Self {
        Self {
            templates: templates.clone(),
        }
    }

    /// Build the prompt for `mode`. `text` is source code for `File` and
    /// `Function`, free-form text for `Prompt`.
    pub fn build(&self, mode: SummaryMode, text: &str, language: Language) -> Result<String> {
        let template = match mode {
            SummaryMode::File => self.templates.file.as_deref().unwrap_or(FILE_TEMPLATE),
            SummaryMode::Function => self.templates.function.as_deref().unwrap_or(FUNCTION_TEMPLATE),
            SummaryMode::Prompt => self.templates.prompt.as_deref().unwrap_or(PROMPT_TEMPLATE),
        };

        let mut context = Context::new();
        context.insert("language", language.fence_tag());
        match mode {
            SummaryMode::Prompt => {
                context.insert("prompt", text);
                context.insert("code", "");
            }
            SummaryMode::File | SummaryMode::Function => {
                context.insert("code", text);
                context.insert("prompt", "");
            }
        }

        Ok(Tera::one_off(template, &context, false)?)
    }
}

/// Builds prompts and forwards them to the generator
pub struct Summarizer {
    generator: Box<dyn Generator>,
    prompts: PromptBuilder,
}

impl Summarizer {
    pub fn new(generator: Box<dyn Generator>, prompts: PromptBuilder) -> Self {
        Self { generator, prompts }
    }

    /// Summarize an already extracted function
    pub async fn summarize_function(&self, code: &str, language: Language) -> Result<String> {
        self.run(SummaryMode::Function, code, language).await
    }

    /// Summarize a whole file
    pub async fn summarize_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let code = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SummarizerError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        self.run(SummaryMode::File, &code, Language::from_path(path)).await
    }

    /// Summarize free-form prompt text
    pub async fn summarize_prompt(&self, prompt: &str) -> Result<String> {
        self.run(SummaryMode::Prompt, prompt, Language::Unknown).await
    }

    async fn run(&self, mode: SummaryMode, text: &str, language: Language) -> Result<String> {
        let prompt = self.prompts.build(mode, text, language)?;
        debug!("Built {:?} prompt ({} bytes)", mode, prompt.len());

        let summary = self.generator.generate(&prompt).await?;
        info!(
            "Received {} byte summary from {} ({})",
            summary.len(),
            self.generator.provider_name(),
            self.generator.model_name()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records prompts and replies with a fixed summary
    struct RecordingGenerator {
        prompts: Arc<Mutex<Vec<String>>>,
        reply: Result<String>,
    }

    #[async_trait]
    impl Generator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(SummarizerError::ExternalService(e.to_string())),
            }
        }

        fn provider_name(&self) -> &str {
            "recording"
        }

        fn model_name(&self) -> &str {
            "test-model"
        }
    }

    fn summarizer(reply: Result<String>) -> (Summarizer, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let generator = RecordingGenerator {
            prompts: Arc::clone(&prompts),
            reply,
        };
        let summarizer = Summarizer::new(Box::new(generator), PromptBuilder::new(&PromptConfig::default()));
        (summarizer, prompts)
    }

    #[test]
    fn test_function_prompt_embeds_code_with_fence() {
        let builder = PromptBuilder::new(&PromptConfig::default());
        let prompt = builder
            .build(SummaryMode::Function, "def f():\n    return 1", Language::Python)
            .unwrap();
        assert!(prompt.starts_with("Explain this function"));
        assert!(prompt.contains("```python\ndef f():\n    return 1\n```"));
    }

    #[test]
    fn test_code_is_not_html_escaped() {
        let builder = PromptBuilder::new(&PromptConfig::default());
        let prompt = builder
            .build(SummaryMode::File, "if (a < b && c > d) {}", Language::JavaScript)
            .unwrap();
        assert!(prompt.contains("if (a < b && c > d) {}"));
    }

    #[test]
    fn test_custom_template() {
        let templates = PromptConfig {
            prompt: Some("Q: {{ prompt }}".to_string()),
            ..PromptConfig::default()
        };
        let prompt = PromptBuilder::new(&templates)
            .build(SummaryMode::Prompt, "what is a monad", Language::Unknown)
            .unwrap();
        assert_eq!(prompt, "Q: what is a monad");
    }

    #[test]
    fn test_broken_template_is_error() {
        let templates = PromptConfig {
            file: Some("{{ code ".to_string()),
            ..PromptConfig::default()
        };
        let err = PromptBuilder::new(&templates)
            .build(SummaryMode::File, "x", Language::Unknown)
            .unwrap_err();
        assert!(matches!(err, SummarizerError::Template(_)));
    }

    #[tokio::test]
    async fn test_summarize_file_reads_and_forwards() {
        let mut file = tempfile::Builder::new().suffix(".go").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"package main\n").unwrap();

        let (summarizer, prompts) = summarizer(Ok("a Go package".to_string()));
        let summary = summarizer.summarize_file(file.path()).await.unwrap();

        assert_eq!(summary, "a Go package");
        let sent = prompts.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("```go\npackage main\n\n```"));
    }

    #[tokio::test]
    async fn test_summarize_prompt_propagates_generator_error() {
        let (summarizer, prompts) = summarizer(Err(SummarizerError::ExternalService("quota".to_string())));
        let err = summarizer.summarize_prompt("hello").await.unwrap_err();

        assert!(err.to_string().contains("quota"));
        assert_eq!(prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_summarize_missing_file() {
        let (summarizer, prompts) = summarizer(Ok(String::new()));
        let err = summarizer.summarize_file("/definitely/not/here.rs").await.unwrap_err();

        assert!(matches!(err, SummarizerError::FileRead { .. }));
        assert!(prompts.lock().unwrap().is_empty());
    }
}
