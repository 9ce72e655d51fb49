use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use nu_ansi_term::{Color, Style};
use tracing::{debug, info};

use crate::config::Config;
use super::{
    create_generator, extract_function, save_summary, Generator, Language, MarkdownRenderer,
    PromptBuilder, SaveFormat, Summarizer,
};

/// Main orchestration engine: extraction, generation, rendering and saving
pub struct Engine {
    config: Config,
    summarizer: Summarizer,
    renderer: MarkdownRenderer,
    color: bool,
}

impl Engine {
    /// Build the engine and its generation client.
    ///
    /// Fails with `MissingApiKey` before anything is read or sent when no key
    /// is available from `api_key` or the configuration.
    pub fn new(config: Config, api_key: Option<String>, color: bool) -> Result<Self> {
        let generator = create_generator(&config.llm, api_key)?;
        info!(
            "✅ Using {} ({})",
            generator.provider_name(),
            generator.model_name()
        );

        Ok(Self::with_generator(config, generator, color))
    }

    /// Build an engine around an existing generator
    pub fn with_generator(config: Config, generator: Box<dyn Generator>, color: bool) -> Self {
        debug!("Loaded configuration: {:?}", config.output);

        let prompts = PromptBuilder::new(&config.prompts);
        Self {
            summarizer: Summarizer::new(generator, prompts),
            renderer: MarkdownRenderer::new(color),
            config,
            color,
        }
    }

    /// Extract `name` from `path` and summarize just that function
    pub async fn summarize_function(&self, path: &Path, name: &str) -> Result<String> {
        info!("🔍 Extracting function '{}' from {}", name, path.display());
        let code = self
            .with_spinner(format!("Extracting {}...", name), extract_function(path, name))
            .await?;
        debug!("Extracted {} bytes:\n{}", code.len(), code);

        let language = Language::from_path(path);
        self.with_spinner(
            format!("Summarizing function {}...", name),
            self.summarizer.summarize_function(&code, language),
        )
        .await
    }

    /// Summarize a whole file
    pub async fn summarize_file(&self, path: &Path) -> Result<String> {
        info!("📄 Summarizing file {}", path.display());
        self.with_spinner(
            format!("Summarizing {}...", path.display()),
            self.summarizer.summarize_file(path),
        )
        .await
    }

    /// Summarize free-form prompt text
    pub async fn summarize_prompt(&self, prompt: &str) -> Result<String> {
        info!("💬 Summarizing prompt");
        self.with_spinner(
            "Generating summary...".to_string(),
            self.summarizer.summarize_prompt(prompt),
        )
        .await
    }

    /// Print the rendered summary to stdout
    pub fn print_summary(&self, summary: &str) {
        println!("\n{}", self.paint(Color::Cyan.bold(), "📌 Summary:"));
        println!("{}\n", self.renderer.render(summary));
    }

    /// Save the summary into the configured output directory.
    ///
    /// `format` falls back to `output.format` from the configuration.
    pub fn save(&self, summary: &str, format: Option<&str>) -> Result<PathBuf> {
        let format = SaveFormat::parse(format.unwrap_or(&self.config.output.format));
        let path = save_summary(&self.config.output.dir, summary, format)?;

        println!(
            "{}",
            self.paint(Color::Green.normal(), &format!("💾 Summary saved to {}", path.display()))
        );
        Ok(path)
    }

    async fn with_spinner<T, F>(&self, message: String, task: F) -> Result<T>
    where
        F: Future<Output = crate::error::Result<T>>,
    {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));

        match task.await {
            Ok(value) => {
                spinner.finish_and_clear();
                Ok(value)
            }
            Err(e) => {
                spinner.abandon_with_message(self.paint(Color::Red.normal(), "✖ Failed"));
                Err(e.into())
            }
        }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummarizerError;
    use assert_fs::prelude::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct EchoGenerator {
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Generator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> crate::error::Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("## Summary\n- **adds** one".to_string())
        }

        fn provider_name(&self) -> &str {
            "echo"
        }

        fn model_name(&self) -> &str {
            "echo-1"
        }
    }

    fn engine(config: Config) -> (Engine, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let generator = EchoGenerator {
            prompts: Arc::clone(&prompts),
        };
        (Engine::with_generator(config, Box::new(generator), false), prompts)
    }

    #[test]
    fn test_new_without_key_fails_fast() {
        let err = Engine::new(Config::default(), None, false).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<SummarizerError>(),
            Some(SummarizerError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_function_summary_sends_only_the_function() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file = dir.child("sample.py");
        file.write_str("def helper(x):\n    return x + 1\n\ndef other():\n    pass").unwrap();

        let (engine, prompts) = engine(Config::default());
        let summary = engine.summarize_function(file.path(), "helper").await.unwrap();
        assert_eq!(summary, "## Summary\n- **adds** one");

        let sent = prompts.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("```python\ndef helper(x):\n    return x + 1\n```"));
        assert!(!sent[0].contains("def other"));
    }

    #[tokio::test]
    async fn test_missing_function_never_calls_generator() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file = dir.child("app.js");
        file.write_str("function main() {\n}\n").unwrap();

        let (engine, prompts) = engine(Config::default());
        let err = engine.summarize_function(file.path(), "missing").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SummarizerError>(),
            Some(SummarizerError::FunctionNotFound { .. })
        ));
        assert!(prompts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_save_uses_configured_directory_and_format() {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut config = Config::default();
        config.output.dir = dir.path().join("out");
        config.output.format = "txt".to_string();

        let (engine, _) = engine(config);
        let path = engine.save("**bold** text", None).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "bold text");

        let path = engine.save("**bold** text", Some("json")).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }
}
