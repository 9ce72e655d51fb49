use clap::Parser;
use std::path::PathBuf;
use anyhow::{bail, Result};

use crate::core::Engine;

const AFTER_HELP: &str = "\
Examples:
  Summarize a whole file:
    summarizer -f ./src/utils.js --apikey YOUR_KEY

  Summarize one function:
    summarizer -f ./utils/helpers.js -n validateEmail --apikey YOUR_KEY

  Save the summary as markdown:
    summarizer -f ./components/Login.tsx --save --format md

  Summarize a free-form prompt:
    summarizer \"Explain JWT authentication flow\"

  Save as JSON:
    summarizer -f ./api/routes.js --save --format json

Output formats (with --save):
  md    Markdown, as returned by the model (default)
  txt   Plain text with markdown syntax removed
  json  {\"summary\": \"...\"} for programmatic use

Supported languages for --function:
  JavaScript, TypeScript, Python, Java, C/C++, C#, PHP, Ruby, Go, Rust,
  Kotlin, Swift. Other extensions fall back to generic function patterns.

API key:
  Get a key from https://ai.google.dev/ and pass it with --apikey, set
  GEMINI_API_KEY, or put it in [llm] api_key in summarizer.toml.

Notes:
  Summaries are saved under ./summaries/ unless [output] dir says otherwise.

Troubleshooting:
  API key error       check the key is valid and has quota
  File not found      check the path and its permissions
  Function not found  check the spelling and case of the function name";

#[derive(Parser, Debug)]
#[command(name = "summarizer")]
#[command(about = "Summarize a source file, a single function, or a prompt with an LLM")]
#[command(after_long_help = AFTER_HELP)]
#[command(version)]
pub struct Cli {
    /// Prompt text to summarize
    pub prompt: Option<String>,

    /// Source file to summarize
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Summarize only this function of --file
    #[arg(short = 'n', long, requires = "file")]
    pub function: Option<String>,

    /// Save the summary to the output directory
    #[arg(long)]
    pub save: bool,

    /// Save format (md, txt, json)
    #[arg(long)]
    pub format: Option<String>,

    /// API key for the generation service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub apikey: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// What a single invocation summarizes
#[derive(Debug, PartialEq, Eq)]
pub enum Request {
    Function { file: PathBuf, name: String },
    File(PathBuf),
    Prompt(String),
}

impl Cli {
    /// Resolve the arguments to one request: function, then file, then prompt.
    pub fn request(&self) -> Result<Request> {
        match (&self.file, &self.function, &self.prompt) {
            (Some(file), Some(name), _) => Ok(Request::Function {
                file: file.clone(),
                name: name.clone(),
            }),
            (Some(file), None, _) => Ok(Request::File(file.clone())),
            (None, _, Some(prompt)) if !prompt.trim().is_empty() => Ok(Request::Prompt(prompt.clone())),
            _ => bail!("Please provide a prompt or file path"),
        }
    }

    pub async fn execute(self, engine: Engine) -> Result<()> {
        let summary = match self.request()? {
            Request::Function { file, name } => engine.summarize_function(&file, &name).await?,
            Request::File(file) => engine.summarize_file(&file).await?,
            Request::Prompt(prompt) => engine.summarize_prompt(&prompt).await?,
        };

        engine.print_summary(&summary);

        if self.save {
            engine.save(&summary, self.format.as_deref())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("summarizer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_function_takes_priority() {
        let cli = parse(&["ignored prompt", "-f", "src/app.js", "-n", "main"]);
        assert_eq!(
            cli.request().unwrap(),
            Request::Function {
                file: PathBuf::from("src/app.js"),
                name: "main".to_string()
            }
        );
    }

    #[test]
    fn test_file_before_prompt() {
        let cli = parse(&["ignored prompt", "--file", "lib.rs"]);
        assert_eq!(cli.request().unwrap(), Request::File(PathBuf::from("lib.rs")));
    }

    #[test]
    fn test_prompt_only() {
        let cli = parse(&["what does this do", "--save", "--format", "json"]);
        assert_eq!(cli.request().unwrap(), Request::Prompt("what does this do".to_string()));
        assert!(cli.save);
        assert_eq!(cli.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_nothing_to_summarize() {
        let err = parse(&[]).request().unwrap_err();
        assert_eq!(err.to_string(), "Please provide a prompt or file path");

        let err = parse(&["   "]).request().unwrap_err();
        assert_eq!(err.to_string(), "Please provide a prompt or file path");
    }

    #[test]
    fn test_long_help_lists_examples_and_formats() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("summarizer -f ./utils/helpers.js -n validateEmail"));
        assert!(help.contains("Output formats"));
        assert!(help.contains("Supported languages"));
        assert!(help.contains("Troubleshooting"));
    }

    #[test]
    fn test_function_requires_file() {
        let result = Cli::try_parse_from(["summarizer", "--function", "main"]);
        assert!(result.is_err());
    }
}
