use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::error::Result;

/// Format a summary is saved in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Markdown,
    Text,
    Json,
}

impl SaveFormat {
    /// Parse a format name; anything unrecognized is markdown.
    pub fn parse(format: &str) -> Self {
        match format.trim().to_ascii_lowercase().as_str() {
            "md" => SaveFormat::Markdown,
            "txt" => SaveFormat::Text,
            "json" => SaveFormat::Json,
            other => {
                debug!("Unknown save format '{}', using md", other);
                SaveFormat::Markdown
            }
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SaveFormat::Markdown => "md",
            SaveFormat::Text => "txt",
            SaveFormat::Json => "json",
        }
    }

    /// File content for `summary` in this format
    pub fn render(&self, summary: &str) -> Result<String> {
        match self {
            SaveFormat::Markdown => Ok(summary.to_string()),
            SaveFormat::Text => Ok(strip_markdown(summary)),
            SaveFormat::Json => Ok(serde_json::to_string_pretty(&SummaryEnvelope { summary })?),
        }
    }
}

#[derive(Serialize)]
struct SummaryEnvelope<'a> {
    summary: &'a str,
}

/// Write `summary` to `<dir>/summary_<unix-millis>.<ext>`, creating `dir`
/// if needed. Returns the written path.
pub fn save_summary<P: AsRef<Path>>(dir: P, summary: &str, format: SaveFormat) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let file_name = format!(
        "summary_{}.{}",
        chrono::Utc::now().timestamp_millis(),
        format.extension()
    );
    let path = dir.join(file_name);

    std::fs::write(&path, format.render(summary)?)?;
    info!("Saved summary to {}", path.display());

    Ok(path)
}

struct StripRules {
    fenced_code: Regex,
    inline_code: Regex,
    bold: Regex,
    italic: Regex,
    link: Regex,
    heading: Regex,
    bullet: Regex,
    numbered: Regex,
    quote: Regex,
    blank_runs: Regex,
}

fn strip_rules() -> &'static StripRules {
    static RULES: OnceLock<StripRules> = OnceLock::new();
    RULES.get_or_init(|| StripRules {
        fenced_code: Regex::new(r"```[\s\S]*?```").expect("Invalid fenced code regex"),
        inline_code: Regex::new(r"`([^`]+)`").expect("Invalid inline code regex"),
        bold: Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"),
        italic: Regex::new(r"\*(.*?)\*").expect("Invalid italic regex"),
        link: Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("Invalid link regex"),
        heading: Regex::new(r"(?m)^#+\s*").expect("Invalid heading regex"),
        bullet: Regex::new(r"(?m)^[ \t]*[*\-+][ \t]*").expect("Invalid bullet regex"),
        numbered: Regex::new(r"(?m)^[ \t]*\d+\.[ \t]*").expect("Invalid numbered list regex"),
        quote: Regex::new(r"(?m)^[ \t]*>[ \t]*").expect("Invalid blockquote regex"),
        blank_runs: Regex::new(r"\n{2,}").expect("Invalid blank line regex"),
    })
}

/// Remove markdown syntax for plain-text output. Fenced code blocks are
/// dropped entirely.
pub fn strip_markdown(text: &str) -> String {
    let rules = strip_rules();

    let text = rules.fenced_code.replace_all(text, "");
    let text = rules.inline_code.replace_all(&text, "$1");
    let text = rules.bold.replace_all(&text, "$1");
    let text = rules.italic.replace_all(&text, "$1");
    let text = rules.link.replace_all(&text, "$1");
    let text = rules.heading.replace_all(&text, "");
    let text = rules.bullet.replace_all(&text, "");
    let text = rules.numbered.replace_all(&text, "");
    let text = rules.quote.replace_all(&text, "");
    let text = rules.blank_runs.replace_all(&text, "\n");

    text.trim().to_string()
}
