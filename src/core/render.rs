//! Lightweight terminal rendering of the model's markdown replies
//!
//! This is not a markdown parser: each construct is rewritten with a regex,
//! line by line, the way a quick terminal preview needs. Fenced code blocks
//! are cut out first so their contents are never restyled.

use nu_ansi_term::{Color, Style};
use regex::{Captures, Regex};

pub struct MarkdownRenderer {
    color: bool,
    rules: RenderRules,
}

struct RenderRules {
    fenced_code: Regex,
    h3: Regex,
    h2: Regex,
    h1: Regex,
    rule: Regex,
    inline_code: Regex,
    bold: Regex,
    bold_underscore: Regex,
    bullet: Regex,
    numbered: Regex,
    italic: Regex,
    italic_underscore: Regex,
    link: Regex,
    strikethrough: Regex,
    quote: Regex,
    blank_runs: Regex,
    whitespace_lines: Regex,
}

impl RenderRules {
    fn new() -> Self {
        Self {
            fenced_code: Regex::new(r"```(\w+)?[^\n]*\n([\s\S]*?)```").expect("Invalid fenced code regex"),
            h3: Regex::new(r"(?m)^### (.*)$").expect("Invalid h3 regex"),
            h2: Regex::new(r"(?m)^## (.*)$").expect("Invalid h2 regex"),
            h1: Regex::new(r"(?m)^# (.*)$").expect("Invalid h1 regex"),
            rule: Regex::new(r"(?m)^[ \t]*[*\-_]{3,}[ \t]*$").expect("Invalid horizontal rule regex"),
            inline_code: Regex::new(r"`([^`\n]+)`").expect("Invalid inline code regex"),
            bold: Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"),
            bold_underscore: Regex::new(r"__(.*?)__").expect("Invalid bold regex"),
            bullet: Regex::new(r"(?m)^[ \t]*[*\-+][ \t]+(.+)$").expect("Invalid bullet regex"),
            numbered: Regex::new(r"(?m)^([ \t]*)(\d+)\.[ \t]+(.+)$").expect("Invalid numbered list regex"),
            italic: Regex::new(r"\*([^*\n]+)\*").expect("Invalid italic regex"),
            italic_underscore: Regex::new(r"(^|[\s(])_([^_\n]+)_([\s).,;:!?]|$)")
                .expect("Invalid italic regex"),
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"),
            strikethrough: Regex::new(r"~~(.*?)~~").expect("Invalid strikethrough regex"),
            quote: Regex::new(r"(?m)^[ \t]*>[ \t]*(.+)$").expect("Invalid blockquote regex"),
            blank_runs: Regex::new(r"\n{3,}").expect("Invalid blank line regex"),
            whitespace_lines: Regex::new(r"(?m)^[ \t]+$").expect("Invalid whitespace regex"),
        }
    }
}

impl MarkdownRenderer {
    /// `color` false renders the same layout without ANSI escapes
    pub fn new(color: bool) -> Self {
        Self {
            color,
            rules: RenderRules::new(),
        }
    }

    pub fn render(&self, markdown: &str) -> String {
        let mut out = String::with_capacity(markdown.len());
        let mut last = 0;

        for caps in self.rules.fenced_code.captures_iter(markdown) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&self.render_prose(&markdown[last..whole.start()]));

            let lang = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let code = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            out.push_str(&self.render_code(lang, code));
            last = whole.end();
        }
        out.push_str(&self.render_prose(&markdown[last..]));

        let out = self.rules.blank_runs.replace_all(&out, "\n\n");
        let out = self.rules.whitespace_lines.replace_all(&out, "");
        out.trim().to_string()
    }

    fn render_code(&self, lang: &str, code: &str) -> String {
        let label = if lang.is_empty() {
            String::new()
        } else {
            self.paint(Style::new().dimmed(), &format!("[{}]", lang))
        };
        format!("\n{}\n{}\n", label, self.paint(Color::DarkGray.normal(), code.trim()))
    }

    fn render_prose(&self, text: &str) -> String {
        let r = &self.rules;

        // Links first: the escapes the other rules insert contain `[`
        let text = r.link.replace_all(text, |c: &Captures| {
            format!(
                "{}{}",
                self.paint(Color::Blue.underline(), &c[1]),
                self.paint(Style::new().dimmed(), &format!(" ({})", &c[2]))
            )
        });
        let text = r.h3.replace_all(&text, |c: &Captures| {
            format!("\n{}\n", self.paint(Color::Blue.bold(), &format!("🔧 {}", &c[1])))
        });
        let text = r.h2.replace_all(&text, |c: &Captures| {
            format!("\n{}\n", self.paint(Color::Cyan.bold(), &format!("📋 {}", &c[1])))
        });
        let text = r.h1.replace_all(&text, |c: &Captures| {
            format!("\n{}\n", self.paint(Color::Magenta.bold(), &format!("🎯 {}", &c[1])))
        });
        let text = r.rule.replace_all(&text, |_: &Captures| {
            self.paint(Color::DarkGray.normal(), &"─".repeat(50))
        });
        let text = r.inline_code.replace_all(&text, |c: &Captures| {
            self.paint(Color::LightGray.reverse(), &format!(" {} ", &c[1]))
        });
        let text = r.bold.replace_all(&text, |c: &Captures| self.paint(Color::Yellow.bold(), &c[1]));
        let text = r.bold_underscore.replace_all(&text, |c: &Captures| self.paint(Color::Yellow.bold(), &c[1]));
        let text = r.bullet.replace_all(&text, |c: &Captures| {
            format!("{}{}", self.paint(Color::Green.normal(), "  • "), &c[1])
        });
        let text = r.numbered.replace_all(&text, |c: &Captures| {
            format!("{}{} {}", &c[1], self.paint(Color::Blue.normal(), &format!("{}.", &c[2])), &c[3])
        });
        let text = r.italic.replace_all(&text, |c: &Captures| self.paint(Style::new().italic(), &c[1]));
        let text = r.italic_underscore.replace_all(&text, |c: &Captures| {
            format!("{}{}{}", &c[1], self.paint(Style::new().italic(), &c[2]), &c[3])
        });
        let text = r.strikethrough.replace_all(&text, |c: &Captures| {
            self.paint(Style::new().strikethrough(), &c[1])
        });
        let text = r.quote.replace_all(&text, |c: &Captures| {
            format!(
                "{}{}",
                self.paint(Color::DarkGray.normal(), "│ "),
                self.paint(Color::DarkGray.italic(), &c[1])
            )
        });

        text.into_owned()
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}
