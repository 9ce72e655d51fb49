//! Boundary rules: where a function definition starts and where it ends.
//!
//! A rule pairs a header regex (the syntactic shape that opens a definition)
//! with a [`Terminator`] deciding where the definition stops. Headers are
//! plain `regex` patterns; termination is done by scanning lines, since the
//! `regex` crate has no lookahead.

use regex::Regex;

use crate::error::Result;

/// Placeholder replaced by the escaped function name in header templates
const NAME_PLACEHOLDER: &str = "{name}";

/// How a matched definition is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// First line after the header that is a lone `}` at column zero
    /// (a trailing `;` is tolerated, as in `};`).
    BraceBlock,

    /// Stops before the first blank line, column-zero line, or `def`/`class`
    /// line following the header. Runs to end of file otherwise.
    IndentBlock,

    /// Stops before the first non-blank line indented at most `max_indent`
    /// columns. Runs to end of file otherwise.
    DedentBlock { max_indent: usize },

    /// First `end` line indented no deeper than the header line.
    EndKeyword,
}

/// Static description of a rule, before the function name is known
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub label: &'static str,
    pub header: &'static str,
    pub terminator: Terminator,
}

impl RuleSpec {
    pub const fn new(label: &'static str, header: &'static str, terminator: Terminator) -> Self {
        Self { label, header, terminator }
    }

    /// Compile the header for an already-escaped function name
    pub fn compile(&self, escaped_name: &str) -> Result<BoundaryRule> {
        let pattern = self.header.replace(NAME_PLACEHOLDER, escaped_name);
        Ok(BoundaryRule {
            label: self.label,
            header: Regex::new(&pattern)?,
            terminator: self.terminator,
        })
    }
}

/// A rule compiled for one function name
#[derive(Debug, Clone)]
pub struct BoundaryRule {
    label: &'static str,
    header: Regex,
    terminator: Terminator,
}

impl BoundaryRule {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Find the first definition this rule recognizes in `source`.
    ///
    /// Header occurrences are tried in order; the first one whose terminator
    /// succeeds is returned, trimmed.
    pub fn find<'a>(&self, source: &'a str) -> Option<&'a str> {
        self.header.find_iter(source).find_map(|m| {
            self.terminator
                .block_end(source, m.start(), m.end())
                .map(|end| source[m.start()..end].trim())
        })
    }
}

impl Terminator {
    /// Byte offset where the block opened by the header at
    /// `header_start..header_end` ends, or `None` if it never closes.
    fn block_end(self, source: &str, header_start: usize, header_end: usize) -> Option<usize> {
        let body_start = next_line_start(source, header_end);

        match self {
            Terminator::BraceBlock => lines_from(source, body_start)
                .find(|(_, line)| is_closing_brace_line(line))
                .map(|(start, line)| start + line.trim_end().len()),

            Terminator::IndentBlock => Some(
                lines_from(source, body_start)
                    .find(|(_, line)| {
                        line.trim().is_empty()
                            || !starts_indented(line)
                            || is_definition_line(line.trim_start())
                    })
                    .map(|(start, _)| start)
                    .unwrap_or(source.len()),
            ),

            Terminator::DedentBlock { max_indent } => Some(
                lines_from(source, body_start)
                    .find(|(_, line)| !line.trim().is_empty() && indentation(line) <= max_indent)
                    .map(|(start, _)| start)
                    .unwrap_or(source.len()),
            ),

            Terminator::EndKeyword => {
                let header_indent = indentation(&source[line_start(source, header_start)..]);
                lines_from(source, body_start)
                    .find(|(_, line)| is_end_line(line) && indentation(line) <= header_indent)
                    .map(|(start, line)| start + indentation(line) + "end".len())
            }
        }
    }
}

/// Iterate `(byte offset, line)` pairs starting at `from`, which must be a
/// line start. Lines exclude their trailing `\n`.
fn lines_from<'a>(source: &'a str, from: usize) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    let rest = &source[from..];
    rest.split_inclusive('\n').scan(from, |offset, chunk| {
        let start = *offset;
        *offset += chunk.len();
        Some((start, chunk.trim_end_matches('\n')))
    })
}

fn next_line_start(source: &str, pos: usize) -> usize {
    match source[pos..].find('\n') {
        Some(i) => pos + i + 1,
        None => source.len(),
    }
}

fn line_start(source: &str, pos: usize) -> usize {
    source[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn starts_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

fn is_closing_brace_line(line: &str) -> bool {
    match line.strip_prefix('}') {
        Some(rest) => matches!(rest.trim(), "" | ";"),
        None => false,
    }
}

fn is_definition_line(trimmed: &str) -> bool {
    ["def ", "class ", "async def "]
        .iter()
        .any(|kw| trimmed.starts_with(kw))
}

fn is_end_line(line: &str) -> bool {
    match line.trim_start().strip_prefix("end") {
        Some(rest) => rest.trim().is_empty() || rest.starts_with([' ', '\t', '#', ';', '\r']),
        None => false,
    }
}
