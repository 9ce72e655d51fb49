//! Language classification and per-language boundary rules
//!
//! Each language gets its own module holding an ordered rule table. Order is
//! priority: the most specific shape comes first, the most permissive last.

mod c;
mod generic;
mod go;
mod java;
mod javascript;
mod kotlin;
mod php;
mod python;
mod ruby;
mod rust;
mod swift;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::Result;
use super::boundary::{BoundaryRule, RuleSpec};

/// Language identity derived from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Cpp,
    C,
    CSharp,
    Php,
    Ruby,
    Go,
    Rust,
    Kotlin,
    Swift,
    Unknown,
}

impl Language {
    /// Classify an extension, with or without the leading dot.
    ///
    /// Comparison is case-insensitive; anything unrecognized is `Unknown`.
    pub fn from_extension(extension: &str) -> Self {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Language::TypeScript,
            "py" | "pyw" => Language::Python,
            "java" => Language::Java,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Language::Cpp,
            "c" | "h" => Language::C,
            "cs" => Language::CSharp,
            "php" => Language::Php,
            "rb" => Language::Ruby,
            "go" => Language::Go,
            "rs" => Language::Rust,
            "kt" | "kts" => Language::Kotlin,
            "swift" => Language::Swift,
            _ => Language::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Kotlin => "kotlin",
            Language::Swift => "swift",
            Language::Unknown => "unknown",
        }
    }

    /// Info string for a markdown code fence
    pub fn fence_tag(&self) -> &'static str {
        match self {
            Language::Unknown => "",
            other => other.as_str(),
        }
    }

    fn rule_specs(&self) -> &'static [RuleSpec] {
        match self {
            Language::JavaScript | Language::TypeScript => javascript::RULES,
            Language::Python => python::RULES,
            Language::Java | Language::CSharp => java::RULES,
            Language::Cpp | Language::C => c::RULES,
            Language::Php => php::RULES,
            Language::Ruby => ruby::RULES,
            Language::Go => go::RULES,
            Language::Rust => rust::RULES,
            Language::Kotlin => kotlin::RULES,
            Language::Swift => swift::RULES,
            Language::Unknown => generic::RULES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered boundary rules for `function_name` in `language`.
///
/// The name is regex-escaped before it is interpolated, so it always matches
/// literally.
pub fn patterns_for(language: Language, function_name: &str) -> Result<Vec<BoundaryRule>> {
    let escaped = regex::escape(function_name);
    language
        .rule_specs()
        .iter()
        .map(|spec| spec.compile(&escaped))
        .collect()
}

#[cfg(test)]
pub(crate) fn first_match(language: Language, source: &str, name: &str) -> Option<String> {
    super::extractor::find_function(source, language, name).unwrap()
}
