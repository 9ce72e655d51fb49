//! Fallback rules for files whose extension is not recognized

use crate::core::boundary::{
    RuleSpec,
    Terminator::{BraceBlock, IndentBlock},
};

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec::new("function keyword", r"\bfunction\s+{name}\s*\([^)]*\)\s*\{", BraceBlock),
    RuleSpec::new("def keyword", r"\bdef\s+{name}\s*\((?s:.*?)\)[^:\n]*:", IndentBlock),
    RuleSpec::new("bare call", r"(?m)(?:^|[ \t]){name}\s*\([^)]*\)\s*\{", BraceBlock),
];

#[cfg(test)]
mod tests {
    use super::super::{first_match, Language};

    #[test]
    fn test_def_style() {
        let source = "def area(r):\n    return 3.14 * r * r\n";
        assert_eq!(
            first_match(Language::Unknown, source, "area").as_deref(),
            Some("def area(r):\n    return 3.14 * r * r")
        );
    }

    #[test]
    fn test_bare_call_style() {
        let source = "int square(int x) {\n  return x * x;\n}\n";
        assert_eq!(
            first_match(Language::Unknown, source, "square").as_deref(),
            Some("square(int x) {\n  return x * x;\n}")
        );
    }

    #[test]
    fn test_keyword_beats_bare_call() {
        let source = "function run(job) {\n  job();\n}\n";
        let found = first_match(Language::Unknown, source, "run").unwrap();
        assert!(found.starts_with("function run(job)"));
    }
}
