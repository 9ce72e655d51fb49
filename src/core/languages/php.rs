use crate::core::boundary::{RuleSpec, Terminator::BraceBlock};

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec::new(
        "function",
        r"\bfunction\s+&?{name}\s*\([^)]*\)(?:\s*:\s*\??[\w\\|]+)?\s*\{",
        BraceBlock,
    ),
    RuleSpec::new(
        "method with visibility",
        r"(?m)^[ \t]*(?:(?:abstract|final)\s+)?(?:public|private|protected)(?:\s+static)?\s+function\s+&?{name}\s*\([^)]*\)(?:\s*:\s*\??[\w\\|]+)?\s*\{",
        BraceBlock,
    ),
];

#[cfg(test)]
mod tests {
    use super::super::{first_match, Language};

    #[test]
    fn test_function_with_return_type() {
        let source = "<?php\n\nfunction slugify(string $title): string\n{\n    return strtolower(trim($title));\n}\n";
        assert_eq!(
            first_match(Language::Php, source, "slugify").as_deref(),
            Some("function slugify(string $title): string\n{\n    return strtolower(trim($title));\n}")
        );
    }

    #[test]
    fn test_missing_function() {
        let source = "<?php\nfunction a() {\n}\n";
        assert_eq!(first_match(Language::Php, source, "b"), None);
    }
}
