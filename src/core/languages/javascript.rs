//! JavaScript/TypeScript boundary rules
//!
//! TypeScript shares the table; return-type annotations and generic
//! parameter lists are accepted as optional parts of each header.

use crate::core::boundary::{RuleSpec, Terminator::BraceBlock};

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec::new(
        "function declaration",
        r"\bfunction\s+{name}\s*(?:<[^>(]*>)?\s*\([^)]*\)(?:\s*:\s*[^{;=]+?)?\s*\{",
        BraceBlock,
    ),
    RuleSpec::new(
        "arrow function",
        r"\b(?:const|let|var)\s+{name}\s*(?::[^=]+)?=\s*(?:async\s*)?\([^)]*\)(?:\s*:\s*[^=]+?)?\s*=>\s*\{",
        BraceBlock,
    ),
    RuleSpec::new(
        "arrow function, bare parameter",
        r"\b(?:const|let|var)\s+{name}\s*=\s*(?:async\s+)?[A-Za-z_$][\w$]*\s*=>\s*\{",
        BraceBlock,
    ),
    RuleSpec::new(
        "method shorthand",
        r"(?m)^[ \t]*{name}\s*\([^)]*\)(?:\s*:\s*[^{;=]+?)?\s*\{",
        BraceBlock,
    ),
    RuleSpec::new(
        "async function",
        r"\basync\s+function\s+{name}\s*(?:<[^>(]*>)?\s*\([^)]*\)(?:\s*:\s*[^{;=]+?)?\s*\{",
        BraceBlock,
    ),
    RuleSpec::new(
        "async method shorthand",
        r"(?m)^[ \t]*async\s+{name}\s*\([^)]*\)(?:\s*:\s*[^{;=]+?)?\s*\{",
        BraceBlock,
    ),
    RuleSpec::new(
        "exported function",
        r"\bexport\s+(?:default\s+)?(?:async\s+)?function\s+{name}\s*\([^)]*\)(?:\s*:\s*[^{;=]+?)?\s*\{",
        BraceBlock,
    ),
];

#[cfg(test)]
mod tests {
    use super::super::{first_match, Language};

    #[test]
    fn test_function_declaration() {
        let source = r#"import fs from 'fs';

function readConfig(path) {
  const raw = fs.readFileSync(path, 'utf-8');
  if (!raw) {
    return {};
  }
  return JSON.parse(raw);
}

function other() {
  return 2;
}
"#;
        let found = first_match(Language::JavaScript, source, "readConfig").unwrap();
        assert!(found.starts_with("function readConfig(path) {"));
        assert!(found.ends_with("return JSON.parse(raw);\n}"));
        assert!(!found.contains("other"));
    }

    #[test]
    fn test_arrow_functions() {
        let source = "const add = (a, b) => {\n  return a + b;\n};\n\nlet double = x => {\n  return x * 2;\n};\n";
        assert_eq!(
            first_match(Language::JavaScript, source, "add").as_deref(),
            Some("const add = (a, b) => {\n  return a + b;\n};")
        );
        assert_eq!(
            first_match(Language::JavaScript, source, "double").as_deref(),
            Some("let double = x => {\n  return x * 2;\n};")
        );
    }

    #[test]
    fn test_async_arrow_function() {
        let source = "export const load = async (id) => {\n  return await fetch(id);\n};\n";
        assert_eq!(
            first_match(Language::JavaScript, source, "load").as_deref(),
            Some("const load = async (id) => {\n  return await fetch(id);\n};")
        );
    }

    #[test]
    fn test_method_shorthand() {
        let source = "const api = {\nping() {\n  return 'pong';\n}\n};\n";
        assert_eq!(
            first_match(Language::JavaScript, source, "ping").as_deref(),
            Some("ping() {\n  return 'pong';\n}")
        );
    }

    #[test]
    fn test_typescript_annotations() {
        let source = "function parse<T>(input: string): Result<T> {\n  return JSON.parse(input);\n}\n";
        assert_eq!(
            first_match(Language::TypeScript, source, "parse").as_deref(),
            Some("function parse<T>(input: string): Result<T> {\n  return JSON.parse(input);\n}")
        );
    }

    #[test]
    fn test_declaration_beats_earlier_shorthand() {
        let source = r#"const obj = {
helper() {
  return "shorthand";
}
};

function helper() {
  return "declared";
}
"#;
        let found = first_match(Language::JavaScript, source, "helper").unwrap();
        assert!(found.contains("declared"));
        assert!(!found.contains("shorthand"));
    }

    #[test]
    fn test_dollar_in_name_is_literal() {
        let source = "function get$value() {\n  return 1;\n}\n\nfunction getvalue() {\n  return 2;\n}\n";
        assert_eq!(
            first_match(Language::JavaScript, source, "get$value").as_deref(),
            Some("function get$value() {\n  return 1;\n}")
        );
        assert_eq!(first_match(Language::JavaScript, source, "get$").as_deref(), None);
    }

    #[test]
    fn test_dot_in_name_is_literal() {
        let source = "function doXthing() {\n  return 1;\n}\n";
        assert_eq!(first_match(Language::JavaScript, source, "do.thing"), None);
    }
}
