//! Java and C# boundary rules
//!
//! Both languages declare methods as modifiers, a return type, the name and a
//! parameter list; Java may add a `throws` clause and C# a `where` clause.

use crate::core::boundary::{RuleSpec, Terminator::BraceBlock};

pub(super) const RULES: &[RuleSpec] = &[RuleSpec::new(
    "method declaration",
    concat!(
        r"(?m)^[ \t]*",
        r"(?:(?:public|private|protected|internal|static|final|virtual|override|abstract|async|synchronized|sealed|extern|unsafe|new|partial|default|native)\s+)*",
        r"(?:<[^>\n]*>\s+)?",
        r"(?:[\w.?]+(?:<[^\n(]*?>)?(?:\[\])*\??\s+)?",
        r"{name}\s*(?:<[^>\n]*>)?\s*\([^)]*\)\s*",
        r"(?:throws\s+[\w.]+(?:\s*,\s*[\w.]+)*\s*)?",
        r"(?:where\s+[^{]+)?\{",
    ),
    BraceBlock,
)];
