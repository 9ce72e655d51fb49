use crate::core::boundary::{RuleSpec, Terminator::BraceBlock};

pub(super) const RULES: &[RuleSpec] = &[RuleSpec::new(
    "func",
    r"\bfunc\s+{name}\s*(?:<[^>]*>)?\s*\([^)]*\)\s*(?:async\s*)?(?:throws\s*|rethrows\s*)?(?:->\s*[^{]+?)?\s*(?:where\s[^{]+)?\{",
    BraceBlock,
)];
