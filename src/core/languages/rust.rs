use crate::core::boundary::{RuleSpec, Terminator::BraceBlock};

pub(super) const RULES: &[RuleSpec] = &[RuleSpec::new(
    "fn",
    r"\bfn\s+{name}\s*(?:<[^{(]*>)?\s*\([^)]*\)\s*(?:->\s*[^{]+?)?\s*(?:where\s[^{]+)?\{",
    BraceBlock,
)];
