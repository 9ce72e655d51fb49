use crate::core::boundary::{RuleSpec, Terminator::BraceBlock};

pub(super) const RULES: &[RuleSpec] = &[RuleSpec::new(
    "fun",
    r"\bfun\s+(?:<[^>]*>\s*)?(?:[\w.]+\.)?{name}\s*\([^)]*\)\s*(?::\s*[^{=]+?)?\s*\{",
    BraceBlock,
)];
