use crate::core::boundary::{RuleSpec, Terminator::BraceBlock};

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec::new(
        "func",
        r"\bfunc\s+{name}\s*(?:\[[^\]]*\])?\s*\([^)]*\)\s*(?:\([^)]*\))?[^{\n]*\{",
        BraceBlock,
    ),
    RuleSpec::new(
        "method with receiver",
        r"\bfunc\s*\([^)]*\)\s*{name}\s*(?:\[[^\]]*\])?\s*\([^)]*\)\s*(?:\([^)]*\))?[^{\n]*\{",
        BraceBlock,
    ),
];
