use crate::core::boundary::{RuleSpec, Terminator::EndKeyword};

pub(super) const RULES: &[RuleSpec] = &[RuleSpec::new(
    "def ... end",
    r"(?m)^[ \t]*def[ \t]+(?:self\.)?{name}(?:[ \t]*\(|[ \t]*;|[ \t]+|[ \t]*$)",
    EndKeyword,
)];
