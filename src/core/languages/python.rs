use crate::core::boundary::{
    RuleSpec,
    Terminator::{DedentBlock, IndentBlock},
};

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec::new(
        "def",
        r"\bdef\s+{name}\s*\((?s:.*?)\)\s*(?:->[^:\n]+)?:",
        IndentBlock,
    ),
    RuleSpec::new(
        "async def",
        r"\basync\s+def\s+{name}\s*\((?s:.*?)\)\s*(?:->[^:\n]+)?:",
        IndentBlock,
    ),
    // Loose header for signatures the first two miss; ends at the first line
    // back at method level.
    RuleSpec::new("def, dedent", r"\bdef\s+{name}(?:\W|$)", DedentBlock { max_indent: 4 }),
];
