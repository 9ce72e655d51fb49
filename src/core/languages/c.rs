//! C and C++ boundary rules

use crate::core::boundary::{RuleSpec, Terminator::BraceBlock};

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec::new(
        "return type + name",
        r"(?m)^[ \t]*(?:[\w:<>,]+[ \t*&]+)+(?:\w+::)*{name}\s*\([^)]*\)\s*(?:const\s*)?(?:noexcept\s*)?(?:override\s*)?\{",
        BraceBlock,
    ),
    // Return type on the previous line, constructors, K&R style
    RuleSpec::new(
        "name only",
        r"(?m)^[ \t]*(?:[\w:<>,]+[ \t*&]+)*(?:\w+::)*{name}\s*\([^)]*\)\s*(?:const\s*)?(?:noexcept\s*)?(?:override\s*)?\{",
        BraceBlock,
    ),
];
