//! The `@switch` statement family.
//!
//! ```text
//! @switch($status)
//!     @case('open')
//!         Open
//!         @break
//!     @default
//!         Closed
//! @endswitch
//! ```
//!
//! PHP's alternative switch syntax does not allow output between
//! `switch(...):` and the first `case`, so the opening tag and the first
//! `@case` are rewritten together. The remaining tags are rewritten one by
//! one by later passes.

use std::sync::LazyLock;

use crate::{TagPattern, WHITESPACE};

/// `@switch(expr)` followed by its first `@case(expr)`.
static SWITCH_OPEN: LazyLock<TagPattern> = LazyLock::new(|| {
    TagPattern::delimited(
        "switch",
        &format!(r"@switch\((?P<switch>.*)\)(?P<ws>{WHITESPACE}+)@case\((?P<case>.*)\)"),
        "<?php switch(${switch}):${ws}case ${case}: ?>",
    )
    .unwrap()
});

static ENDSWITCH: LazyLock<TagPattern> = LazyLock::new(|| {
    TagPattern::delimited("endswitch", r"@endswitch", "<?php endswitch; ?>").unwrap()
});

/// Second and later `@case(expr)` tags.
static CASE: LazyLock<TagPattern> = LazyLock::new(|| {
    TagPattern::delimited("case", r"@case\((?P<case>.*)\)", "<?php case ${case}: ?>").unwrap()
});

static DEFAULT: LazyLock<TagPattern> = LazyLock::new(|| {
    TagPattern::delimited("default", r"@default", "<?php default: ?>").unwrap()
});

static BREAK: LazyLock<TagPattern> =
    LazyLock::new(|| TagPattern::delimited("break", r"@break", "<?php break; ?>").unwrap());

/// The switch passes, in the order they must run.
pub fn switch_patterns() -> Vec<TagPattern> {
    [&SWITCH_OPEN, &ENDSWITCH, &CASE, &DEFAULT, &BREAK]
        .into_iter()
        .map(|pattern| TagPattern::clone(pattern))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str) -> String {
        switch_patterns()
            .iter()
            .fold(text.to_owned(), |acc, p| p.apply(&acc).into_owned())
    }

    #[test]
    fn test_pass_order() {
        let names: Vec<_> = switch_patterns()
            .iter()
            .map(|p| p.name().to_owned())
            .collect();
        assert_eq!(names, ["switch", "endswitch", "case", "default", "break"]);
    }

    #[test]
    fn test_full_block() {
        let input = "
@switch($status)
    @case('open')
        Open
        @break
    @case('closed')
        Closed
        @break
    @default
        Unknown
@endswitch
";
        let expected = "
<?php switch($status):
    case 'open': ?>
        Open
        <?php break; ?>
    <?php case 'closed': ?>
        Closed
        <?php break; ?>
    <?php default: ?>
        Unknown
<?php endswitch; ?>
";
        assert_eq!(run(input), expected);
    }

    #[test]
    fn test_first_case_fused_with_switch() {
        assert_eq!(
            run(" @switch($a) @case(1) "),
            " <?php switch($a): case 1: ?> "
        );
    }

    #[test]
    fn test_switch_without_whitespace_before_case() {
        assert_eq!(run(" @switch($a)@case(1) "), " @switch($a)@case(1) ");
    }

    #[test]
    fn test_switch_separated_by_unicode_space() {
        assert_eq!(
            run(" @switch($a)\u{a0}@case(1) "),
            " @switch($a)\u{a0}@case(1) "
        );
    }

    #[test]
    fn test_tags_at_text_boundaries_are_kept() {
        assert_eq!(run("@break"), "@break");
        assert_eq!(run("@default\n"), "@default\n");
        assert_eq!(run("\n@endswitch"), "\n@endswitch");
        assert_eq!(run("@switch(1) @case(1) "), "@switch(1) <?php case 1: ?> ");
    }

    #[test]
    fn test_greedy_expressions_on_one_line() {
        // Both captures are greedy and do not cross lines.
        assert_eq!(
            run(" @switch(1) @case(1) @case(2) @break "),
            " <?php switch(1) @case(1): case 2: ?> <?php break; ?> "
        );
    }

    #[test]
    fn test_expression_passed_verbatim() {
        assert_eq!(
            run("\n@case($user->role === 'admin' && foo(1, 2))\n"),
            "\n<?php case $user->role === 'admin' && foo(1, 2): ?>\n"
        );
    }
}
