//! Whitespace-delimited rewrite rules.
//!
//! A [`TagPattern`] replaces every occurrence of one tag shape in a single
//! left-to-right pass. A match must be preceded and followed by an ASCII
//! whitespace character (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`); neither
//! character is part of the replaced text.

use std::borrow::Cow;
use std::fmt;

use regex::Regex;

/// Capture group holding the whitespace before a match.
const LEAD: &str = "lead";
/// Capture group holding the whitespace after a match.
const TRAIL: &str = "trail";

/// One ASCII whitespace character. `\s` alone would also accept Unicode
/// spaces such as U+00A0.
pub const WHITESPACE: &str = r"(?-u:\s)";

/// One ordered rewrite rule.
///
/// The replacement template uses the `regex` crate's expansion syntax, so
/// named groups of the body are referenced as `${name}`. Always use the
/// braced form: `$name:` would read `name:` as the group name.
///
/// # Example
///
/// ```
/// use blade_directives::TagPattern;
///
/// let pattern = TagPattern::delimited("break", r"@break", "<?php break; ?>").unwrap();
/// assert_eq!(pattern.apply(" @break @break "), " <?php break; ?> <?php break; ?> ");
/// assert_eq!(pattern.apply("@break"), "@break");
/// ```
#[derive(Clone)]
pub struct TagPattern {
    name: String,
    matcher: Regex,
    template: String,
}

impl TagPattern {
    /// Build a rule whose `body` must sit between two whitespace characters.
    ///
    /// Use [`WHITESPACE`] for whitespace inside `body` as well.
    ///
    /// The surrounding whitespace is matched but never replaced, and the
    /// trailing whitespace can serve as the leading whitespace of the next
    /// match.
    pub fn delimited(
        name: impl Into<String>,
        body: &str,
        template: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        let matcher = Regex::new(&format!(
            r"(?P<{LEAD}>{WHITESPACE})(?:{body})(?P<{TRAIL}>{WHITESPACE})"
        ))?;
        Ok(Self {
            name: name.into(),
            matcher,
            template: template.into(),
        })
    }

    /// Rule name, used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replacement template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replace every non-overlapping match, scanning left to right.
    ///
    /// Returns the input unchanged (borrowed) when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut output = String::new();
        let mut copied = 0;
        let mut pos = 0;
        let mut count = 0usize;

        while let Some(caps) = self.matcher.captures_at(text, pos) {
            let (Some(lead), Some(trail)) = (caps.name(LEAD), caps.name(TRAIL)) else {
                break;
            };

            output.push_str(&text[copied..lead.end()]);
            caps.expand(&self.template, &mut output);
            copied = trail.start();
            pos = trail.start();
            count += 1;
        }

        if count == 0 {
            return Cow::Borrowed(text);
        }

        tracing::debug!(pattern = %self.name, count, "Rewrote tags");
        output.push_str(&text[copied..]);
        Cow::Owned(output)
    }
}

impl fmt::Debug for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagPattern")
            .field("name", &self.name)
            .field("matcher", &self.matcher.as_str())
            .field("template", &self.template)
            .finish()
    }
}
