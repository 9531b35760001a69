//! Tag rewriter.
//!
//! Runs the ordered pattern passes, then expands registered directives.

use std::borrow::Cow;

use crate::directive::parser::find_tag;
use crate::{Directives, TagPattern, switch};

/// Rewrites custom tags in template source into host-language code.
///
/// Holds its pattern passes and directive registry immutably, so one
/// rewriter can be shared by reference between threads.
///
/// # Example
///
/// ```
/// use blade_directives::{Directives, TagRewriter};
///
/// let rewriter = TagRewriter::new(Directives::builtin());
/// let output = rewriter.rewrite("<p>@e($name)</p>");
/// assert_eq!(output, "<p><?php echo(e($name)); ?></p>");
/// ```
#[derive(Clone, Debug)]
pub struct TagRewriter {
    patterns: Vec<TagPattern>,
    directives: Directives,
}

impl Default for TagRewriter {
    fn default() -> Self {
        Self::new(Directives::builtin())
    }
}

impl TagRewriter {
    /// Create a rewriter with the `@switch` passes installed.
    #[must_use]
    pub fn new(directives: Directives) -> Self {
        Self {
            patterns: switch::switch_patterns(),
            directives,
        }
    }

    /// Create a rewriter without any pattern passes.
    #[must_use]
    pub fn without_switch(directives: Directives) -> Self {
        Self {
            patterns: Vec::new(),
            directives,
        }
    }

    /// Append a pattern pass. Passes run in the order they were added.
    #[must_use]
    pub fn with_pattern(mut self, pattern: TagPattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Pattern passes in execution order.
    #[must_use]
    pub fn patterns(&self) -> &[TagPattern] {
        &self.patterns
    }

    /// The directive registry.
    #[must_use]
    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    /// Rewrite one template source.
    ///
    /// Never fails. Text without recognised tags is returned unchanged;
    /// unknown tags are left as written.
    #[must_use]
    pub fn rewrite(&self, source: &str) -> String {
        let mut text = Cow::Borrowed(source);

        for pattern in &self.patterns {
            let rewritten = match pattern.apply(&text) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(s) = rewritten {
                text = Cow::Owned(s);
            }
        }

        if self.directives.is_empty() {
            return text.into_owned();
        }
        self.expand_directives(&text)
    }

    fn expand_directives(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut copied = 0;
        let mut pos = 0;

        while let Some(tag) = find_tag(text, pos) {
            pos = tag.end;

            if tag.escaped {
                continue;
            }

            let Some(expander) = self.directives.lookup(tag.name) else {
                tracing::trace!(tag = tag.name, "Unknown directive left unchanged");
                continue;
            };

            output.push_str(&text[copied..tag.start]);
            output.push_str(&expander.expand(&tag.args));
            copied = tag.end;
        }

        output.push_str(&text[copied..]);
        output
    }
}
