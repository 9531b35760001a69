//! Directive argument handling.
//!
//! Works on the raw text between the parentheses of `@name(...)`.

/// Separator used to split a multi-argument expression.
const ARGUMENT_SEPARATOR: &str = ", ";

/// Raw arguments of one directive invocation.
///
/// Holds the text between the outer parentheses of `@name(...)`, verbatim.
/// Nothing is parsed or validated; malformed expressions surface only when
/// the generated code is compiled by the host engine.
///
/// # Example
///
/// ```
/// use blade_directives::DirectiveArgs;
///
/// let args = DirectiveArgs::new("$sep, $arr");
/// assert_eq!(args.expression(), "$sep, $arr");
/// assert_eq!(args.split(2), vec!["$sep", "$arr"]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs<'a> {
    expression: &'a str,
}

impl<'a> DirectiveArgs<'a> {
    /// Wrap raw argument text.
    #[must_use]
    pub fn new(expression: &'a str) -> Self {
        Self { expression }
    }

    /// Raw argument text, exactly as written between the parentheses.
    #[must_use]
    pub fn expression(&self) -> &'a str {
        self.expression
    }

    /// Whether the invocation had no argument text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    /// Split the expression into `count` positional parts.
    ///
    /// Every `(` and `)` is removed first, then the text is split on the
    /// literal `", "`. Nested calls and quoted commas are not respected.
    /// Parts beyond `count` are dropped and missing parts are empty strings.
    ///
    /// ```
    /// use blade_directives::DirectiveArgs;
    ///
    /// let args = DirectiveArgs::new("$value");
    /// assert_eq!(args.split(2), vec!["$value", ""]);
    /// ```
    #[must_use]
    pub fn split(&self, count: usize) -> Vec<String> {
        let stripped = self.expression.replace(['(', ')'], "");
        let mut parts: Vec<String> = stripped
            .split(ARGUMENT_SEPARATOR)
            .take(count)
            .map(str::to_owned)
            .collect();
        parts.resize(count, String::new());
        parts
    }

    /// The expression with its first and last character removed.
    ///
    /// Used to unwrap a quoted literal such as `'home'`. Returns an empty
    /// string when the expression has fewer than two characters.
    #[must_use]
    pub fn unquoted(&self) -> &'a str {
        let mut chars = self.expression.chars();
        if chars.next().is_none() || chars.next_back().is_none() {
            return "";
        }
        chars.as_str()
    }
}
