//! Expansion functions.
//!
//! An [`Expander`] turns the raw arguments of one tag into the code
//! fragment that replaces it.

use std::fmt;
use std::sync::Arc;

use super::DirectiveArgs;
use super::template::Template;

type ExpandFn = dyn Fn(&DirectiveArgs<'_>) -> String + Send + Sync;

/// Pure function from directive arguments to an output code fragment.
///
/// Expanders are cheap to clone and safe to share between threads.
///
/// # Example
///
/// ```
/// use blade_directives::{DirectiveArgs, Expander};
///
/// let json = Expander::new(|args| {
///     format!("<?php echo(json_encode({})); ?>", args.expression())
/// });
/// assert_eq!(
///     json.expand(&DirectiveArgs::new("$user")),
///     "<?php echo(json_encode($user)); ?>"
/// );
/// ```
pub struct Expander {
    func: Arc<ExpandFn>,
}

impl Expander {
    /// Create an expander from a closure.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&DirectiveArgs<'_>) -> String + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Create an expander that ignores its arguments.
    pub fn fixed(output: impl Into<String>) -> Self {
        let output = output.into();
        Self::new(move |_| output.clone())
    }

    /// Create an expander from a declarative template.
    ///
    /// Recognised placeholders:
    ///
    /// - `{expression}` - the raw argument text
    /// - `{unquoted}` - the argument text without its first and last character
    /// - `{0}` .. `{9}` - positional parts split on `", "`
    /// - `{{` and `}}` - literal braces
    ///
    /// Anything else is emitted verbatim.
    ///
    /// ```
    /// use blade_directives::{DirectiveArgs, Expander};
    ///
    /// let set = Expander::template("<?php {0} = {1}; ?>");
    /// assert_eq!(set.expand(&DirectiveArgs::new("$a, 1")), "<?php $a = 1; ?>");
    /// ```
    pub fn template(template: &str) -> Self {
        let template = Template::parse(template);
        Self::new(move |args| template.render(args))
    }

    /// Produce the code fragment for `args`.
    #[must_use]
    pub fn expand(&self, args: &DirectiveArgs<'_>) -> String {
        (self.func)(args)
    }
}

impl Clone for Expander {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
        }
    }
}

impl fmt::Debug for Expander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander").finish_non_exhaustive()
    }
}
