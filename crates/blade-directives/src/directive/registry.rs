//! Directive registry.
//!
//! Maps tag names to their expansions. Built once during setup, then handed
//! to a [`TagRewriter`](crate::TagRewriter) which only reads it.

use std::collections::{BTreeMap, HashMap};

use super::Expander;

/// One registered directive.
#[derive(Clone, Debug)]
pub enum Directive {
    /// Single tag: `@name(...)`.
    Simple(Expander),
    /// Block opened by `@open(...)` and closed by `@close`.
    ///
    /// Both tags rewrite independently; balance is checked by the host engine.
    Paired {
        /// Name of the closing tag.
        close_name: String,
        /// Expansion of the opening tag.
        open: Expander,
        /// Expansion of the closing tag.
        close: Expander,
    },
}

/// Registry of directives keyed by tag name.
///
/// Registering a name that is already taken replaces the previous entry,
/// and only that tag. When one tag of a pair is replaced, the other tag
/// stays registered as a simple directive with its own expansion.
///
/// # Example
///
/// ```
/// use blade_directives::{Directives, Expander};
///
/// let directives = Directives::new()
///     .with("dd", Expander::template("<?php dd({expression}); ?>"))
///     .with_paired(
///         "admin",
///         "endadmin",
///         Expander::fixed("<?php if($isAdmin): ?>"),
///         Expander::fixed("<?php endif; ?>"),
///     );
///
/// assert!(directives.lookup("dd").is_some());
/// assert!(directives.lookup("endadmin").is_some());
/// assert!(directives.lookup("endif").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Directives {
    entries: BTreeMap<String, Directive>,
    /// Close tag name -> open tag name of its pair.
    closers: HashMap<String, String>,
}

impl Directives {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in directive table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut directives = Self::new();
        super::builtin::register_all(&mut directives);
        directives
    }

    /// Register a simple directive, replacing any previous use of `name`.
    pub fn register(&mut self, name: impl Into<String>, expander: Expander) {
        let name = name.into();
        self.unpair(&name);
        if self
            .entries
            .insert(name.clone(), Directive::Simple(expander))
            .is_some()
        {
            tracing::debug!(directive = %name, "Directive re-registered");
        }
    }

    /// Register a paired directive, replacing any previous use of either name.
    pub fn register_paired(
        &mut self,
        open_name: impl Into<String>,
        close_name: impl Into<String>,
        open: Expander,
        close: Expander,
    ) {
        let open_name = open_name.into();
        let close_name = close_name.into();

        for name in [&open_name, &close_name] {
            self.unpair(name);
            if self.entries.remove(name).is_some() {
                tracing::debug!(directive = %name, "Directive re-registered as paired");
            }
        }

        self.closers.insert(close_name.clone(), open_name.clone());
        self.entries.insert(
            open_name,
            Directive::Paired {
                close_name,
                open,
                close,
            },
        );
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, expander: Expander) -> Self {
        self.register(name, expander);
        self
    }

    /// Builder form of [`register_paired`](Self::register_paired).
    #[must_use]
    pub fn with_paired(
        mut self,
        open_name: impl Into<String>,
        close_name: impl Into<String>,
        open: Expander,
        close: Expander,
    ) -> Self {
        self.register_paired(open_name, close_name, open, close);
        self
    }

    /// Remove a directive by its primary name (the open name for pairs).
    ///
    /// Removing a pair removes both of its tags.
    pub fn remove(&mut self, name: &str) -> Option<Directive> {
        let removed = self.entries.remove(name)?;
        if let Directive::Paired { close_name, .. } = &removed {
            self.closers.remove(close_name);
        }
        Some(removed)
    }

    /// Get a directive by its primary name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Directive> {
        self.entries.get(name)
    }

    /// Resolve a tag name to the expander that handles it.
    ///
    /// Covers simple tags and both tags of a pair.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&Expander> {
        if let Some(directive) = self.entries.get(tag) {
            return Some(match directive {
                Directive::Simple(expander) | Directive::Paired { open: expander, .. } => {
                    expander
                }
            });
        }

        let open = self.closers.get(tag)?;
        match self.entries.get(open)? {
            Directive::Paired { close, .. } => Some(close),
            Directive::Simple(_) => None,
        }
    }

    /// Iterate over registered directives, sorted by primary name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Directive)> {
        self.entries.iter().map(|(name, d)| (name.as_str(), d))
    }

    /// Sorted primary names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of registered directives (a pair counts once).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no directive is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Break up the pair `name` belongs to, if any.
    ///
    /// The other tag of the pair is kept as a simple directive, so only
    /// `name` itself is free for the caller to overwrite.
    fn unpair(&mut self, name: &str) {
        if let Some(open_name) = self.closers.remove(name) {
            if let Some(entry) = self.entries.get_mut(&open_name)
                && let Directive::Paired { open, .. } = &*entry
            {
                let simple = Directive::Simple(open.clone());
                *entry = simple;
                tracing::debug!(directive = %name, pair = %open_name, "Close tag detached from pair");
            }
            return;
        }

        if let Some(Directive::Paired {
            close_name, close, ..
        }) = self.entries.get(name)
        {
            let (close_name, simple) = (close_name.clone(), Directive::Simple(close.clone()));
            self.closers.remove(&close_name);
            tracing::debug!(directive = %name, close = %close_name, "Open tag detached from pair");
            self.entries.insert(close_name, simple);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DirectiveArgs;

    fn expand(directives: &Directives, tag: &str, expression: &str) -> Option<String> {
        directives
            .lookup(tag)
            .map(|e| e.expand(&DirectiveArgs::new(expression)))
    }

    fn auth_pair() -> Directives {
        Directives::new().with_paired(
            "auth",
            "endauth",
            Expander::fixed("<?php if(auth()->check()): ?>"),
            Expander::fixed("<?php endif; ?>"),
        )
    }

    #[test]
    fn test_empty() {
        let directives = Directives::new();
        assert!(directives.is_empty());
        assert_eq!(directives.len(), 0);
        assert!(directives.lookup("json").is_none());
    }

    #[test]
    fn test_register_and_lookup() {
        let directives = Directives::new().with("dd", Expander::template("dd({expression})"));
        assert_eq!(expand(&directives, "dd", "$x").as_deref(), Some("dd($x)"));
        assert!(matches!(directives.get("dd"), Some(Directive::Simple(_))));
    }

    #[test]
    fn test_last_write_wins() {
        let directives = Directives::new()
            .with("greet", Expander::fixed("first"))
            .with("greet", Expander::fixed("second"));

        assert_eq!(directives.len(), 1);
        assert_eq!(expand(&directives, "greet", "").as_deref(), Some("second"));
    }

    #[test]
    fn test_paired_lookup() {
        let directives = auth_pair();
        assert_eq!(directives.len(), 1);
        assert_eq!(
            expand(&directives, "auth", "").as_deref(),
            Some("<?php if(auth()->check()): ?>")
        );
        assert_eq!(
            expand(&directives, "endauth", "").as_deref(),
            Some("<?php endif; ?>")
        );
    }

    #[test]
    fn test_simple_replaces_close_tag() {
        let directives = auth_pair().with("endauth", Expander::fixed("simple"));

        assert_eq!(expand(&directives, "endauth", "").as_deref(), Some("simple"));
        assert_eq!(
            expand(&directives, "auth", "").as_deref(),
            Some("<?php if(auth()->check()): ?>")
        );
        assert!(matches!(directives.get("auth"), Some(Directive::Simple(_))));
        assert_eq!(directives.names(), vec!["auth", "endauth"]);
    }

    #[test]
    fn test_pair_replaces_simple() {
        let directives = Directives::new()
            .with("endauth", Expander::fixed("simple"))
            .with_paired(
                "auth",
                "endauth",
                Expander::fixed("open"),
                Expander::fixed("close"),
            );

        assert_eq!(expand(&directives, "endauth", "").as_deref(), Some("close"));
        assert_eq!(directives.names(), vec!["auth"]);
    }

    #[test]
    fn test_simple_replaces_open_tag() {
        let directives = auth_pair().with("auth", Expander::fixed("simple"));

        assert_eq!(expand(&directives, "auth", "").as_deref(), Some("simple"));
        assert_eq!(
            expand(&directives, "endauth", "").as_deref(),
            Some("<?php endif; ?>")
        );
        assert_eq!(directives.len(), 2);
    }

    #[test]
    fn test_detached_close_tag_can_be_paired_again() {
        let directives = auth_pair()
            .with("endauth", Expander::fixed("simple"))
            .with_paired(
                "auth",
                "endauth",
                Expander::fixed("open"),
                Expander::fixed("close"),
            );

        assert_eq!(directives.names(), vec!["auth"]);
        assert_eq!(expand(&directives, "auth", "").as_deref(), Some("open"));
        assert_eq!(expand(&directives, "endauth", "").as_deref(), Some("close"));
    }

    #[test]
    fn test_repaired_with_new_close_name() {
        let directives = auth_pair().with_paired(
            "auth",
            "stopauth",
            Expander::fixed("open"),
            Expander::fixed("close"),
        );

        assert_eq!(expand(&directives, "auth", "").as_deref(), Some("open"));
        assert_eq!(expand(&directives, "stopauth", "").as_deref(), Some("close"));
        assert_eq!(
            expand(&directives, "endauth", "").as_deref(),
            Some("<?php endif; ?>")
        );
        assert!(matches!(directives.get("endauth"), Some(Directive::Simple(_))));
    }

    #[test]
    fn test_pair_takes_over_close_tag_of_other_pair() {
        let directives = auth_pair().with_paired(
            "endauth",
            "stop",
            Expander::fixed("open"),
            Expander::fixed("close"),
        );

        assert_eq!(
            expand(&directives, "auth", "").as_deref(),
            Some("<?php if(auth()->check()): ?>")
        );
        assert_eq!(expand(&directives, "endauth", "").as_deref(), Some("open"));
        assert_eq!(expand(&directives, "stop", "").as_deref(), Some("close"));
    }

    #[test]
    fn test_remove() {
        let mut directives = auth_pair();
        assert!(directives.remove("auth").is_some());
        assert!(directives.lookup("endauth").is_none());
        assert!(directives.remove("auth").is_none());
        assert!(directives.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let directives = Directives::new()
            .with("url", Expander::fixed(""))
            .with("asset", Expander::fixed(""))
            .with("json", Expander::fixed(""));
        assert_eq!(directives.names(), vec!["asset", "json", "url"]);
    }

    #[test]
    fn test_builtin_not_empty() {
        let directives = Directives::builtin();
        assert!(directives.lookup("json").is_some());
        assert!(directives.lookup("endguest").is_some());
    }
}
