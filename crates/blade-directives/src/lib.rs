//! Template tag rewriting for Blade-style templates.
//!
//! This crate rewrites custom tags in raw template source into PHP before the
//! host template engine compiles it. It performs no parsing of the embedded
//! expressions: argument text is copied into the generated code verbatim.
//!
//! # Pipeline
//!
//! [`TagRewriter::rewrite`] runs two phases over the whole text:
//!
//! 1. **Pattern passes** ([`TagPattern`]): whitespace-delimited rules applied
//!    one after another. The default pipeline holds the `@switch` family
//!    (`@switch`/`@case`, `@endswitch`, `@case`, `@default`, `@break`).
//!
//! 2. **Directive expansion** ([`Directives`]): every `@name(...)` tag with a
//!    registered name is replaced by its [`Expander`] output. Unknown tags
//!    are left as written for the host engine.
//!
//! # Example
//!
//! ```
//! use blade_directives::{Directives, TagRewriter};
//!
//! let rewriter = TagRewriter::new(Directives::builtin());
//!
//! let source = "
//! @switch($user->role)
//!     @case('admin')
//!         @icon('shield')
//!         @break
//!     @default
//!         @e($user->name)
//! @endswitch
//! ";
//!
//! let php = rewriter.rewrite(source);
//! assert!(php.contains("<?php switch($user->role):\n    case 'admin': ?>"));
//! assert!(php.contains(r#"<?php echo('<i class="fa fa-shield"></i>'); ?>"#));
//! assert!(php.contains("<?php endswitch; ?>"));
//! ```

pub mod directive;
mod pattern;
mod rewriter;
pub mod switch;

pub use directive::{Directive, DirectiveArgs, Directives, Expander};
pub use pattern::{TagPattern, WHITESPACE};
pub use rewriter::TagRewriter;
