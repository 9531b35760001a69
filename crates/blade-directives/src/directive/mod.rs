//! Directive registry and expansion.
//!
//! A directive is a named tag, `@name` or `@name(arguments)`, replaced by a
//! code fragment produced by its [`Expander`]. Directives come in two kinds:
//!
//! - **Simple** ([`Directive::Simple`]): one tag, e.g. `@json($user)`
//! - **Paired** ([`Directive::Paired`]): an opening and a closing tag
//!   bracketing a block, e.g. `@auth` ... `@endauth`
//!
//! # Example
//!
//! ```
//! use blade_directives::{DirectiveArgs, Directives, Expander, TagRewriter};
//!
//! let directives = Directives::builtin().with(
//!     "money",
//!     Expander::new(|args: &DirectiveArgs<'_>| {
//!         format!("<?php echo(number_format({}, 2)); ?>", args.expression())
//!     }),
//! );
//!
//! let rewriter = TagRewriter::new(directives);
//! assert_eq!(
//!     rewriter.rewrite("Total: @money($total)"),
//!     "Total: <?php echo(number_format($total, 2)); ?>"
//! );
//! ```

mod args;
pub mod builtin;
mod expander;
pub(crate) mod parser;
mod registry;
mod template;

pub use args::DirectiveArgs;
pub use expander::Expander;
pub use registry::{Directive, Directives};
