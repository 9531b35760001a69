//! Built-in directive table.
//!
//! Each directive names a helper function of the host framework and wraps
//! its arguments in a PHP tag. Names and expansions are kept exactly as
//! existing templates expect them.

use super::{DirectiveArgs, Directives, Expander};

/// Helpers whose result is echoed: `@name(x)` -> `<?php echo(name(x)); ?>`.
pub const ECHO_HELPERS: &[&str] = &[
    "camel_case",
    "class_basename",
    "e",
    "ends_with",
    "snake_case",
    "str_limit",
    "starts_with",
    "str_contains",
    "str_finish",
    "str_is",
    "str_plural",
    "str_random",
    "str_replace_first",
    "str_replace_last",
    "str_singular",
    "str_slug",
    "studly_case",
    "title_case",
    "action",
    "asset",
    "secure_asset",
    "route",
    "secure_url",
    "url",
    "method_field",
    "env",
    "bcrypt",
];

/// Helpers called as statements: `@name(x)` -> `<?php name(x); ?>`.
pub const STATEMENT_HELPERS: &[&str] = &["var_dump", "dd", "abort", "abort_if", "abort_unless"];

/// Register every built-in directive.
pub(crate) fn register_all(directives: &mut Directives) {
    directives.register(
        "json",
        Expander::template("<?php echo(json_encode({expression})); ?>"),
    );
    directives.register(
        "explode",
        Expander::template("<?php explode({0}, {1}); ?>"),
    );
    directives.register(
        "implode",
        Expander::template("<?php echo(implode({0}, {1})); ?>"),
    );
    directives.register("set", Expander::template("<?php {0} = {1}; ?>"));

    for name in STATEMENT_HELPERS {
        directives.register(*name, call(name, false));
    }
    for name in ECHO_HELPERS {
        directives.register(*name, call(name, true));
    }

    directives.register(
        "icon",
        Expander::template(r#"<?php echo('<i class="fa fa-{unquoted}"></i>'); ?>"#),
    );
    directives.register(
        "carbon",
        Expander::template(r"<?php echo((new Carbon\Carbon({0}))->format({1})); ?>"),
    );

    directives.register_paired(
        "auth",
        "endauth",
        guarded("check"),
        Expander::fixed("<?php endif; ?>"),
    );
    directives.register_paired(
        "guest",
        "endguest",
        guarded("guest"),
        Expander::fixed("<?php endif; ?>"),
    );
}

/// Expander calling helper `name` with the raw expression.
fn call(name: &str, echo: bool) -> Expander {
    let template = if echo {
        format!("<?php echo({name}({{expression}})); ?>")
    } else {
        format!("<?php {name}({{expression}}); ?>")
    };
    Expander::template(&template)
}

/// Opening conditional on the authentication state, optionally for a named guard.
fn guarded(method: &'static str) -> Expander {
    Expander::new(move |args: &DirectiveArgs<'_>| {
        if args.is_empty() {
            format!("<?php if(auth()->{method}()): ?>")
        } else {
            format!(
                "<?php if(auth()->guard({})->{method}()): ?>",
                args.expression()
            )
        }
    })
}
