//! Declarative expansion templates.
//!
//! Used by [`Expander::template`](super::Expander::template) so directives
//! can be declared as data, e.g. in a configuration file.

use super::DirectiveArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Expression,
    Unquoted,
    Positional(usize),
}

/// Parsed template. Parsing never fails; unrecognised placeholders are literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template {
    segments: Vec<Segment>,
    /// Number of positional parts the template consumes.
    arity: usize,
}

impl Template {
    pub(crate) fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut arity = 0;
        let mut remaining = source;

        while let Some(idx) = remaining.find(['{', '}']) {
            literal.push_str(&remaining[..idx]);
            let rest = &remaining[idx..];

            if let Some(after) = rest.strip_prefix("{{") {
                literal.push('{');
                remaining = after;
                continue;
            }
            if let Some(after) = rest.strip_prefix("}}") {
                literal.push('}');
                remaining = after;
                continue;
            }

            let placeholder = rest
                .strip_prefix('{')
                .and_then(|inner| inner.find('}').map(|end| &inner[..end]))
                .and_then(parse_placeholder);

            if let Some(segment) = placeholder {
                if let Segment::Positional(index) = segment {
                    arity = arity.max(index + 1);
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let len = rest.find('}').map_or(rest.len(), |end| end + 1);
                segments.push(segment);
                remaining = &rest[len..];
            } else {
                // Lone brace
                literal.push_str(&rest[..1]);
                remaining = &rest[1..];
            }
        }

        literal.push_str(remaining);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments, arity }
    }

    pub(crate) fn render(&self, args: &DirectiveArgs<'_>) -> String {
        let parts = if self.arity > 0 {
            args.split(self.arity)
        } else {
            Vec::new()
        };

        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Expression => output.push_str(args.expression()),
                Segment::Unquoted => output.push_str(args.unquoted()),
                Segment::Positional(index) => {
                    output.push_str(parts.get(*index).map_or("", String::as_str));
                }
            }
        }
        output
    }
}

fn parse_placeholder(name: &str) -> Option<Segment> {
    match name {
        "expression" => Some(Segment::Expression),
        "unquoted" => Some(Segment::Unquoted),
        _ if name.len() == 1 => name
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .and_then(|d| usize::try_from(d).ok())
            .map(Segment::Positional),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(template: &str, expression: &str) -> String {
        Template::parse(template).render(&DirectiveArgs::new(expression))
    }

    #[test]
    fn test_expression() {
        assert_eq!(
            render("<?php echo(e({expression})); ?>", "$name"),
            "<?php echo(e($name)); ?>"
        );
    }

    #[test]
    fn test_positional() {
        assert_eq!(
            render("<?php explode({0}, {1}); ?>", "',', $csv"),
            "<?php explode(',', $csv); ?>"
        );
    }

    #[test]
    fn test_arity_from_highest_index() {
        let template = Template::parse("{2}");
        assert_eq!(template.arity, 3);
        assert_eq!(template.render(&DirectiveArgs::new("a, b, c")), "c");
        assert_eq!(template.render(&DirectiveArgs::new("a")), "");
    }

    #[test]
    fn test_unquoted() {
        assert_eq!(
            render(r#"<i class="fa fa-{unquoted}"></i>"#, "'home'"),
            r#"<i class="fa fa-home"></i>"#
        );
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(render("{{0}} {0}", "x"), "{0} x");
    }

    #[test]
    fn test_unknown_placeholder_is_literal() {
        assert_eq!(render("{name} {10} {expression}", "v"), "{name} {10} v");
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        assert_eq!(render("a { b", "v"), "a { b");
        assert_eq!(render("a } b", "v"), "a } b");
    }

    #[test]
    fn test_no_placeholders() {
        let template = Template::parse("<?php endif; ?>");
        assert_eq!(template.arity, 0);
        assert_eq!(template.render(&DirectiveArgs::new("ignored")), "<?php endif; ?>");
    }
}
