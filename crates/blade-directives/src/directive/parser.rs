//! Directive tag scanning.
//!
//! Finds `@name` and `@name(arguments)` tags in template source.

use super::DirectiveArgs;

/// Directive tag found in template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedTag<'a> {
    /// Tag name without the `@`.
    pub name: &'a str,
    /// Text between the outer parentheses (empty without an argument list).
    pub args: DirectiveArgs<'a>,
    /// `@@name`: escaped, left for the host engine to unescape.
    pub escaped: bool,
    /// Byte offset of the first `@`.
    pub start: usize,
    /// Byte offset just past the tag (and its argument list, if any).
    pub end: usize,
}

/// Find the first directive tag at or after byte offset `from`.
///
/// An `@` preceded by a word character (as in an e-mail address) does not
/// start a tag.
pub(crate) fn find_tag(text: &str, from: usize) -> Option<ParsedTag<'_>> {
    let mut pos = from;

    while let Some(offset) = text[pos..].find('@') {
        let start = pos + offset;
        pos = start + 1;

        if text[..start].chars().next_back().is_some_and(is_word_char) {
            continue;
        }

        let escaped = text[pos..].starts_with('@');
        let name_start = if escaped { pos + 1 } else { pos };
        let name_len = text[name_start..]
            .find(|c: char| !is_word_char(c))
            .unwrap_or(text.len() - name_start);
        if name_len == 0 {
            continue;
        }

        let name_end = name_start + name_len;
        let name = &text[name_start..name_end];

        let after_name = &text[name_end..];
        let gap = after_name.len() - after_name.trim_start_matches([' ', '\t']).len();
        let (expression, end) = match parse_parens(&after_name[gap..]) {
            Some((inner, consumed)) => (inner, name_end + gap + consumed),
            None => ("", name_end),
        };

        return Some(ParsedTag {
            name,
            args: DirectiveArgs::new(expression),
            escaped,
            start,
            end,
        });
    }

    None
}

/// Word characters as understood by the host's `\w` (ASCII only).
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parse a parenthesised argument list: `(args)`
///
/// Returns (`args` without the outer parentheses, `bytes_consumed`), or `None`
/// when `s` does not start with a balanced list. Quotes are not special.
fn parse_parens(s: &str) -> Option<(&str, usize)> {
    if !s.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&s[1..i], i + 1));
                }
            }
            _ => {}
        }
    }

    None
}
