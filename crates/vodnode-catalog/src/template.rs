//! Path template tokenizer.
//!
//! Templates use `{name}` placeholders. A trailing `?` inside the braces
//! (`{file?}`) marks the segment as optional in the upstream documentation;
//! the tokenizer reports it but does not interpret it.

use std::ops::Range;

/// A `{name}` or `{name?}` token found in a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Token name with braces and the optional marker stripped.
    pub name: &'a str,
    /// Whether the token carried a trailing `?`.
    pub optional: bool,
    /// Byte range of the whole token, braces included.
    pub span: Range<usize>,
}

/// Iterates over the placeholders of `template` in order.
///
/// An unterminated `{` ends the scan; it is not a placeholder.
pub fn placeholders(template: &str) -> Placeholders<'_> {
    Placeholders {
        template,
        offset: 0,
    }
}

/// Iterator returned by [`placeholders`].
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    template: &'a str,
    offset: usize,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.template[self.offset..];
        let open = self.offset + rest.find('{')?;
        let close = open + self.template[open..].find('}')?;
        self.offset = close + 1;

        let inner = &self.template[open + 1..close];
        let (name, optional) = match inner.strip_suffix('?') {
            Some(name) => (name, true),
            None => (inner, false),
        };

        Some(Placeholder {
            name,
            optional,
            span: open..close + 1,
        })
    }
}
