/// Note link syntax: `[[Title]]` or `[[Title|shown text]]`.
pub struct NoteLink;

/// A note link recognised at some position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLinkMatch<'a> {
    /// Byte offset just past the closing `]]`.
    pub end: usize,
    pub title: &'a str,
    pub alias: Option<&'a str>,
}

impl NoteLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: char = '|';

    /// Scans a link whose `[[` starts at byte `at` of `s`.
    ///
    /// The body may hold up to `max_chars` characters, none of them `]` or a
    /// newline. Unterminated, empty or oversized links yield `None`.
    pub fn scan(s: &str, at: usize, max_chars: usize) -> Option<NoteLinkMatch<'_>> {
        let body_start = at + Self::OPEN.len();
        let body = &s[body_start..];

        let mut count = 0;
        for (idx, c) in body.char_indices() {
            if c == ']' {
                if !body[idx..].starts_with(Self::CLOSE) {
                    return None;
                }
                let (title, alias) = Self::split_alias(&body[..idx]);
                if title.is_empty() {
                    return None;
                }
                return Some(NoteLinkMatch {
                    end: body_start + idx + Self::CLOSE.len(),
                    title,
                    alias,
                });
            }
            if c == '\n' || count == max_chars {
                return None;
            }
            count += 1;
        }
        None
    }

    fn split_alias(inner: &str) -> (&str, Option<&str>) {
        match inner.split_once(Self::ALIAS) {
            Some((title, alias)) => {
                let alias = alias.trim();
                (title.trim(), (!alias.is_empty()).then_some(alias))
            }
            None => (inner.trim(), None),
        }
    }
}
