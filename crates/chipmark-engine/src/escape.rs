//! # Escaping
//!
//! The only place HTML escaping happens. [`escape`] runs exactly once per
//! render, after extraction; [`escape_str`] covers the labels and ids the
//! reinjector writes into chips.

use std::borrow::Cow;

use crate::references::TextWithPlaceholders;

/// Placeholder-bearing text with `&`, `<`, `>` and `"` escaped.
///
/// Only [`escape`] can construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedText(String);

impl EscapedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lines of the escaped text, without their `\n` / `\r\n` terminators.
    pub fn lines(&self) -> impl Iterator<Item = EscapedLine<'_>> {
        self.0
            .split('\n')
            .map(|l| EscapedLine(l.strip_suffix('\r').unwrap_or(l)))
    }
}

/// One line, or a slice of one, borrowed from [`EscapedText`].
///
/// Block scanning hands these to the inline formatter, so nothing that
/// skipped the escaper can reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapedLine<'a>(&'a str);

impl<'a> EscapedLine<'a> {
    /// Narrows to a sub-slice found inside this line (a regex capture, a
    /// trim). Only block classification cuts lines, and only at syntax
    /// characters, so entities are never split.
    pub(crate) fn narrow(self, part: &'a str) -> Self {
        Self(part)
    }

    pub fn as_str(self) -> &'a str {
        self.0
    }

    pub fn trim(self) -> Self {
        Self(self.0.trim())
    }

    pub fn is_blank(self) -> bool {
        self.0.trim().is_empty()
    }
}

#[cfg(test)]
impl<'a> EscapedLine<'a> {
    /// Wraps text that a test asserts is already escaped.
    pub(crate) fn assume_escaped(s: &'a str) -> Self {
        Self(s)
    }
}

/// Escapes the whole document. Placeholders are alphanumeric and pass through.
pub fn escape(text: TextWithPlaceholders) -> EscapedText {
    EscapedText(escape_str(text.as_str()).into_owned())
}

/// Escapes a fragment destined for element text or a double-quoted attribute.
pub fn escape_str(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}
