//! # Inline Formatting
//!
//! Turns one [`EscapedLine`](crate::escape::EscapedLine) into [`InlineHtml`].
//!
//! ## Pass order
//!
//! 1. Code spans: a raw zone. Their `*` and `_` are encoded as entities so no
//!    later pass can pair them.
//! 2. `***x***` to `<strong><em>`
//! 3. `**x**`, then `__x__`, to `<strong>`
//! 4. `*x*`, then `_x_`, to `<em>`
//!
//! Longer delimiters go first so `***x***` nests instead of producing three
//! stray tags. A pair only forms when opener and closer sit inside the same
//! element from an earlier pass, so the output is always balanced.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter owners (`CodeSpan`, `Emphasis`)
//! - **`formatter`**: `format_inline()` and the pairing passes

pub mod formatter;
pub mod kinds;

pub use formatter::format_inline;

/// Formatted inline markup for one line. Still carries reference placeholders.
///
/// Only [`format_inline`] can construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineHtml(String);

impl InlineHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
