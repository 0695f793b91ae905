use std::fmt;

use crate::reinject::ReinjectedHtml;

/// Final output of a render call, safe to insert into the DOM.
///
/// Only [`assemble`] can construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}

/// Concatenates finished block fragments in document order.
pub fn assemble<I>(fragments: I) -> SafeHtml
where
    I: IntoIterator<Item = ReinjectedHtml>,
{
    let mut html = String::new();
    for fragment in fragments {
        html.push_str(fragment.as_str());
    }
    SafeHtml(html)
}
