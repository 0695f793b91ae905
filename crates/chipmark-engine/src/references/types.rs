use super::sentinel::Sentinel;

/// Source text handed to a render call. Never written to the output directly.
#[derive(Debug, Clone, Copy)]
pub struct RawText<'a>(&'a str);

impl<'a> RawText<'a> {
    pub fn new(s: &'a str) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Raw text with every reference replaced by a placeholder. Still unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWithPlaceholders(String);

impl TextWithPlaceholders {
    pub(crate) fn new(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which reference syntax produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// `@Name`
    EntityMention,
    /// `[[Title]]`
    NoteLink,
}

impl RefKind {
    /// Value of the `data-kind` attribute on rendered chips.
    pub fn as_str(self) -> &'static str {
        match self {
            RefKind::EntityMention => "entity",
            RefKind::NoteLink => "note",
        }
    }
}

/// One extracted reference occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceToken {
    /// Position in the call's table; also the number inside the placeholder.
    pub index: usize,
    pub kind: RefKind,
    /// Mention name (trailing punctuation stripped) or note title.
    pub raw_label: String,
    /// Display text of a `[[Title|alias]]` link.
    pub alias: Option<String>,
}

/// Ordered side table of the references found in one render call.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    sentinel: Sentinel,
    tokens: Vec<ReferenceToken>,
}

impl ReferenceTable {
    pub(crate) fn new(sentinel: Sentinel) -> Self {
        Self {
            sentinel,
            tokens: vec![],
        }
    }

    /// Appends a token, assigning the next index, and returns its placeholder.
    pub(crate) fn push(&mut self, kind: RefKind, raw_label: &str, alias: Option<&str>) -> String {
        let index = self.tokens.len();
        self.tokens.push(ReferenceToken {
            index,
            kind,
            raw_label: raw_label.to_string(),
            alias: alias.map(str::to_string),
        });
        self.sentinel.placeholder(index)
    }

    pub fn sentinel(&self) -> &Sentinel {
        &self.sentinel
    }

    pub fn get(&self, index: usize) -> Option<&ReferenceToken> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[ReferenceToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
