use crate::escape::EscapedLine;

/// A classified line. Content is escaped text, not yet formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`..`######` followed by a space and content.
    Heading { level: u8, content: EscapedLine<'a> },
    /// Three or more of the same `-`, `*` or `_`.
    Rule,
    /// `- [ ] …` / `- [x] …`
    TaskItem { checked: bool, content: EscapedLine<'a> },
    /// `- …` / `* …`
    BulletItem { content: EscapedLine<'a> },
    /// A plain line; consecutive ones merge into one paragraph.
    Paragraph { content: EscapedLine<'a> },
    Blank,
}

/// Which list container, if any, is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    None,
    InBulletList,
    InTaskList,
}
