use crate::{blocks::BlockHtml, inline::InlineHtml};

/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the default when no other block
/// matches. Consecutive lines of one paragraph are joined with a line break.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_BREAK: &'static str = "<br>";

    pub fn render(lines: &[InlineHtml]) -> BlockHtml {
        let mut html = String::from("<p>");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                html.push_str(Self::LINE_BREAK);
            }
            html.push_str(line.as_str());
        }
        html.push_str("</p>");
        BlockHtml(html)
    }
}
