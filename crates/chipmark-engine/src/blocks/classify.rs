use crate::escape::EscapedLine;

use super::{
    kinds::{Heading, List, Rule},
    types::Block,
};

/// Classifies one escaped line from local facts only.
///
/// Priority: heading, thematic break, task item, bullet item, blank, paragraph.
pub fn classify(line: EscapedLine<'_>) -> Block<'_> {
    let text = line.as_str();
    if let Some((level, content)) = Heading::parse(text) {
        return Block::Heading {
            level,
            content: line.narrow(content),
        };
    }
    if Rule::matches(text) {
        return Block::Rule;
    }
    if let Some((checked, content)) = List::parse_task(text) {
        return Block::TaskItem {
            checked,
            content: line.narrow(content),
        };
    }
    if let Some(content) = List::parse_bullet(text) {
        return Block::BulletItem {
            content: line.narrow(content),
        };
    }
    if line.is_blank() {
        return Block::Blank;
    }
    Block::Paragraph {
        content: line.trim(),
    }
}
