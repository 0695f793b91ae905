use std::sync::OnceLock;

use regex::Regex;

use crate::{blocks::BlockHtml, inline::InlineHtml};

/// ATX heading: one to six `#`, at least one space, then content.
pub struct Heading;

impl Heading {
    /// Returns `(level, content)` when the line is a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = HEADING_REGEX.get_or_init(|| {
            Regex::new(r"^(#{1,6})[ \t]+(\S.*?)[ \t]*$").expect("Invalid heading regex")
        });
        let caps = re.captures(line)?;
        let level = caps.get(1)?.len() as u8;
        Some((level, caps.get(2)?.as_str()))
    }

    pub fn render(level: u8, inline: &InlineHtml) -> BlockHtml {
        BlockHtml(format!("<h{level}>{}</h{level}>", inline.as_str()))
    }
}
