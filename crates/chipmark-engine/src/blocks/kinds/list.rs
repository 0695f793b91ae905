use std::sync::OnceLock;

use regex::Regex;

use crate::{
    blocks::{BlockHtml, types::ListState},
    inline::InlineHtml,
};

/// Bullet and task list syntax (`-` or `*` markers) and container markup.
///
/// Leading indentation is ignored; lists do not nest.
pub struct List;

impl List {
    /// Returns `(checked, content)` for `- [ ] …`, `- [x] …` or `- [X] …`.
    /// The content may be empty when the line ends right after the box.
    pub fn parse_task(line: &str) -> Option<(bool, &str)> {
        static TASK_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = TASK_REGEX.get_or_init(|| {
            Regex::new(r"^[ \t]*[-*][ \t]+\[([ xX])\](?:[ \t]+(.*?))?[ \t]*$")
                .expect("Invalid task regex")
        });
        let caps = re.captures(line)?;
        let checked = caps.get(1)?.as_str() != " ";
        let content = caps.get(2).map_or("", |m| m.as_str());
        Some((checked, content))
    }

    pub fn parse_bullet(line: &str) -> Option<&str> {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = BULLET_REGEX.get_or_init(|| {
            Regex::new(r"^[ \t]*[-*][ \t]+(\S.*?)[ \t]*$").expect("Invalid bullet regex")
        });
        Some(re.captures(line)?.get(1)?.as_str())
    }

    pub fn open_tag(state: ListState) -> Option<&'static str> {
        match state {
            ListState::None => None,
            ListState::InBulletList => Some("<ul>"),
            ListState::InTaskList => Some("<ul class=\"task-list\">"),
        }
    }

    pub fn close_tag(state: ListState) -> Option<&'static str> {
        match state {
            ListState::None => None,
            ListState::InBulletList | ListState::InTaskList => Some("</ul>"),
        }
    }

    pub fn render_item(inline: &InlineHtml) -> BlockHtml {
        BlockHtml(format!("<li>{}</li>", inline.as_str()))
    }
}

/// Display-only checkbox for task items: a glyph plus class and data hooks,
/// never a form control.
pub struct TaskBox;

impl TaskBox {
    pub const CHECKED_GLYPH: char = '☑';
    pub const UNCHECKED_GLYPH: char = '☐';

    pub fn render_item(checked: bool, inline: &InlineHtml) -> BlockHtml {
        let (state_class, glyph) = if checked {
            (" checked", Self::CHECKED_GLYPH)
        } else {
            ("", Self::UNCHECKED_GLYPH)
        };
        BlockHtml(format!(
            "<li class=\"task-item\" data-checked=\"{checked}\">\
             <span class=\"task-checkbox{state_class}\" aria-hidden=\"true\">{glyph}</span> \
             {}</li>",
            inline.as_str()
        ))
    }
}
