use crate::inline::{InlineHtml, format_inline};

use super::{
    BlockHtml,
    kinds::{Heading, List, Paragraph, Rule, TaskBox},
    types::{Block, ListState},
};

/// Assembles classified lines into block HTML fragments.
///
/// Holds the list state machine and the lines of a pending paragraph.
/// Fragments still contain reference placeholders.
pub struct BlockBuilder {
    list: ListState,
    paragraph: Vec<InlineHtml>,
    out: Vec<BlockHtml>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: ListState::None,
            paragraph: vec![],
            out: vec![],
        }
    }

    pub fn list_state(&self) -> ListState {
        self.list
    }

    pub fn push(&mut self, block: Block<'_>) {
        match block {
            Block::Heading { level, content } => {
                self.close_open_blocks();
                self.out
                    .push(Heading::render(level, &format_inline(content)));
            }
            Block::Rule => {
                self.close_open_blocks();
                self.out.push(BlockHtml(Rule::TAG.to_string()));
            }
            Block::TaskItem { checked, content } => {
                self.flush_paragraph();
                self.enter_list(ListState::InTaskList);
                self.out
                    .push(TaskBox::render_item(checked, &format_inline(content)));
            }
            Block::BulletItem { content } => {
                self.flush_paragraph();
                self.enter_list(ListState::InBulletList);
                self.out.push(List::render_item(&format_inline(content)));
            }
            Block::Paragraph { content } => {
                self.close_list();
                self.paragraph.push(format_inline(content));
            }
            Block::Blank => self.close_open_blocks(),
        }
    }

    pub fn finish(mut self) -> Vec<BlockHtml> {
        // EOF flush
        self.close_open_blocks();
        self.out
    }

    /// Opens a list of the given kind, closing a list of the other kind first.
    fn enter_list(&mut self, next: ListState) {
        if self.list == next {
            return;
        }
        self.close_list();
        if let Some(tag) = List::open_tag(next) {
            self.out.push(BlockHtml(tag.to_string()));
        }
        self.list = next;
    }

    fn close_list(&mut self) {
        let prev = std::mem::take(&mut self.list);
        if let Some(tag) = List::close_tag(prev) {
            self.out.push(BlockHtml(tag.to_string()));
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.paragraph);
        self.out.push(Paragraph::render(&lines));
    }

    fn close_open_blocks(&mut self) {
        self.flush_paragraph();
        self.close_list();
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
