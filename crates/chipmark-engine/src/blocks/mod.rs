//! # Block Scanning
//!
//! Two phases, like a line-oriented Markdown block parser:
//!
//! 1. **Line Classification** (`classify`): each escaped line becomes a [`Block`]
//!    from local facts only.
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] threads the list
//!    state machine, merges paragraph lines and emits [`BlockHtml`] fragments.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `ListState`
//! - **`kinds`**: block markup owners (`Heading`, `List`, `TaskBox`)
//! - **`classify`**: `classify()` line classifier
//! - **`builder`**: `BlockBuilder` state machine

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::classify;
pub use types::{Block, ListState};

/// One block-level HTML fragment (an element, or a list container tag).
/// Still carries reference placeholders.
///
/// Only the block kinds and [`BlockBuilder`] construct these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHtml(String);

impl BlockHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
impl BlockHtml {
    pub(crate) fn assume_built(s: &str) -> Self {
        Self(s.to_string())
    }
}
