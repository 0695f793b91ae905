use serde::{Deserialize, Serialize};

/// Tunables for a render call. Loaded from the `[render]` table of the user
/// config by `chipmark-config`; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Longest mention name, in characters, that still counts as a mention.
    pub max_mention_chars: usize,
    /// Longest note link title, in characters, that still counts as a link.
    pub max_note_link_chars: usize,
}

impl RenderOptions {
    pub const DEFAULT_MAX_MENTION_CHARS: usize = 60;
    pub const DEFAULT_MAX_NOTE_LINK_CHARS: usize = 200;
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_mention_chars: Self::DEFAULT_MAX_MENTION_CHARS,
            max_note_link_chars: Self::DEFAULT_MAX_NOTE_LINK_CHARS,
        }
    }
}
