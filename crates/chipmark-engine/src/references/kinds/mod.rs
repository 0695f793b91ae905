//! # Reference Kinds
//!
//! Each reference syntax owns its delimiters and its scanner. The extractor
//! dispatches to these; it never hardcodes `@` or `[[`.
//!
//! - **`Mention`**: `SIGIL = b'@'`, word-run scanning and trailing punctuation
//! - **`NoteLink`**: `OPEN = b"[["`, `CLOSE = b"]]"`, `ALIAS = '|'`

pub mod mention;
pub mod note_link;

pub use mention::Mention;
pub use note_link::{NoteLink, NoteLinkMatch};
