//! # Reference Extraction
//!
//! First stage of the pipeline: `@mention` and `[[note link]]` occurrences are
//! lifted out of the raw text into a call-scoped [`ReferenceTable`] and replaced
//! by opaque placeholders, so escaping and emphasis never see them.
//!
//! ## Modules
//!
//! - **`kinds`**: syntax owners (`Mention`, `NoteLink`) with their delimiters and scanners
//! - **`sentinel`**: collision-free placeholder construction
//! - **`types`**: `RawText`, `TextWithPlaceholders`, `ReferenceToken`, `ReferenceTable`
//! - **`extract`**: `extract()` main entry point

pub mod extract;
pub mod kinds;
pub mod sentinel;
pub mod types;

pub use extract::{Extracted, extract};
pub use sentinel::Sentinel;
pub use types::{RawText, RefKind, ReferenceTable, ReferenceToken, TextWithPlaceholders};
