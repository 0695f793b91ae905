//! UniFFI bindings for chipmark UI hosts
//!
//! Exposes the renderer to non-Rust shells (WebView wrappers, mobile apps)
//! plus the click-time lookup a host runs when a lazily rendered chip is
//! activated.

use chipmark_engine::{RefKind, ReferenceEntry, render, resolve_by_name};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid reference kind: {reason}")]
    InvalidKind { reason: String },
}

// ============ DTOs ============

/// A navigable target the host knows about.
#[derive(Debug, Clone, uniffi::Record)]
pub struct ReferenceDto {
    pub id: String,
    pub title: String,
}

impl From<ReferenceDto> for ReferenceEntry {
    fn from(dto: ReferenceDto) -> Self {
        ReferenceEntry::new(dto.id, dto.title)
    }
}

/// Maps a chip's `data-kind` value back to the engine kind.
fn parse_kind(kind: &str) -> Result<RefKind, FfiError> {
    [RefKind::EntityMention, RefKind::NoteLink]
        .into_iter()
        .find(|k| k.as_str() == kind)
        .ok_or_else(|| FfiError::InvalidKind {
            reason: format!("expected \"entity\" or \"note\", got {kind:?}"),
        })
}

fn into_entries(dtos: Vec<ReferenceDto>) -> Vec<ReferenceEntry> {
    dtos.into_iter().map(ReferenceEntry::from).collect()
}

// ============ Functions ============

/// Render text to HTML.
///
/// With `references` the chips carry `data-id` where a title matched;
/// without, every chip is unresolved and the host resolves on click.
#[uniffi::export]
pub fn render_html(text: String, references: Option<Vec<ReferenceDto>>) -> String {
    let entries = references.map(into_entries);
    render(&text, entries.as_deref())
}

/// Resolve a clicked chip to an id.
///
/// `kind` and `label` are the chip's `data-kind` and `data-label` values.
/// Entity labels may still carry the leading `@`. Returns None when no
/// candidate title matches.
#[uniffi::export]
pub fn lookup_reference(
    kind: String,
    label: String,
    candidates: Vec<ReferenceDto>,
) -> Result<Option<String>, FfiError> {
    let label = match parse_kind(&kind)? {
        RefKind::EntityMention => label.strip_prefix('@').unwrap_or(&label),
        RefKind::NoteLink => label.as_str(),
    };
    let entries = into_entries(candidates);
    Ok(resolve_by_name(label, &entries).map(|entry| entry.id.clone()))
}
