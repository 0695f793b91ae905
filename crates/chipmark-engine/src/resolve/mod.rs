//! # Reference Resolution
//!
//! A [`Resolver`] decides how much of a captured label is the reference and
//! whether it points at a known target. Two strategies:
//!
//! - [`EagerResolver`]: matches labels against an in-memory candidate list
//! - [`LazyResolver`]: resolves nothing; the UI looks the label up on click,
//!   typically with [`resolve_by_name`]

pub mod eager;
pub mod lazy;

use serde::{Deserialize, Serialize};

use crate::references::{RefKind, ReferenceToken, kinds::Mention};

pub use eager::{EagerResolver, resolve_by_name};
pub use lazy::LazyResolver;

/// A navigable target supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: String,
    pub title: String,
}

impl ReferenceEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A resolver's verdict on one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Index of the token this verdict is for.
    pub token_index: usize,
    pub kind: RefKind,
    pub label: String,
    /// Display text override (`[[Title|alias]]`).
    pub alias: Option<String>,
    /// Present only when the resolver knows the target.
    pub target_id: Option<String>,
}

impl ResolvedReference {
    pub fn new(token: &ReferenceToken, target_id: Option<String>) -> Self {
        Self {
            token_index: token.index,
            kind: token.kind,
            label: token.raw_label.clone(),
            alias: token.alias.clone(),
            target_id,
        }
    }

    pub fn unresolved(token: &ReferenceToken) -> Self {
        Self::new(token, None)
    }
}

/// Strategy that maps reference tokens to targets.
///
/// A resolver is consulted twice per mention: during extraction to decide how
/// much of the captured word run is the mention, and during reinjection for
/// the target. Words it does not claim stay in the text and are formatted
/// like any other text.
pub trait Resolver {
    /// Byte length of the mention at the start of `run`, a captured word run
    /// such as `"Acme Corp about this"`. Defaults to the first word.
    fn claim_mention(&self, run: &str) -> usize {
        first_word_claim(run)
    }

    fn resolve(&self, token: &ReferenceToken) -> ResolvedReference;
}

/// The first word of a mention run, trailing punctuation left behind.
pub fn first_word_claim(run: &str) -> usize {
    let first = run.split(' ').next().unwrap_or(run);
    match Mention::trim_label(first) {
        "" => first.len(),
        trimmed => trimmed.len(),
    }
}
