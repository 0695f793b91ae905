//! # Reference Reinjection
//!
//! Swaps placeholders in block fragments for chip elements:
//!
//! ```html
//! <span class="ref-chip" role="link" tabindex="0" data-kind="entity" data-id="e1" data-label="Acme Corp">@Acme Corp</span>
//! ```
//!
//! `data-id` is present only for resolved references. Every dynamic part goes
//! through [`escape_str`]; ids are escaped too even though resolvers supply them.

use crate::{
    blocks::BlockHtml,
    escape::escape_str,
    references::{RefKind, ReferenceTable},
    resolve::{ResolvedReference, Resolver},
};

/// A block fragment with its placeholders replaced by chips.
///
/// Only [`Reinjector::reinject`] can construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReinjectedHtml(String);

impl ReinjectedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct Reinjector<'a> {
    table: &'a ReferenceTable,
    resolver: &'a dyn Resolver,
}

impl<'a> Reinjector<'a> {
    pub fn new(table: &'a ReferenceTable, resolver: &'a dyn Resolver) -> Self {
        Self { table, resolver }
    }

    /// Replaces every placeholder in `fragment` with its chip.
    pub fn reinject(&self, fragment: &BlockHtml) -> ReinjectedHtml {
        let fragment = fragment.as_str();
        if self.table.is_empty() {
            return ReinjectedHtml(fragment.to_string());
        }

        let sentinel = self.table.sentinel();
        let mut out = String::with_capacity(fragment.len());
        let mut rest = fragment;
        while let Some((before, index, after)) = sentinel.split_first(rest) {
            out.push_str(before);
            match self.table.get(index) {
                Some(token) => write_chip(&mut out, &self.resolver.resolve(token)),
                None => log::warn!("placeholder refers to unknown reference #{index}"),
            }
            rest = after;
        }
        out.push_str(rest);
        ReinjectedHtml(out)
    }
}

fn write_chip(out: &mut String, r: &ResolvedReference) {
    let label = escape_str(&r.label);

    out.push_str("<span class=\"ref-chip\" role=\"link\" tabindex=\"0\" data-kind=\"");
    out.push_str(r.kind.as_str());
    out.push('"');
    if let Some(id) = &r.target_id {
        out.push_str(" data-id=\"");
        out.push_str(&escape_str(id));
        out.push('"');
    }
    out.push_str(" data-label=\"");
    out.push_str(&label);
    out.push_str("\">");
    match r.kind {
        RefKind::EntityMention => {
            out.push('@');
            out.push_str(&label);
        }
        RefKind::NoteLink => match &r.alias {
            Some(alias) => out.push_str(&escape_str(alias)),
            None => out.push_str(&label),
        },
    }
    out.push_str("</span>");
}

#[cfg(test)]
impl ReinjectedHtml {
    pub(crate) fn assume_reinjected(s: &str) -> Self {
        Self(s.to_string())
    }
}
