use crate::{cursor::Cursor, options::RenderOptions, resolve::Resolver};

use super::{
    kinds::{Mention, NoteLink},
    sentinel::Sentinel,
    types::{RawText, RefKind, ReferenceTable, TextWithPlaceholders},
};

/// Output of the extraction stage.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub text: TextWithPlaceholders,
    pub table: ReferenceTable,
}

/// Replaces every reference in `raw` with a placeholder, left to right.
///
/// Text between references is copied through unchanged. Anything that does
/// not fully match a reference syntax stays literal. For mentions, `resolver`
/// decides how much of the captured word run becomes the placeholder; the
/// unclaimed words stay in the text.
pub fn extract(raw: RawText<'_>, options: &RenderOptions, resolver: &dyn Resolver) -> Extracted {
    let s = raw.as_str();
    let mut table = ReferenceTable::new(Sentinel::for_source(s));
    let mut out = String::with_capacity(s.len());
    let mut cur = Cursor::new(s);
    let mut copied = 0;

    while !cur.eof() {
        let start = cur.pos();

        if cur.starts_with(NoteLink::OPEN)
            && let Some(m) = NoteLink::scan(s, start, options.max_note_link_chars)
        {
            out.push_str(&s[copied..start]);
            out.push_str(&table.push(RefKind::NoteLink, m.title, m.alias));
            cur.jump_to(m.end);
            copied = m.end;
            continue;
        }

        if cur.peek() == Some(Mention::SIGIL)
            && let Some(run) = Mention::scan(s, start, options.max_mention_chars)
        {
            let label = claimed_prefix(run, resolver.claim_mention(run));
            out.push_str(&s[copied..start]);
            out.push_str(&table.push(RefKind::EntityMention, label, None));
            let end = start + 1 + label.len();
            cur.jump_to(end);
            copied = end;
            continue;
        }

        cur.bump_char();
    }

    out.push_str(&s[copied..]);
    log::trace!("extracted {} reference(s)", table.len());

    Extracted {
        text: TextWithPlaceholders::new(out),
        table,
    }
}

/// The first `claimed` bytes of `run`, or all of it when the claim is empty
/// or does not fall on a char boundary.
fn claimed_prefix(run: &str, claimed: usize) -> &str {
    run.get(..claimed)
        .filter(|label| !label.is_empty())
        .unwrap_or(run)
}
