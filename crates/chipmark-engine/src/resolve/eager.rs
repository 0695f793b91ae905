use crate::references::{ReferenceToken, kinds::Mention};

use super::{ReferenceEntry, ResolvedReference, Resolver, first_word_claim};

/// Resolves references against a closed candidate list, case-insensitively.
///
/// Labels must equal a title. A mention claims the longest title that equals
/// a word-aligned prefix of its captured run, so `@Acme Corp about this`
/// resolves to "Acme Corp". When titles collide the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct EagerResolver {
    entries: Vec<(String, ReferenceEntry)>,
}

impl EagerResolver {
    pub fn new(entries: &[ReferenceEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| (normalize(&e.title), e.clone()))
                .filter(|(key, _)| !key.is_empty())
                .collect(),
        }
    }

    fn find(&self, key: &str) -> Option<&ReferenceEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Longest word-aligned prefix of a mention run naming a candidate.
    fn match_mention(&self, label: &str) -> Option<(usize, &ReferenceEntry)> {
        let ends: Vec<usize> = label
            .match_indices(' ')
            .map(|(i, _)| i)
            .chain(std::iter::once(label.len()))
            .collect();

        ends.into_iter().rev().find_map(|end| {
            let prefix = Mention::trim_label(&label[..end]);
            if prefix.is_empty() {
                return None;
            }
            self.find(&normalize(prefix))
                .map(|entry| (prefix.len(), entry))
        })
    }
}

impl Resolver for EagerResolver {
    fn claim_mention(&self, run: &str) -> usize {
        self.match_mention(run)
            .map_or_else(|| first_word_claim(run), |(claimed, _)| claimed)
    }

    fn resolve(&self, token: &ReferenceToken) -> ResolvedReference {
        let found = self.find(&normalize(&token.raw_label));
        ResolvedReference::new(token, found.map(|entry| entry.id.clone()))
    }
}

/// Click-time lookup for lazily rendered chips: the first candidate whose
/// title equals `label`, ignoring case and surrounding whitespace.
pub fn resolve_by_name<'a>(
    label: &str,
    candidates: &'a [ReferenceEntry],
) -> Option<&'a ReferenceEntry> {
    let key = normalize(label);
    if key.is_empty() {
        return None;
    }
    candidates.iter().find(|c| normalize(&c.title) == key)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::references::RefKind;
    use pretty_assertions::assert_eq;

    fn token(kind: RefKind, label: &str) -> ReferenceToken {
        ReferenceToken {
            index: 0,
            kind,
            raw_label: label.to_string(),
            alias: None,
        }
    }

    fn entries() -> Vec<ReferenceEntry> {
        vec![
            ReferenceEntry::new("e1", "Acme Corp"),
            ReferenceEntry::new("e2", "Acme"),
            ReferenceEntry::new("n1", "Weekly Plan"),
            ReferenceEntry::new("n2", "weekly plan"),
        ]
    }

    #[test]
    fn mention_claims_longest_title() {
        let resolver = EagerResolver::new(&entries());
        assert_eq!(resolver.claim_mention("Acme Corp about this"), "Acme Corp".len());
        assert_eq!(resolver.claim_mention("acme said"), "acme".len());
        assert_eq!(resolver.claim_mention("Acme Corp."), "Acme Corp".len());
    }

    #[test]
    fn mention_miss_claims_first_word() {
        let resolver = EagerResolver::new(&entries());
        assert_eq!(resolver.claim_mention("Globex team"), "Globex".len());
    }

    #[test]
    fn claimed_mention_resolves() {
        let resolver = EagerResolver::new(&entries());
        let r = resolver.resolve(&token(RefKind::EntityMention, "acme corp"));
        assert_eq!(r.target_id.as_deref(), Some("e1"));
        assert_eq!(r.label, "acme corp");
        let r = resolver.resolve(&token(RefKind::EntityMention, "Globex"));
        assert_eq!(r.target_id, None);
    }

    #[test]
    fn note_link_needs_exact_title_and_first_match_wins() {
        let resolver = EagerResolver::new(&entries());
        let r = resolver.resolve(&token(RefKind::NoteLink, "WEEKLY PLAN"));
        assert_eq!(r.target_id.as_deref(), Some("n1"));
        let r = resolver.resolve(&token(RefKind::NoteLink, "Weekly"));
        assert_eq!(r.target_id, None);
        assert_eq!(r.label, "Weekly");
    }

    #[test]
    fn empty_candidate_list_resolves_nothing() {
        let resolver = EagerResolver::new(&[]);
        assert_eq!(resolver.claim_mention("Acme Corp"), "Acme".len());
        let r = resolver.resolve(&token(RefKind::EntityMention, "Acme"));
        assert_eq!(r.target_id, None);
    }

    #[test]
    fn blank_titles_never_match() {
        let resolver = EagerResolver::new(&[ReferenceEntry::new("x", "  ")]);
        let r = resolver.resolve(&token(RefKind::NoteLink, "anything"));
        assert_eq!(r.target_id, None);
    }

    #[test]
    fn lookup_by_name() {
        let list = entries();
        assert_eq!(resolve_by_name(" acme corp ", &list).map(|e| e.id.as_str()), Some("e1"));
        assert_eq!(resolve_by_name("weekly plan", &list).map(|e| e.id.as_str()), Some("n1"));
        assert_eq!(resolve_by_name("Nobody", &list), None);
        assert_eq!(resolve_by_name("", &list), None);
    }
}
