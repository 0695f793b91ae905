use crate::{cursor::Cursor, escape::EscapedLine};

use super::{
    InlineHtml,
    kinds::{CodeSpan, Emphasis},
};

/// Formats one line of escaped text into inline HTML.
///
/// Never fails: delimiters that do not form a valid pair stay literal.
/// Placeholders are alphanumeric, so no pass can match inside one.
pub fn format_inline(line: EscapedLine<'_>) -> InlineHtml {
    let mut html = code_spans(line.as_str());
    for pass in Emphasis::PASSES {
        html = pair_delimiters(&html, pass);
    }
    InlineHtml(html)
}

/// Wraps non-empty backtick pairs in `<code>` and shields their contents.
fn code_spans(s: &str) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut copied = 0;

    while !cur.eof() {
        if cur.peek() != Some(CodeSpan::TICK) {
            cur.bump_char();
            continue;
        }

        let start = cur.pos();
        let inner_start = start + 1;
        match s[inner_start..].find(CodeSpan::TICK as char) {
            // Empty pair: both ticks stay literal
            Some(0) => cur.bump_n(2),
            Some(len) => {
                let inner_end = inner_start + len;
                out.push_str(&s[copied..start]);
                out.push_str(CodeSpan::OPEN_TAG);
                out.push_str(&CodeSpan::shield(&s[inner_start..inner_end]));
                out.push_str(CodeSpan::CLOSE_TAG);
                copied = inner_end + 1;
                cur.jump_to(copied);
            }
            // No closing tick anywhere after this one
            None => break,
        }
    }

    out.push_str(&s[copied..]);
    out
}

/// Replaces every valid `marker…marker` pair, left to right, non-overlapping.
///
/// Closers are collected once per pass and grouped by the element that
/// encloses them. Openers only ever move right, so each group is consumed
/// front to back and the pass stays linear in the line length.
fn pair_delimiters(s: &str, em: Emphasis) -> String {
    if !s.contains(em.marker) {
        return s.to_string();
    }

    let bytes = s.as_bytes();
    let marker = em.marker.as_bytes();
    let (scope, scope_count) = scopes(s);

    let mut closers: Vec<Vec<usize>> = vec![vec![]; scope_count];
    for c in 0..bytes.len() {
        if bytes[c..].starts_with(marker) && is_closer(s, c, em) {
            closers[scope[c]].push(c);
        }
    }
    let mut next = vec![0; scope_count];

    let mut out = String::with_capacity(s.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(marker)
            && let Some(min_close) = earliest_close(s, i, em)
        {
            let group = &closers[scope[i]];
            let k = &mut next[scope[i]];
            while group.get(*k).is_some_and(|&c| c < min_close) {
                *k += 1;
            }
            if let Some(&close) = group.get(*k) {
                out.push_str(&s[copied..i]);
                out.push_str(em.open);
                out.push_str(&s[i + marker.len()..close]);
                out.push_str(em.close);
                i = close + marker.len();
                copied = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&s[copied..]);
    out
}

/// For a valid opener at byte `open`, the first byte a closer may start at.
fn earliest_close(s: &str, open: usize, em: Emphasis) -> Option<usize> {
    if em.forbids_intraword() && s[..open].chars().next_back().is_some_and(char::is_alphanumeric)
    {
        return None;
    }

    let content_start = open + em.marker.len();
    let first = s[content_start..].chars().next()?;
    if first.is_whitespace() || first == em.delim() as char {
        return None;
    }
    Some(content_start + first.len_utf8())
}

/// Whether a marker at byte `close` can end a pair, judged from its
/// surroundings alone.
fn is_closer(s: &str, close: usize, em: Emphasis) -> bool {
    if s[..close].chars().next_back().is_none_or(char::is_whitespace) {
        return false;
    }
    !(em.forbids_intraword()
        && s[close + em.marker.len()..]
            .chars()
            .next()
            .is_some_and(char::is_alphanumeric))
}

/// Labels every byte with the innermost element enclosing it, plus the
/// number of labels used. Text spans `[a, b)` are balanced exactly when `a`
/// and `b` share a label. All `<` in escaped text start our own tags.
fn scopes(s: &str) -> (Vec<usize>, usize) {
    let bytes = s.as_bytes();
    let mut scope = vec![0; bytes.len()];
    let mut parents = vec![];
    let mut current = 0;
    let mut count = 1;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            scope[i] = current;
            i += 1;
            continue;
        }
        let end = s[i..].find('>').map_or(bytes.len(), |e| i + e + 1);
        if bytes.get(i + 1) == Some(&b'/') {
            current = parents.pop().unwrap_or(0);
        } else {
            parents.push(current);
            current = count;
            count += 1;
        }
        scope[i..end].fill(current);
        i = end;
    }

    (scope, count)
}
