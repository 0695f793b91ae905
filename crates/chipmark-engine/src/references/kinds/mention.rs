/// Entity mention syntax: `@Name`, where the name may span several words.
pub struct Mention;

impl Mention {
    pub const SIGIL: u8 = b'@';

    /// Characters stripped from the end of a captured name. They stay in the text.
    pub const TRAILING: &'static [char] = &[
        '.', ',', '!', '?', ';', ':', '\'', '"', ')', ']', '_', ' ',
    ];

    /// Characters a mention name is made of, besides single interior spaces.
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '\'')
    }

    /// Strips trailing punctuation and spaces from a candidate name.
    pub fn trim_label(s: &str) -> &str {
        s.trim_end_matches(Self::TRAILING)
    }

    /// Scans the word run following a sigil at byte `at` of `s`.
    ///
    /// The run may hold more than the name (`Acme Corp about this`); the
    /// resolver decides how much of it is claimed. Returns the trimmed run,
    /// or `None` when the sigil is glued to a
    /// preceding word (`a@b.com`), is followed by no name, or its first word
    /// alone exceeds `max_chars`. A longer run is cut back to its last whole
    /// word within the limit.
    pub fn scan(s: &str, at: usize, max_chars: usize) -> Option<&str> {
        if s[..at].chars().next_back().is_some_and(char::is_alphanumeric) {
            return None;
        }

        let rest = &s[at + 1..];
        let mut chars = rest.char_indices().peekable();
        let mut end = 0;
        let mut count = 0;
        let mut last_word_end = None;

        while let Some((idx, c)) = chars.next() {
            let accept = if c == ' ' {
                count > 0
                    && chars
                        .peek()
                        .is_some_and(|&(_, next)| Self::is_word_char(next))
            } else {
                Self::is_word_char(c)
            };
            if !accept {
                break;
            }
            if count == max_chars {
                if c != ' ' {
                    end = last_word_end?;
                }
                break;
            }
            if c == ' ' {
                last_word_end = Some(end);
            }
            count += 1;
            end = idx + c.len_utf8();
        }

        let label = Self::trim_label(&rest[..end]);
        (!label.is_empty()).then_some(label)
    }
}
