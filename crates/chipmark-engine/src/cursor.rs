/// A cursor for character-by-character scanning of a single string.
///
/// The extractor and the code-span pass both walk text with it. Byte-level
/// helpers (`peek`, `starts_with`, `bump_n`) are only used with ASCII syntax
/// bytes, so the index always lands on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The character immediately before the cursor, if any.
    pub fn prev_char(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances past one whole character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.s.get(self.i..)?.chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers only skip over matched ASCII syntax.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves the cursor to an absolute byte position.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i;
    }
}
