/// Marker wrapped around a token index to form a placeholder:
/// `{sentinel}{index}{sentinel}`.
///
/// The sentinel is ASCII alphanumeric, so escaping and emphasis passes leave it
/// alone. It starts with `Q`, which occurs nowhere else in it, so a sentinel
/// can never be found straddling source text and a placeholder. Each call
/// picks one that does not already occur in its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinel(String);

impl Sentinel {
    pub const BASE: &'static str = "Qchipref";

    /// Picks the first sentinel absent from `source`, salting on collision.
    pub fn for_source(source: &str) -> Self {
        let mut candidate = Self::BASE.to_string();
        let mut salt = 0u32;
        while source.contains(&candidate) {
            salt += 1;
            candidate = format!("{}{salt}x", Self::BASE);
            log::debug!("placeholder sentinel collides with source, trying {candidate}");
        }
        Self(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn placeholder(&self, index: usize) -> String {
        format!("{0}{index}{0}", self.0)
    }

    /// Splits `s` at the first placeholder, returning the text before it, the
    /// token index and the text after it.
    pub fn split_first<'s>(&self, s: &'s str) -> Option<(&'s str, usize, &'s str)> {
        let mut from = 0;
        while let Some(found) = s[from..].find(self.as_str()) {
            let start = from + found;
            let after = &s[start + self.0.len()..];
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            if let (Ok(index), Some(rest)) = (
                after[..digits].parse::<usize>(),
                after[digits..].strip_prefix(self.as_str()),
            ) {
                return Some((&s[..start], index, rest));
            }
            from = start + self.0.len();
        }
        None
    }
}
