/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: emphasis never applies inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    pub const OPEN_TAG: &'static str = "<code>";
    pub const CLOSE_TAG: &'static str = "</code>";

    /// Hides emphasis delimiters inside code from the later passes.
    pub fn shield(inner: &str) -> String {
        inner.replace('*', "&#42;").replace('_', "&#95;")
    }
}
