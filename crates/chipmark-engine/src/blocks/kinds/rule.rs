use std::sync::OnceLock;

use regex::Regex;

/// Thematic break: three or more of the same `-`, `*` or `_`, spaces allowed.
pub struct Rule;

impl Rule {
    pub const TAG: &'static str = "<hr>";

    pub fn matches(line: &str) -> bool {
        static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = RULE_REGEX.get_or_init(|| {
            Regex::new(r"^[ \t]*(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$")
                .expect("Invalid rule regex")
        });
        re.is_match(line)
    }
}
