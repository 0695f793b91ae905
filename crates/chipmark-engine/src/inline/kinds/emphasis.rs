/// One emphasis delimiter and the markup it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub marker: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

impl Emphasis {
    pub const STRONG_EM: Emphasis = Emphasis {
        marker: "***",
        open: "<strong><em>",
        close: "</em></strong>",
    };
    pub const STRONG_STAR: Emphasis = Emphasis {
        marker: "**",
        open: "<strong>",
        close: "</strong>",
    };
    pub const STRONG_UNDERSCORE: Emphasis = Emphasis {
        marker: "__",
        open: "<strong>",
        close: "</strong>",
    };
    pub const EM_STAR: Emphasis = Emphasis {
        marker: "*",
        open: "<em>",
        close: "</em>",
    };
    pub const EM_UNDERSCORE: Emphasis = Emphasis {
        marker: "_",
        open: "<em>",
        close: "</em>",
    };

    /// Passes in precedence order, longest marker first.
    pub const PASSES: [Emphasis; 5] = [
        Self::STRONG_EM,
        Self::STRONG_STAR,
        Self::STRONG_UNDERSCORE,
        Self::EM_STAR,
        Self::EM_UNDERSCORE,
    ];

    /// The repeated delimiter character.
    pub fn delim(self) -> u8 {
        self.marker.as_bytes()[0]
    }

    /// Underscore emphasis must not start or end inside a word (`snake_case`).
    pub fn forbids_intraword(self) -> bool {
        self.delim() == b'_'
    }
}
