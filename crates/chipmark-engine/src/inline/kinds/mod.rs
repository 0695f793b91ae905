pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
