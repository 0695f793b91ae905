pub mod assemble;
pub mod blocks;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod options;
pub mod references;
pub mod reinject;
pub mod render;
pub mod resolve;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use assemble::SafeHtml;
pub use blocks::BlockHtml;
pub use escape::{EscapedLine, EscapedText};
pub use inline::InlineHtml;
pub use options::RenderOptions;
pub use references::{RefKind, ReferenceToken};
pub use reinject::ReinjectedHtml;
pub use render::{Renderer, render, render_with};
pub use resolve::{
    EagerResolver, LazyResolver, ReferenceEntry, ResolvedReference, Resolver, resolve_by_name,
};
