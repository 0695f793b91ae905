//! Block kinds own their line syntax and their markup; the classifier and
//! builder only dispatch.

pub mod heading;
pub mod list;
pub mod paragraph;
pub mod rule;

pub use heading::Heading;
pub use list::{List, TaskBox};
pub use paragraph::Paragraph;
pub use rule::Rule;
