//!
//! Common utilities: source text, locations and spans.
//!

pub mod file;
pub mod location;
pub mod source;

pub use file::{LineColumn, SourceFile};
pub use location::*;
pub use source::*;
