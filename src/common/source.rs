//!
//! Sources of ABC text.
//!

use std::ops::Range;

use super::{Loc, Span, Spanned};
use crate::lexing::utils::SourceStream;

///
/// Generic idea of ABC source text: could be a file,
/// or a string handed over by an editor.
///
/// The scanner itself only ever sees a [crate::lexing::Cursor];
/// a [Source] is what the in-crate cursor ([SourceStream]) reads from.
///
pub trait Source {
    ///
    /// A friendly appropriate format to point
    /// to a location of a token.
    ///
    /// This could be line-column information, or simply an index.
    ///
    type Location<'a>
    where
        Self: 'a;

    ///
    /// Find the location of this span,
    /// and put it into a friendly appropriate format.
    ///
    fn locate(&self, span: Span) -> Option<Self::Location<'_>>;

    ///
    /// Returns the start and (exclusive) end index of this source.
    ///
    fn bounds(&self) -> Range<Loc>;

    ///
    /// Checks if a given [Span] is within bounds.
    ///
    fn in_bounds(&self, span: &Span) -> bool {
        self.bounds().end >= span.end
    }

    ///
    /// Returns the source text at a given [Span], if within bounds.
    ///
    fn source_at(&self, span: impl Spanned) -> Option<String>;

    ///
    /// Get the characters in this [Source].
    ///
    fn characters(&self) -> &[char];

    ///
    /// Create a cursor over this source.
    ///
    fn stream(&self) -> SourceStream<Self>
    where
        Self: Sized,
    {
        SourceStream::new(self)
    }
}
