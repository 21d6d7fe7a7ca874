//!
//! Positions in ABC text: [Loc] for one character, [Span] for a token.
//!
//! Both count characters, not bytes, the same way the grammar
//! engine's lexer steps through its input.
//!

use std::ops::Range;

///
/// Index of a character in the source text.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Loc(pub(crate) usize);

impl From<usize> for Loc {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Loc> for usize {
    fn from(value: Loc) -> Self {
        value.0
    }
}

///
/// Characters `start..end` of the source, as covered by one token.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub(crate) start: Loc,
    pub(crate) end: Loc,
}

impl Span {
    ///
    /// An `end` before `start` collapses to an empty span at `start`.
    ///
    pub fn new(start: impl Into<Loc>, end: impl Into<Loc>) -> Self {
        let (start, end) = (start.into(), end.into());
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn start(&self) -> Loc {
        self.start
    }

    ///
    /// Exclusive end.
    ///
    pub fn end(&self) -> Loc {
        self.end
    }

    ///
    /// A zero-width span, as only EOF produces.
    ///
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start.0..self.end.0
    }
}

///
/// Anything that knows which characters it came from.
///
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::{Loc, Span};

    #[test]
    fn backwards_spans_collapse() {
        let span = Span::new(4usize, 2usize);
        assert_eq!(span.start(), Loc(4));
        assert!(span.is_empty());
        assert_eq!(span.as_range(), 4..4);
    }

    #[test]
    fn token_ranges() {
        let span = Span::new(2usize, 7usize);
        assert!(!span.is_empty());
        assert_eq!(span.as_range(), 2..7);
        assert_eq!(usize::from(span.end()), 7);
    }
}
