//!
//! A [Cursor] over an in-memory [Source].
//!

use crate::{
    common::{Loc, Source, Span},
    lexing::TokenKind,
};

use super::Cursor;

///
/// Walks a [Source] the way the grammar engine's lexer does:
/// skipped characters in front of a token move the token's start,
/// `mark_end` fixes its end, and the next token resumes from there.
///
#[derive(Debug, Clone)]
pub struct SourceStream<'a, S: Source> {
    index: usize,
    start: usize,
    marked: Option<usize>,
    result: Option<TokenKind>,
    source: &'a S,
}

impl<'a, S: Source> SourceStream<'a, S> {
    ///
    /// Create a new stream from a source.
    ///
    pub fn new(source: &'a S) -> Self {
        Self {
            index: 0,
            start: 0,
            marked: None,
            result: None,
            source,
        }
    }

    ///
    /// Returns the source where this [SourceStream]
    /// came from.
    ///
    pub fn source(&self) -> &S {
        self.source
    }

    ///
    /// Current position of the cursor.
    ///
    pub fn index(&self) -> Loc {
        Loc(self.index)
    }

    ///
    /// Where the last `mark_end` left the pending token's end.
    ///
    pub fn marked(&self) -> Option<Loc> {
        self.marked.map(Loc)
    }

    pub fn result(&self) -> Option<TokenKind> {
        self.result
    }

    ///
    /// Start a fresh token at the cursor.
    ///
    pub fn begin_token(&mut self) {
        self.start = self.index;
        self.marked = None;
        self.result = None;
    }

    ///
    /// Close the pending token, if a kind was reported for it.
    ///
    /// The cursor moves back to the marked end, like the grammar engine
    /// does before its next call; without a mark, the token ends at the cursor.
    ///
    pub fn finish_token(&mut self) -> Option<(TokenKind, Span)> {
        let kind = self.result?;
        let end = self.marked.unwrap_or(self.index);
        let span = Span::new(self.start, end);

        self.index = span.end.0;
        self.begin_token();

        Some((kind, span))
    }
}

impl<'a, S: Source> Cursor for SourceStream<'a, S> {
    fn lookahead(&self) -> Option<char> {
        self.source.characters().get(self.index).copied()
    }

    fn advance(&mut self, consume: bool) {
        if self.index >= self.source.characters().len() {
            return;
        }

        // Trivia only moves the start while the token is still empty.
        if !consume && self.index == self.start {
            self.start += 1;
        }

        self.index += 1;
    }

    fn mark_end(&mut self) {
        self.marked = Some(self.index);
    }

    fn at_end(&self) -> bool {
        self.index >= self.source.characters().len()
    }

    fn set_result(&mut self, kind: TokenKind) {
        self.result = Some(kind);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{file::SourceFile, Source},
        lexing::{Cursor, TokenKind},
    };

    #[test]
    fn skipped_trivia_moves_start() {
        let source = SourceFile::dummy_file("  2,");
        let mut stream = source.stream();

        stream.advance(false);
        stream.advance(false);
        stream.advance(true);
        stream.mark_end();
        stream.set_result(TokenKind::RepeatNumber);

        let (kind, span) = stream.finish_token().expect("Token was reported");
        assert_eq!(kind, TokenKind::RepeatNumber);
        assert_eq!(span.as_range(), 2..3);
        assert_eq!(stream.lookahead(), Some(','));
    }

    #[test]
    fn resumes_at_marked_end() {
        let source = SourceFile::dummy_file("\nA");
        let mut stream = source.stream();

        // One newline marked, then a peek past it.
        stream.advance(true);
        stream.mark_end();
        stream.advance(true);
        stream.set_result(TokenKind::Eol);

        let (_, span) = stream.finish_token().expect("Token was reported");
        assert_eq!(span.as_range(), 0..1);
        assert_eq!(stream.lookahead(), Some('A'));
    }

    #[test]
    fn no_result_no_token() {
        let source = SourceFile::dummy_file("(");
        let mut stream = source.stream();
        stream.advance(true);
        assert_eq!(stream.finish_token(), None);
        assert!(stream.at_end());

        // Advancing at the end is a no-op.
        stream.advance(true);
        assert_eq!(usize::from(stream.index()), 1);
    }
}
