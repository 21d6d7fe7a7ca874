//!
//! Drives the dispatcher over a whole [Source], standing in for
//! the grammar engine: it asks a [SymbolMask] what is valid before
//! each call and resumes at the end of each token.
//!

use abc_scanner_macros::Spanned;
use thiserror::Error;
use tracing::trace;

use crate::common::{Loc, Source, Span};

use super::{dispatch, utils::SourceStream, ScannerState, TokenKind, ValidSymbols};

///
/// A token and where it sits in the source.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Spanned)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub span: Span,
}

///
/// How many characters of context a [LexError] quotes.
///
const NEAR_LEN: usize = 16;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("No token could be produced on line {line}, near {near:?}")]
    NoToken {
        span: Span,
        line: u16,
        near: String,
    },

    #[error("{kind} token on line {line} is empty; lexing would not progress")]
    Stalled { kind: TokenKind, span: Span, line: u16 },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::NoToken { span, .. } | LexError::Stalled { span, .. } => *span,
        }
    }
}

///
/// Decides which kinds are valid for the next call.
///
pub trait SymbolMask {
    ///
    /// Called once before every scan, with the kind of the token
    /// produced by the previous call (`None` on the first).
    ///
    fn valid_symbols(&mut self, state: &ScannerState, previous: Option<TokenKind>) -> ValidSymbols;
}

///
/// The same kinds, every time.
///
impl SymbolMask for ValidSymbols {
    fn valid_symbols(&mut self, _: &ScannerState, _: Option<TokenKind>) -> ValidSymbols {
        *self
    }
}

impl<F> SymbolMask for F
where
    F: FnMut(&ScannerState, Option<TokenKind>) -> ValidSymbols,
{
    fn valid_symbols(&mut self, state: &ScannerState, previous: Option<TokenKind>) -> ValidSymbols {
        self(state, previous)
    }
}

///
/// Yields [Lexeme]s until EOF or the first failed call.
///
pub struct Tokenizer<'a, S: Source, M: SymbolMask> {
    stream: SourceStream<'a, S>,
    state: ScannerState,
    mask: M,
    previous: Option<TokenKind>,
    done: bool,
}

impl<'a, S: Source, M: SymbolMask> Tokenizer<'a, S, M> {
    pub fn new(source: &'a S, mask: M) -> Self {
        Self::with_state(source, ScannerState::new(), mask)
    }

    ///
    /// Starts from a given state, e.g. one restored from a snapshot.
    ///
    pub fn with_state(source: &'a S, state: ScannerState, mask: M) -> Self {
        Self {
            stream: SourceStream::new(source),
            state,
            mask,
            previous: None,
            done: false,
        }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    fn near(&self, at: Loc) -> String {
        self.stream
            .source()
            .characters()
            .get(usize::from(at)..)
            .unwrap_or_default()
            .iter()
            .take(NEAR_LEN)
            .collect()
    }
}

impl<'a, S: Source, M: SymbolMask> Iterator for Tokenizer<'a, S, M> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.stream.begin_token();
        let at = self.stream.index();
        let valid = self.mask.valid_symbols(&self.state, self.previous);

        let matched = dispatch::scan(&mut self.state, &mut self.stream, &valid);
        let token = self.stream.finish_token().filter(|_| matched);

        let Some((kind, span)) = token else {
            self.done = true;
            return Some(Err(LexError::NoToken {
                span: Span::new(at, at),
                line: self.state.line_number,
                near: self.near(at),
            }));
        };

        trace!(%kind, ?span, "lexeme");

        if kind == TokenKind::Eof {
            self.done = true;
        } else if span.is_empty() && span.end() <= at {
            self.done = true;
            return Some(Err(LexError::Stalled {
                kind,
                span,
                line: self.state.line_number,
            }));
        }

        self.previous = Some(kind);
        Some(Ok(Lexeme { kind, span }))
    }
}

impl<'a, S: Source, M: SymbolMask> std::iter::FusedIterator for Tokenizer<'a, S, M> {}
