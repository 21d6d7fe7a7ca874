//!
//! Utilities for lexing: the [Cursor] the grammar engine hands us,
//! and the [Lexer] helper every sub-scanner is written against.
//!

pub mod stream;

#[cfg(test)]
pub(crate) mod probe;

use super::{ScannerState, TokenKind, ValidSymbols};

pub use self::stream::SourceStream;

///
/// The grammar engine's view of the input during one scan call.
///
/// There is no way to move backwards: once advanced past,
/// a character stays behind the cursor.
///
pub trait Cursor {
    ///
    /// The upcoming character, or `None` at the end of input
    /// or where the input doesn't decode.
    ///
    fn lookahead(&self) -> Option<char>;

    ///
    /// Move past the lookahead character.
    ///
    /// With `consume`, the character becomes part of the pending token;
    /// otherwise it is skipped as trivia in front of the token.
    ///
    fn advance(&mut self, consume: bool);

    ///
    /// Fix the current position as the end of the pending token.
    ///
    fn mark_end(&mut self);

    fn at_end(&self) -> bool;

    ///
    /// Record the kind of the token being produced.
    ///
    fn set_result(&mut self, kind: TokenKind);
}

///
/// Everything one scan call works with: the cursor, the scanner's
/// persisted state, and the kinds the grammar currently accepts.
///
pub struct Lexer<'a> {
    cursor: &'a mut dyn Cursor,
    state: &'a mut ScannerState,
    valid: ValidSymbols,
    advanced: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(
        cursor: &'a mut dyn Cursor,
        state: &'a mut ScannerState,
        valid: ValidSymbols,
    ) -> Self {
        Self {
            cursor,
            state,
            valid,
            advanced: 0,
        }
    }

    ///
    /// Peeks at the next upcoming character.
    ///
    /// Only the end of input is `None`; a lookahead the cursor can't
    /// decode reads as [char::REPLACEMENT_CHARACTER].
    ///
    pub fn peek(&self) -> Option<char> {
        if self.cursor.at_end() {
            return None;
        }

        Some(self.cursor.lookahead().unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    ///
    /// Checks if the next character satisfies a predicate.
    ///
    pub fn upcoming(&self, pred: impl Fn(char) -> bool) -> bool {
        self.peek().map(pred).unwrap_or(false)
    }

    ///
    /// Checks if the next character is `ch`.
    ///
    pub fn is(&self, ch: char) -> bool {
        self.peek() == Some(ch)
    }

    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    ///
    /// Take the next character into the pending token.
    ///
    pub fn take(&mut self) -> Option<char> {
        self.advance(true)
    }

    ///
    /// Step over the next character without making it part of the token.
    ///
    pub fn skip(&mut self) -> Option<char> {
        self.advance(false)
    }

    fn advance(&mut self, consume: bool) -> Option<char> {
        let ch = self.peek()?;
        self.cursor.advance(consume);
        self.advanced += 1;
        Some(ch)
    }

    ///
    /// Take the next character if it is `ch`.
    ///
    pub fn eat(&mut self, ch: char) -> bool {
        self.eat_if(|next| next == ch)
    }

    ///
    /// Take the next character if it satisfies a predicate.
    ///
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        if self.upcoming(pred) {
            let _ = self.take();
            return true;
        }

        false
    }

    ///
    /// Take characters whilst they satisfy some predicate,
    /// returning how many were taken.
    ///
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut taken = 0;
        while self.upcoming(&pred) {
            let _ = self.take();
            taken += 1;
        }

        taken
    }

    ///
    /// Take characters until one satisfies the predicate (or input ends).
    ///
    pub fn take_until(&mut self, pred: impl Fn(char) -> bool) -> usize {
        self.take_while(|ch| !pred(ch))
    }

    ///
    /// Skip characters whilst they satisfy some predicate.
    ///
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut skipped = 0;
        while self.upcoming(&pred) {
            let _ = self.skip();
            skipped += 1;
        }

        skipped
    }

    ///
    /// How many characters this call has moved past so far,
    /// taken or skipped.
    ///
    pub fn advanced(&self) -> usize {
        self.advanced
    }

    ///
    /// Would the grammar accept a token of this kind here?
    ///
    pub fn valid(&self, kind: TokenKind) -> bool {
        self.valid.contains(kind)
    }

    pub fn valid_any(&self, kinds: &[TokenKind]) -> bool {
        self.valid.contains_any(kinds)
    }

    pub fn mark_end(&mut self) {
        self.cursor.mark_end();
    }

    ///
    /// End the token here, as a `kind`.
    ///
    pub fn emit(&mut self, kind: TokenKind) -> bool {
        self.cursor.mark_end();
        self.accept(kind)
    }

    ///
    /// Report `kind` for a token whose end was already marked.
    ///
    pub fn accept(&mut self, kind: TokenKind) -> bool {
        self.cursor.set_result(kind);
        true
    }

    pub fn state(&self) -> &ScannerState {
        &*self.state
    }

    pub fn state_mut(&mut self) -> &mut ScannerState {
        &mut *self.state
    }
}
