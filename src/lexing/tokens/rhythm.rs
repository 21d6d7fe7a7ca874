//!
//! ## Rhythm
//! Note lengths (`A3/2`, `A/`) and broken rhythm (`A>B`), plus plain numbers.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_broken_rhythm_char, is_digit},
    utils::Lexer,
    TokenKind,
};

fn scan_digits(lx: &mut Lexer<'_>, kind: TokenKind) -> bool {
    if !lx.valid(kind) || lx.take_while(is_digit) == 0 {
        return false;
    }

    lx.emit(kind)
}

#[AbcRef("Note lengths", "abc:standard:v2.1:note_lengths")]
pub fn scan_rhythm_numerator(lx: &mut Lexer<'_>) -> bool {
    scan_digits(lx, TokenKind::RhythmNumerator)
}

pub fn scan_rhythm_denominator(lx: &mut Lexer<'_>) -> bool {
    scan_digits(lx, TokenKind::RhythmDenominator)
}

pub fn scan_rhythm_separator(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::RhythmSeparator) || !lx.eat('/') {
        return false;
    }

    lx.emit(TokenKind::RhythmSeparator)
}

///
/// `[<>]+`
///
#[AbcRef("Broken rhythm", "abc:standard:v2.1:broken_rhythm")]
pub fn scan_broken_rhythm(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::BrokenRhythm) || lx.take_while(is_broken_rhythm_char) == 0 {
        return false;
    }

    lx.emit(TokenKind::BrokenRhythm)
}

///
/// `[0-9]+(\.[0-9]+)?`. A dot without digits after it is left out of the number.
///
pub fn scan_number(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Number) || lx.take_while(is_digit) == 0 {
        return false;
    }

    lx.mark_end();

    if lx.eat('.') && lx.take_while(is_digit) > 0 {
        lx.mark_end();
    }

    lx.accept(TokenKind::Number)
}

pub fn is_rhythm_start(ch: char) -> bool {
    is_digit(ch) || ch == '/' || is_broken_rhythm_char(ch)
}

///
/// A digit run is a numerator if one is acceptable, else a denominator.
///
pub fn scan_rhythm(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some('/') => scan_rhythm_separator(lx),
        Some(ch) if is_broken_rhythm_char(ch) => scan_broken_rhythm(lx),
        Some(ch) if is_digit(ch) => {
            if lx.valid(TokenKind::RhythmNumerator) {
                scan_rhythm_numerator(lx)
            } else {
                scan_rhythm_denominator(lx)
            }
        }
        _ => false,
    }
}
