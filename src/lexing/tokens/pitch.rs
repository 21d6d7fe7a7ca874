//!
//! ## Notes
//! Pitches and what clings to them: accidentals, octave marks,
//! rests, ties, decorations and slurs.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_alpha, is_decoration_char, is_note_letter, is_octave_marker, is_rest_letter},
    utils::Lexer,
    TokenKind,
};

use super::letter::{finish_letter, Run};

///
/// `^`, `^^`, `^/`, `_`, `__`, `_/` or `=`.
///
#[AbcRef("Accidentals", "abc:standard:v2.1:accidentals")]
pub fn scan_accidental(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Accidental) {
        return false;
    }

    match lx.peek() {
        Some(sign @ ('^' | '_')) => {
            let _ = lx.take();
            // Doubled, or a half (quarter-tone) accidental.
            lx.eat_if(|ch| ch == sign || ch == '/');
        }
        Some('=') => {
            let _ = lx.take();
        }
        _ => return false,
    }

    lx.emit(TokenKind::Accidental)
}

///
/// One of `[a-gA-G]`.
///
#[AbcRef("Pitch", "abc:standard:v2.1:pitch")]
pub fn scan_note_letter(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::NoteLetter) || !lx.eat_if(is_note_letter) {
        return false;
    }

    lx.emit(TokenKind::NoteLetter)
}

///
/// A note letter, unless it opens a field (`A:`, `K:`...).
///
pub fn scan_note(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some(letter) if is_note_letter(letter) => {
            let _ = lx.take();
            finish_letter(lx, letter, &[(TokenKind::NoteLetter, Run::Single)])
        }
        _ => false,
    }
}

///
/// `'` and `,` runs. Mixed runs are not validated: `',` is one token.
///
pub fn scan_octave(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Octave) || lx.take_while(is_octave_marker) == 0 {
        return false;
    }

    lx.emit(TokenKind::Octave)
}

#[AbcRef("Rests", "abc:standard:v2.1:rests")]
pub fn scan_rest(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Rest) || !lx.eat_if(is_rest_letter) {
        return false;
    }

    lx.emit(TokenKind::Rest)
}

///
/// A rest letter, unless it opens a field (`X:`, `Z:`).
///
pub fn scan_rest_or_field(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some(letter) if is_rest_letter(letter) => {
            let _ = lx.take();
            finish_letter(lx, letter, &[(TokenKind::Rest, Run::Single)])
        }
        _ => false,
    }
}

pub fn scan_tie(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Tie) || !lx.eat('-') {
        return false;
    }

    lx.emit(TokenKind::Tie)
}

///
/// Runs of the shorthand decorations `[.~HLMOPRSTuv]`.
///
#[AbcRef("Decorations", "abc:standard:v2.1:decorations")]
pub fn scan_decoration(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Decoration) || lx.take_while(is_decoration_char) == 0 {
        return false;
    }

    lx.emit(TokenKind::Decoration)
}

///
/// Decoration runs; a leading letter may still turn out to open a field (`T:`).
///
pub fn scan_decoration_or_field(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some(letter) if is_alpha(letter) && is_decoration_char(letter) => {
            let _ = lx.take();
            finish_letter(
                lx,
                letter,
                &[(TokenKind::Decoration, Run::While(is_decoration_char))],
            )
        }
        _ => scan_decoration(lx),
    }
}

///
/// `(` or `)`.
///
pub fn scan_slur(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Slur) || !lx.eat_if(|ch| matches!(ch, '(' | ')')) {
        return false;
    }

    lx.emit(TokenKind::Slur)
}
