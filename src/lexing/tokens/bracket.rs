//!
//! ## Brackets
//! Chords `[CEG]`, grace groups `{/g}` and inline fields `[K:D]`.
//!

use crate::lexing::{classify::is_alpha, utils::Lexer, TokenKind};

fn scan_one(lx: &mut Lexer<'_>, pairs: &[(char, TokenKind)]) -> bool {
    let Some(next) = lx.peek() else {
        return false;
    };

    match pairs.iter().find(|(ch, kind)| *ch == next && lx.valid(*kind)) {
        Some((_, kind)) => {
            let _ = lx.take();
            lx.emit(*kind)
        }
        None => false,
    }
}

pub fn scan_chord_bracket(lx: &mut Lexer<'_>) -> bool {
    scan_one(
        lx,
        &[
            ('[', TokenKind::ChordLeftBracket),
            (']', TokenKind::ChordRightBracket),
        ],
    )
}

pub fn scan_grace_brace(lx: &mut Lexer<'_>) -> bool {
    scan_one(
        lx,
        &[
            ('{', TokenKind::GraceLeftBrace),
            ('}', TokenKind::GraceRightBrace),
        ],
    )
}

///
/// The acciaccatura slash, `{/g}`.
///
pub fn scan_grace_slash(lx: &mut Lexer<'_>) -> bool {
    scan_one(lx, &[('/', TokenKind::GraceSlash)])
}

pub fn scan_inline_field_left(lx: &mut Lexer<'_>) -> bool {
    scan_one(lx, &[('[', TokenKind::InlineFieldLeftBracket)])
}

pub fn scan_inline_field_right(lx: &mut Lexer<'_>) -> bool {
    scan_one(lx, &[(']', TokenKind::InlineFieldRightBracket)])
}

///
/// Settle a `[` that was just taken (and marked).
///
/// When both a chord and an inline field are acceptable, the character
/// after the bracket is read too: `[K:` is a field, anything else a chord.
/// The token still ends right after the `[`.
///
pub fn finish_open_bracket(lx: &mut Lexer<'_>) -> bool {
    let chord = lx.valid(TokenKind::ChordLeftBracket);
    let field = lx.valid(TokenKind::InlineFieldLeftBracket);

    let kind = match (chord, field) {
        (true, true) => {
            if lx.eat_if(is_alpha) && lx.is(':') {
                TokenKind::InlineFieldLeftBracket
            } else {
                TokenKind::ChordLeftBracket
            }
        }
        (true, false) => TokenKind::ChordLeftBracket,
        (false, true) => TokenKind::InlineFieldLeftBracket,
        (false, false) if lx.valid(TokenKind::LBracket) => TokenKind::LBracket,
        (false, false) => return false,
    };

    lx.accept(kind)
}

const OPENERS: &[TokenKind] = &[
    TokenKind::ChordLeftBracket,
    TokenKind::InlineFieldLeftBracket,
    TokenKind::LBracket,
];

///
/// Chord and inline-field brackets, when no bar line is acceptable.
///
pub fn scan_bracket(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some('[') if lx.valid_any(OPENERS) => {
            let _ = lx.take();
            lx.mark_end();
            finish_open_bracket(lx)
        }
        Some(']') => scan_one(
            lx,
            &[
                (']', TokenKind::ChordRightBracket),
                (']', TokenKind::InlineFieldRightBracket),
                (']', TokenKind::RBracket),
            ],
        ),
        _ => false,
    }
}

pub fn scan_grace_group(lx: &mut Lexer<'_>) -> bool {
    scan_one(
        lx,
        &[
            ('{', TokenKind::GraceLeftBrace),
            ('}', TokenKind::GraceRightBrace),
            ('/', TokenKind::GraceSlash),
        ],
    )
}
