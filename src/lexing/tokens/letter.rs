//!
//! ## Field letters
//!
//! Almost every letter can open a `<letter>:` field at the start of a line,
//! and the same letter can be a note, a rest, a decoration, a user symbol
//! or part of a word. Once the letter is behind the cursor, these helpers
//! settle what it was.
//!

use crate::lexing::{
    classify::{is_alpha, is_whitespace},
    utils::Lexer,
    ScannerState, TokenKind,
};

///
/// How far a fallback kind reaches past the letter.
///
#[derive(Debug, Clone, Copy)]
pub enum Run {
    ///
    /// The letter alone.
    ///
    Single,

    ///
    /// The letter, then every following character matching the predicate.
    ///
    While(fn(char) -> bool),
}

///
/// Header kinds `<letter>[ \t]*:` may produce, most specific first.
///
pub fn header_kinds(letter: char) -> &'static [TokenKind] {
    use TokenKind::*;

    match letter {
        'w' => &[LyricHeader, InfoHeader],
        'W' => &[LyricSectionHeader, InfoHeader],
        's' => &[SymbolLineHeader, InfoHeader],
        'U' => &[UserSymbolHeader, InfoHeader],
        'm' => &[MacroHeader, InfoHeader],
        c if is_alpha(c) => &[InfoHeader],
        _ => &[],
    }
}

///
/// Tune boundaries: `X:` starts a new tune header, `K:` closes it.
///
pub fn enter_field(state: &mut ScannerState, letter: char, kind: TokenKind) {
    if kind != TokenKind::InfoHeader {
        return;
    }

    match letter {
        'K' => state.in_tune_body = true,
        'X' => state.in_tune_body = false,
        _ => (),
    }
}

///
/// Settle a letter that was just taken.
///
/// The token end is marked right after the letter first, so every
/// single-letter fallback stays well-formed whatever is read afterwards.
/// If a header for this letter is valid, blanks and a colon are tried next.
/// Otherwise the first valid fallback wins; a [Run::While] fallback only
/// extends the token if nothing was read past the letter.
///
pub fn finish_letter(lx: &mut Lexer<'_>, letter: char, fallbacks: &[(TokenKind, Run)]) -> bool {
    finish_field(lx, letter, header_kinds(letter), fallbacks)
}

///
/// [finish_letter], with the header kinds given explicitly.
///
pub fn finish_field(
    lx: &mut Lexer<'_>,
    letter: char,
    headers: &[TokenKind],
    fallbacks: &[(TokenKind, Run)],
) -> bool {
    lx.mark_end();

    let mut clean = true;

    if lx.valid_any(headers) {
        let blanks = lx.take_while(is_whitespace);

        if lx.eat(':') {
            if let Some(kind) = headers.iter().copied().find(|kind| lx.valid(*kind)) {
                enter_field(lx.state_mut(), letter, kind);
                return lx.emit(kind);
            }
        }

        clean = blanks == 0;
    }

    let Some((kind, run)) = fallbacks.iter().find(|(kind, _)| lx.valid(*kind)) else {
        return false;
    };

    if let (Run::While(pred), true) = (run, clean) {
        lx.take_while(pred);
        lx.mark_end();
    }

    lx.accept(*kind)
}

///
/// A `<letter>[ \t]*:` header of one kind, for a letter matching `letter`.
///
pub fn scan_header(
    lx: &mut Lexer<'_>,
    letter: fn(char) -> bool,
    kind: TokenKind,
    fallbacks: &[(TokenKind, Run)],
) -> bool {
    if !lx.valid(kind) {
        return false;
    }

    match lx.peek() {
        Some(ch) if letter(ch) => {
            let _ = lx.take();
            finish_field(lx, ch, &[kind], fallbacks)
        }
        _ => false,
    }
}
