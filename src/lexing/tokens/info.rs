//!
//! ## Information fields
//! `X:1`, `T:Title`, the `+:` continuation, and voices.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_alpha, is_identifier_continue, is_newline, is_whitespace},
    utils::Lexer,
    TokenKind,
};

use super::letter::{finish_letter, header_kinds, scan_header, Run};

///
/// `[A-Za-z][ \t]*:`. Without the colon, the letter and what follows it
/// may still make an identifier.
///
#[AbcRef("Information fields", "abc:standard:v2.1:information_fields")]
pub fn scan_info_header(lx: &mut Lexer<'_>) -> bool {
    scan_header(
        lx,
        is_alpha,
        TokenKind::InfoHeader,
        &[(TokenKind::Identifier, Run::While(is_identifier_continue))],
    )
}

///
/// A letter that may open a field: a header of whatever kind the letter
/// allows, otherwise a word or a line of free text.
///
pub fn scan_field_or_word(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some(letter) if is_alpha(letter) && lx.valid_any(header_kinds(letter)) => {
            let _ = lx.take();
            finish_letter(
                lx,
                letter,
                &[
                    (TokenKind::Identifier, Run::While(is_identifier_continue)),
                    (TokenKind::FreeText, Run::While(|ch| !is_newline(ch))),
                ],
            )
        }
        _ => false,
    }
}

///
/// The value of a field: the rest of the line.
///
pub fn scan_info_string(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::InfoString) || lx.take_until(is_newline) == 0 {
        return false;
    }

    lx.emit(TokenKind::InfoString)
}

///
/// `+[ \t]*:`, continuing the previous field on a new line.
///
#[AbcRef("Continuation of input lines", "abc:standard:v2.1:continuation_of_input_lines")]
pub fn scan_info_continuation(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::InfoContinuation) || !lx.eat('+') {
        return false;
    }

    lx.take_while(is_whitespace);
    lx.eat(':') && lx.emit(TokenKind::InfoContinuation)
}

///
/// `&`, separating voices.
///
pub fn scan_voice(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Voice) || !lx.eat('&') {
        return false;
    }

    lx.emit(TokenKind::Voice)
}
