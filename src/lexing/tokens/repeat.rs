//!
//! ## Repeat endings
//! The numbers after a bar line: `|1`, `[1,3`, `[1-3`, `|2x`.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_digit, is_whitespace},
    utils::Lexer,
    TokenKind,
};

///
/// `[0-9]+`. Blanks in front are skipped, not made part of the number.
///
#[AbcRef("Variant endings", "abc:standard:v2.1:variant_endings")]
pub fn scan_repeat_number(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::RepeatNumber) {
        return false;
    }

    lx.skip_while(is_whitespace);

    if lx.take_while(is_digit) == 0 {
        return false;
    }

    lx.emit(TokenKind::RepeatNumber)
}

pub fn scan_repeat_comma(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::RepeatComma) || !lx.eat(',') {
        return false;
    }

    lx.emit(TokenKind::RepeatComma)
}

pub fn scan_repeat_dash(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::RepeatDash) || !lx.eat('-') {
        return false;
    }

    lx.emit(TokenKind::RepeatDash)
}

pub fn scan_repeat_x(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::RepeatX) || !lx.eat_if(|ch| matches!(ch, 'x' | 'X')) {
        return false;
    }

    lx.emit(TokenKind::RepeatX)
}

pub fn is_repeat_start(ch: char) -> bool {
    is_digit(ch) || is_whitespace(ch) || matches!(ch, ',' | '-' | 'x' | 'X')
}

pub fn scan_repeat_ending(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some(',') => scan_repeat_comma(lx),
        Some('-') => scan_repeat_dash(lx),
        Some('x' | 'X') => scan_repeat_x(lx),
        Some(ch) if is_digit(ch) || is_whitespace(ch) => scan_repeat_number(lx),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::{
        utils::probe::{assert_none, assert_token, probe, probe_only},
        TokenKind,
    };

    use super::*;

    #[test]
    fn numbers() {
        assert_token(&probe("1", scan_repeat_number), TokenKind::RepeatNumber, 1);
        assert_token(&probe("12,", scan_repeat_number), TokenKind::RepeatNumber, 2);
        assert_none(&probe("A", scan_repeat_number), 0);
    }

    #[test]
    fn leading_blanks_are_skipped() {
        let p = probe("  2", scan_repeat_number);
        assert_token(&p, TokenKind::RepeatNumber, 3);
        assert_eq!(p.end, Some(3));

        assert_none(&probe("  A", scan_repeat_number), 2);
    }

    #[test]
    fn separators() {
        assert_token(&probe(",", scan_repeat_comma), TokenKind::RepeatComma, 1);
        assert_token(&probe("-", scan_repeat_dash), TokenKind::RepeatDash, 1);
        assert_token(&probe("x", scan_repeat_x), TokenKind::RepeatX, 1);
        assert_token(&probe("X", scan_repeat_x), TokenKind::RepeatX, 1);
        assert_none(&probe("A", scan_repeat_comma), 0);
        assert_none(&probe("A", scan_repeat_dash), 0);
        assert_none(&probe("A", scan_repeat_x), 0);
    }

    #[test]
    fn ending_routes_by_character() {
        assert_token(&probe("1-3", scan_repeat_ending), TokenKind::RepeatNumber, 1);
        assert_token(&probe("-3", scan_repeat_ending), TokenKind::RepeatDash, 1);
        assert_none(&probe_only(",", &[TokenKind::RepeatNumber], scan_repeat_ending), 0);
    }
}
