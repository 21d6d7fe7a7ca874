//!
//! ## Symbol lines
//! `s:` lines place decorations and chord symbols over the notes.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_newline, is_whitespace},
    utils::Lexer,
    TokenKind,
};

use super::letter::scan_header;

pub fn is_symbol_line_text(ch: char) -> bool {
    !(is_whitespace(ch) || is_newline(ch) || matches!(ch, '*' | '|' | '%'))
}

#[AbcRef("Symbol lines", "abc:standard:v2.1:symbol_lines")]
pub fn scan_symbol_line_header(lx: &mut Lexer<'_>) -> bool {
    scan_header(lx, |ch| ch == 's', TokenKind::SymbolLineHeader, &[])
}

///
/// `*`: no symbol over this note.
///
pub fn scan_symbol_line_star(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::SymbolLineStar) || !lx.eat('*') {
        return false;
    }

    lx.emit(TokenKind::SymbolLineStar)
}

pub fn scan_symbol_line_text(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::SymbolLineText) || lx.take_while(is_symbol_line_text) == 0 {
        return false;
    }

    lx.emit(TokenKind::SymbolLineText)
}

pub fn scan_symbol_line(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some('*') => scan_symbol_line_star(lx),
        Some(_) => scan_symbol_line_text(lx),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::{
        utils::probe::{assert_none, assert_token, probe},
        TokenKind,
    };

    use super::*;

    #[test]
    fn header() {
        assert_token(&probe("s:", scan_symbol_line_header), TokenKind::SymbolLineHeader, 2);
        assert_none(&probe("w:", scan_symbol_line_header), 0);
    }

    #[test]
    fn stars_and_text() {
        assert_token(&probe("**", scan_symbol_line_star), TokenKind::SymbolLineStar, 1);
        assert_token(&probe("fine *", scan_symbol_line_text), TokenKind::SymbolLineText, 4);
        assert_token(&probe("D.C.|", scan_symbol_line_text), TokenKind::SymbolLineText, 4);
        assert_none(&probe("*", scan_symbol_line_text), 0);

        assert_token(&probe("*", scan_symbol_line), TokenKind::SymbolLineStar, 1);
        assert_token(&probe("mf", scan_symbol_line), TokenKind::SymbolLineText, 2);
    }
}
