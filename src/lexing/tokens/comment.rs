//!
//! ## Comments and stylesheet directives
//! Both start with `%`, so one scanner handles them together.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_identifier_continue, is_newline},
    utils::Lexer,
    TokenKind,
};

///
/// Directives that open and close a free-text block.
///
const BEGIN_TEXT: &str = "begintext";
const END_TEXT: &str = "endtext";

///
/// `%%directive ...` or `% comment`, each running to the end of the line.
///
/// A `%%` line is still a comment when no directive is acceptable.
///
#[AbcRef("Comments and remarks", "abc:standard:v2.1:comments_and_remarks")]
pub fn scan_percent_token(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid_any(&[TokenKind::Comment, TokenKind::StylesheetDirective]) || !lx.eat('%') {
        return false;
    }

    if lx.is('%') && lx.valid(TokenKind::StylesheetDirective) {
        let _ = lx.take();

        let mut len = 0;
        let (mut begin, mut end) = (true, true);
        while let Some(ch) = lx.peek().filter(|ch| is_identifier_continue(*ch)) {
            let _ = lx.take();
            begin &= char_at(BEGIN_TEXT, len) == Some(ch);
            end &= char_at(END_TEXT, len) == Some(ch);
            len += 1;
        }

        lx.take_until(is_newline);

        if begin && len == BEGIN_TEXT.len() {
            lx.state_mut().in_text_block = true;
        } else if end && len == END_TEXT.len() {
            lx.state_mut().in_text_block = false;
        }

        return lx.emit(TokenKind::StylesheetDirective);
    }

    if !lx.valid(TokenKind::Comment) {
        return false;
    }

    lx.take_until(is_newline);
    lx.emit(TokenKind::Comment)
}

///
/// The `i`th character of an ASCII directive name.
///
fn char_at(name: &str, i: usize) -> Option<char> {
    name.as_bytes().get(i).map(|b| char::from(*b))
}
