use crate::lexing::{classify::is_whitespace, utils::Lexer, TokenKind};

///
/// `[ \t]+`
///
pub fn scan_whitespace(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Whitespace) || lx.take_while(is_whitespace) == 0 {
        return false;
    }

    lx.emit(TokenKind::Whitespace)
}
