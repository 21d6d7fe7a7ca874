//!
//! ## Punctuation
//! Single characters inside directives and field values,
//! the reserved characters, and error recovery.
//!

use crate::lexing::{
    classify::{is_reserved_char, is_sync_char},
    utils::Lexer,
    TokenKind,
};

macro_rules! single_char_scanners {
    ($($(#[$meta:meta])* $name:ident: $ch:literal => $kind:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(lx: &mut Lexer<'_>) -> bool {
                if !lx.valid(TokenKind::$kind) || !lx.eat($ch) {
                    return false;
                }

                lx.emit(TokenKind::$kind)
            }
        )*

        ///
        /// Every punctuation character, with the kind it produces.
        ///
        pub const PUNCTUATION: &[(char, TokenKind)] = &[$(($ch, TokenKind::$kind),)*];
    };
}

single_char_scanners! {
    scan_equals: '=' => Equals;
    scan_slash: '/' => Slash;
    scan_minus: '-' => Minus;
    scan_plus: '+' => Plus;
    scan_lparen: '(' => LParen;
    scan_rparen: ')' => RParen;
    scan_lbrace: '{' => LBrace;
    scan_rbrace: '}' => RBrace;
    scan_lbracket: '[' => LBracket;
    scan_rbracket: ']' => RBracket;
    scan_pipe: '|' => Pipe;
}

pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.iter().any(|(punct, _)| *punct == ch)
}

pub fn scan_punctuation(lx: &mut Lexer<'_>) -> bool {
    let Some(next) = lx.peek() else {
        return false;
    };

    match PUNCTUATION.iter().find(|(ch, _)| *ch == next) {
        Some((_, kind)) if lx.valid(*kind) => {
            let _ = lx.take();
            lx.emit(*kind)
        }
        _ => false,
    }
}

///
/// `#`, `;`, `?` or `@`.
///
pub fn scan_reserved_char(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::ReservedChar) || !lx.eat_if(is_reserved_char) {
        return false;
    }

    lx.emit(TokenKind::ReservedChar)
}

///
/// Recovery: at least one character, then up to the next sync character.
///
pub fn scan_invalid(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Invalid) || lx.take().is_none() {
        return false;
    }

    lx.take_until(is_sync_char);
    lx.emit(TokenKind::Invalid)
}
