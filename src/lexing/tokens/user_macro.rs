//!
//! ## User symbols and macros
//! `U: T = !trill!` binds a letter to a symbol;
//! `m: ~G2 = G/A/G/F/G` defines a macro.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_macro_var_continue, is_macro_var_start, is_newline, is_user_symbol_char},
    utils::Lexer,
    TokenKind,
};

use super::letter::{finish_letter, scan_header, Run};

#[AbcRef("Redefinable symbols", "abc:standard:v2.1:redefinable_symbols")]
pub fn scan_user_symbol_header(lx: &mut Lexer<'_>) -> bool {
    scan_header(lx, |ch| ch == 'U', TokenKind::UserSymbolHeader, &[])
}

fn scan_user_char(lx: &mut Lexer<'_>, kind: TokenKind) -> bool {
    if !lx.valid(kind) || !lx.eat_if(is_user_symbol_char) {
        return false;
    }

    lx.emit(kind)
}

///
/// The letter being defined on a `U:` line.
///
pub fn scan_user_symbol(lx: &mut Lexer<'_>) -> bool {
    scan_user_char(lx, TokenKind::UserSymbol)
}

///
/// A redefinable letter used in the tune body.
///
pub fn scan_user_symbol_invocation(lx: &mut Lexer<'_>) -> bool {
    scan_user_char(lx, TokenKind::UserSymbolInvocation)
}

#[AbcRef("Macros", "abc:standard:v2.1:macros")]
pub fn scan_macro_header(lx: &mut Lexer<'_>) -> bool {
    scan_header(lx, |ch| ch == 'm', TokenKind::MacroHeader, &[])
}

fn scan_macro_name(lx: &mut Lexer<'_>, kind: TokenKind) -> bool {
    if !lx.valid(kind) || !lx.eat_if(is_macro_var_start) {
        return false;
    }

    lx.take_while(is_macro_var_continue);
    lx.emit(kind)
}

///
/// A macro name on its `m:` line. `n` stands for any note.
///
pub fn scan_macro_var(lx: &mut Lexer<'_>) -> bool {
    scan_macro_name(lx, TokenKind::MacroVar)
}

pub fn scan_macro_invocation(lx: &mut Lexer<'_>) -> bool {
    scan_macro_name(lx, TokenKind::MacroInvocation)
}

///
/// A macro's expansion: up to the end of the line or a comment.
///
pub fn scan_macro_string(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::MacroString) || lx.take_until(|ch| is_newline(ch) || ch == '%') == 0 {
        return false;
    }

    lx.emit(TokenKind::MacroString)
}

const USER_SYMBOLS: &[TokenKind] = &[TokenKind::UserSymbolInvocation, TokenKind::UserSymbol];
const MACROS: &[TokenKind] = &[TokenKind::MacroInvocation, TokenKind::MacroVar];

pub fn is_user_or_macro_start(ch: char) -> bool {
    is_user_symbol_char(ch) || is_macro_var_start(ch)
}

///
/// Redefined letters and macro names. Nothing is taken unless one of
/// them is acceptable; a letter may still turn out to open a field.
///
pub fn scan_user_or_macro(lx: &mut Lexer<'_>) -> bool {
    let Some(ch) = lx.peek() else {
        return false;
    };

    if is_user_symbol_char(ch) && lx.valid_any(USER_SYMBOLS) {
        let _ = lx.take();
        return finish_letter(
            lx,
            ch,
            &[
                (TokenKind::UserSymbolInvocation, Run::Single),
                (TokenKind::UserSymbol, Run::Single),
            ],
        );
    }

    if is_macro_var_start(ch) && lx.valid_any(MACROS) {
        let _ = lx.take();
        return finish_letter(
            lx,
            ch,
            &[
                (TokenKind::MacroInvocation, Run::While(is_macro_var_continue)),
                (TokenKind::MacroVar, Run::While(is_macro_var_continue)),
            ],
        );
    }

    false
}
