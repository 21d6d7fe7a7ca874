//!
//! ## Quoted strings and symbols
//! Chord symbols and annotations in double quotes,
//! `!decoration!` and `+decoration+` symbols, and escaped characters.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_annotation_placement, is_newline, is_whitespace},
    utils::Lexer,
    TokenKind,
};

///
/// The body of a quoted string, after its opening quote.
///
/// A backslash takes the character after it, so `\"` does not close the
/// string. Newlines are never taken: an unterminated string ends before one.
///
fn finish_quoted(lx: &mut Lexer<'_>) {
    while let Some(ch) = lx.peek() {
        match ch {
            '\n' | '\r' => return,
            '"' => {
                let _ = lx.take();
                return;
            }
            '\\' => {
                let _ = lx.take();
                lx.eat_if(|next| !is_newline(next));
            }
            _ => {
                let _ = lx.take();
            }
        }
    }
}

fn scan_quoted_as(lx: &mut Lexer<'_>, kind: TokenKind) -> bool {
    if !lx.valid(kind) || !lx.eat('"') {
        return false;
    }

    finish_quoted(lx);
    lx.emit(kind)
}

///
/// `"^text"`, `"_text"`, `"<text"`, `">text"` or `"@text"`.
///
#[AbcRef("Annotations", "abc:standard:v2.1:annotations")]
pub fn scan_annotation(lx: &mut Lexer<'_>) -> bool {
    scan_quoted_as(lx, TokenKind::Annotation)
}

#[AbcRef("Chord symbols", "abc:standard:v2.1:chord_symbols")]
pub fn scan_chord_symbol(lx: &mut Lexer<'_>) -> bool {
    scan_quoted_as(lx, TokenKind::ChordSymbol)
}

///
/// A quoted string. A placement character after the quote makes it an
/// annotation; otherwise it is a chord symbol when one is acceptable.
///
pub fn scan_quoted(lx: &mut Lexer<'_>) -> bool {
    if !lx.eat('"') {
        return false;
    }

    let kind = if lx.upcoming(is_annotation_placement) || !lx.valid(TokenKind::ChordSymbol) {
        TokenKind::Annotation
    } else {
        TokenKind::ChordSymbol
    };

    if !lx.valid(kind) {
        return false;
    }

    finish_quoted(lx);
    lx.emit(kind)
}

fn finish_symbol(lx: &mut Lexer<'_>, close: char) -> bool {
    lx.take_until(|ch| ch == close || is_newline(ch));
    lx.eat(close);
    lx.emit(TokenKind::Symbol)
}

///
/// `!name!` or `+name+`, on one line.
///
#[AbcRef("Decorations", "abc:standard:v2.1:decorations")]
pub fn scan_symbol(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Symbol) {
        return false;
    }

    match lx.peek() {
        Some(open @ ('!' | '+')) => {
            let _ = lx.take();
            finish_symbol(lx, open)
        }
        _ => false,
    }
}

///
/// `!` and `+`. A `+` may also open a field continuation (`+:`)
/// or stand alone as a plus sign.
///
pub fn scan_symbol_marker(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some('!') => scan_symbol(lx),
        Some('+') => {
            let _ = lx.take();
            lx.mark_end();

            if lx.valid(TokenKind::InfoContinuation)
                && lx.upcoming(|ch| ch == ':' || is_whitespace(ch))
            {
                lx.take_while(is_whitespace);
                if lx.eat(':') {
                    return lx.emit(TokenKind::InfoContinuation);
                }
            }

            // Anything read so far belongs inside the symbol.
            if lx.valid(TokenKind::Symbol) {
                return finish_symbol(lx, '+');
            }

            lx.valid(TokenKind::Plus) && lx.accept(TokenKind::Plus)
        }
        _ => false,
    }
}

///
/// `\` and the character after it. Before a newline or at the end of
/// input, the backslash alone.
///
pub fn scan_escaped_char(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::EscapedChar) || !lx.eat('\\') {
        return false;
    }

    lx.eat_if(|ch| !is_newline(ch));
    lx.emit(TokenKind::EscapedChar)
}

#[cfg(test)]
mod tests {
    use crate::lexing::{
        utils::probe::{assert_none, assert_token, probe, probe_only},
        TokenKind,
    };

    use super::*;

    #[test]
    fn annotations() {
        assert_token(&probe("\"text\"", scan_annotation), TokenKind::Annotation, 6);
        assert_token(&probe("\"D\\\"\"", scan_annotation), TokenKind::Annotation, 5);
        assert_token(&probe("\"x\nA", scan_annotation), TokenKind::Annotation, 2);
        assert_token(&probe("\"open", scan_annotation), TokenKind::Annotation, 5);
        assert_none(&probe("A", scan_annotation), 0);
    }

    #[test]
    fn chord_symbols() {
        assert_token(&probe("\"Am7\"C", scan_chord_symbol), TokenKind::ChordSymbol, 5);
        assert_none(&probe("A", scan_chord_symbol), 0);
    }

    #[test]
    fn placement_decides() {
        let both = [TokenKind::Annotation, TokenKind::ChordSymbol];
        assert_token(&probe_only("\"^up\"", &both, scan_quoted), TokenKind::Annotation, 5);
        assert_token(&probe_only("\"G\"", &both, scan_quoted), TokenKind::ChordSymbol, 3);

        let p = probe_only("\"G\"", &[TokenKind::Annotation], scan_quoted);
        assert_token(&p, TokenKind::Annotation, 3);

        let p = probe_only("\"^up\"", &[TokenKind::ChordSymbol], scan_quoted);
        assert_none(&p, 1);
    }

    #[test]
    fn symbols() {
        assert_token(&probe("!trill!", scan_symbol), TokenKind::Symbol, 7);
        assert_token(&probe("+fermata+A", scan_symbol), TokenKind::Symbol, 9);
        assert_token(&probe("!unterminated\n", scan_symbol), TokenKind::Symbol, 13);
        assert_none(&probe("A", scan_symbol), 0);
    }

    #[test]
    fn plus_forms() {
        let all = [TokenKind::Symbol, TokenKind::Plus, TokenKind::InfoContinuation];
        let p = probe_only("+: more", &all, scan_symbol_marker);
        assert_token(&p, TokenKind::InfoContinuation, 2);

        let p = probe_only("+ : more", &all, scan_symbol_marker);
        assert_token(&p, TokenKind::InfoContinuation, 3);

        let p = probe_only("+f+", &all, scan_symbol_marker);
        assert_token(&p, TokenKind::Symbol, 3);

        let p = probe_only("+ x", &[TokenKind::Plus, TokenKind::InfoContinuation], scan_symbol_marker);
        assert!(p.matched);
        assert_eq!(p.kind, Some(TokenKind::Plus));
        assert_eq!(p.end, Some(1));
    }

    #[test]
    fn escaped_characters() {
        assert_token(&probe("\\a", scan_escaped_char), TokenKind::EscapedChar, 2);
        assert_token(&probe("\\\n", scan_escaped_char), TokenKind::EscapedChar, 1);
        assert_token(&probe("\\", scan_escaped_char), TokenKind::EscapedChar, 1);
        assert_none(&probe("a", scan_escaped_char), 0);
    }
}
