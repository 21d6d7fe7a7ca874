//!
//! ## Bar lines
//! `|`, `||`, `|]`, `[|`, `|:`, `:|`, `::` and repeat endings (`|1`, `[2`).
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{classify::is_digit, utils::Lexer, TokenKind};

use super::bracket::finish_open_bracket;

fn is_bar_continue(ch: char) -> bool {
    matches!(ch, '|' | ':' | ']')
}

///
/// What may follow a `:` or `[` for it to be a bar line.
///
fn opens_bar_after_colon(ch: char) -> bool {
    matches!(ch, '|' | ':')
}

fn opens_bar_after_bracket(ch: char) -> bool {
    ch == '|' || is_digit(ch)
}

///
/// The rest of a bar line, once its first character is taken:
/// more bar characters, then a repeat-ending number.
///
fn finish_bar(lx: &mut Lexer<'_>) -> bool {
    lx.take_while(is_bar_continue);
    lx.take_while(is_digit);
    lx.emit(TokenKind::Barline)
}

///
/// A bar line, if one starts here.
///
/// `:` and `[` are taken before it is known whether a bar line follows;
/// when none does, they stay behind the cursor.
///
#[AbcRef("Bar lines", "abc:standard:v2.1:repeat_bar_symbols")]
pub fn scan_barline(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Barline) {
        return false;
    }

    match lx.peek() {
        Some('|') => {
            let _ = lx.take();
            finish_bar(lx)
        }
        Some(':') => {
            let _ = lx.take();
            lx.upcoming(opens_bar_after_colon) && finish_bar(lx)
        }
        Some('[') => {
            let _ = lx.take();
            lx.upcoming(opens_bar_after_bracket) && finish_bar(lx)
        }
        _ => false,
    }
}

///
/// Bar lines, with their look-alikes settled after the first character:
/// a `:` that starts no bar line may be a tuplet colon, and a `[` may open
/// a chord or an inline field.
///
pub fn scan_bar_or_bracket(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some('|') => {
            let _ = lx.take();
            finish_bar(lx)
        }
        Some(':') => {
            let _ = lx.take();
            lx.mark_end();

            if lx.upcoming(opens_bar_after_colon) {
                return finish_bar(lx);
            }

            lx.valid(TokenKind::TupletColon) && lx.accept(TokenKind::TupletColon)
        }
        Some('[') => {
            let _ = lx.take();
            lx.mark_end();

            if lx.upcoming(opens_bar_after_bracket) {
                return finish_bar(lx);
            }

            finish_open_bracket(lx)
        }
        _ => false,
    }
}
