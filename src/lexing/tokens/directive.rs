//!
//! ## Directive values
//! Words, measurements and free text, as found after `%%` directives,
//! inside inline fields and in text blocks.
//!

use crate::lexing::{
    classify::{is_identifier_continue, is_identifier_start, is_newline},
    utils::Lexer,
    TokenKind,
};

use super::{info::scan_info_string, user_macro::scan_macro_string};

///
/// `[A-Za-z_][A-Za-z0-9_-]*`
///
pub fn scan_identifier(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Identifier) || !lx.eat_if(is_identifier_start) {
        return false;
    }

    lx.take_while(is_identifier_continue);
    lx.emit(TokenKind::Identifier)
}

const UNITS: &[[char; 2]] = &[['c', 'm'], ['i', 'n'], ['p', 't'], ['m', 'm'], ['p', 'x']];

pub fn is_unit_start(ch: char) -> bool {
    UNITS.iter().any(|[first, _]| *first == ch)
}

///
/// `cm`, `in`, `pt`, `mm` or `px`, not followed by more of a word.
///
pub fn scan_measurement_unit(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::MeasurementUnit) {
        return false;
    }

    let Some(first) = lx.peek().filter(|ch| is_unit_start(*ch)) else {
        return false;
    };
    let _ = lx.take();

    let completes = lx.peek().is_some_and(|second| UNITS.contains(&[first, second]));
    if !completes {
        return false;
    }
    let _ = lx.take();

    !lx.upcoming(is_identifier_continue) && lx.emit(TokenKind::MeasurementUnit)
}

///
/// A unit, or else the identifier its first letter starts.
///
pub fn scan_unit_or_word(lx: &mut Lexer<'_>) -> bool {
    let Some(first) = lx.peek().filter(|ch| is_unit_start(*ch)) else {
        return false;
    };
    let _ = lx.take();

    if lx.peek().is_some_and(|second| UNITS.contains(&[first, second])) {
        let _ = lx.take();
        if !lx.upcoming(is_identifier_continue) {
            return lx.emit(TokenKind::MeasurementUnit);
        }
    }

    // Everything taken so far is part of a word.
    if !lx.valid(TokenKind::Identifier) {
        return false;
    }

    lx.take_while(is_identifier_continue);
    lx.emit(TokenKind::Identifier)
}

///
/// The rest of the line, as prose.
///
pub fn scan_free_text(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::FreeText) || lx.take_until(is_newline) == 0 {
        return false;
    }

    lx.emit(TokenKind::FreeText)
}

///
/// Line-long text of whichever kind is acceptable.
///
pub fn scan_text(lx: &mut Lexer<'_>) -> bool {
    if lx.valid(TokenKind::InfoString) {
        scan_info_string(lx)
    } else if lx.valid(TokenKind::MacroString) {
        scan_macro_string(lx)
    } else {
        scan_free_text(lx)
    }
}
