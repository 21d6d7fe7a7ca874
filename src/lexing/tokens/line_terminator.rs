//!
//! ## Line ends
//! A single newline ends a line; a blank line breaks a section.
//! Both count lines as they go.
//!

use crate::lexing::{classify::is_newline, utils::Lexer, TokenKind};

///
/// `\r?\n`. A `\r` on its own is taken but is no newline.
///
fn take_newline(lx: &mut Lexer<'_>) -> bool {
    if lx.eat('\r') {
        return lx.eat('\n');
    }

    lx.eat('\n')
}

fn count_lines(lx: &mut Lexer<'_>, lines: usize) {
    for _ in 0..lines {
        lx.state_mut().next_line();
    }
}

pub fn scan_eol(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::Eol) || !take_newline(lx) {
        return false;
    }

    count_lines(lx, 1);
    lx.emit(TokenKind::Eol)
}

///
/// Two newlines in a row. A section break also ends the tune body.
///
pub fn scan_section_break(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::SectionBreak) || !take_newline(lx) || !take_newline(lx) {
        return false;
    }

    count_lines(lx, 2);
    lx.state_mut().in_tune_body = false;
    lx.emit(TokenKind::SectionBreak)
}

///
/// A newline, extended to a section break when one is acceptable and a
/// second newline follows.
///
/// The first newline is marked as soon as it is taken, so the token can
/// still fall back to a plain end of line after the second has been tried.
///
pub fn scan_line_break(lx: &mut Lexer<'_>) -> bool {
    if !take_newline(lx) {
        return false;
    }

    lx.mark_end();

    if lx.valid(TokenKind::SectionBreak) && lx.upcoming(is_newline) && take_newline(lx) {
        count_lines(lx, 2);
        lx.state_mut().in_tune_body = false;
        return lx.emit(TokenKind::SectionBreak);
    }

    if !lx.valid(TokenKind::Eol) {
        return false;
    }

    count_lines(lx, 1);
    lx.accept(TokenKind::Eol)
}

#[cfg(test)]
mod tests {
    use crate::lexing::{
        utils::probe::{assert_none, assert_token, probe, probe_only, run},
        ScannerState, TokenKind, ValidSymbols,
    };

    use super::*;

    const BOTH: &[TokenKind] = &[TokenKind::Eol, TokenKind::SectionBreak];

    #[test]
    fn end_of_line() {
        let p = probe("\n", scan_eol);
        assert_token(&p, TokenKind::Eol, 1);
        assert_eq!(p.state.line_number, 2);

        let p = probe("\r\nA", scan_eol);
        assert_token(&p, TokenKind::Eol, 2);
        assert_eq!(p.state.line_number, 2);

        assert_none(&probe("A", scan_eol), 0);
    }

    #[test]
    fn bare_carriage_return() {
        let p = probe("\rA", scan_eol);
        assert_none(&p, 1);
        assert_eq!(p.state.line_number, 1);

        let p = probe_only("\r", BOTH, scan_line_break);
        assert_none(&p, 1);
        assert_eq!(p.state.line_number, 1);
    }

    #[test]
    fn section_break() {
        let p = probe("\n\n", scan_section_break);
        assert_token(&p, TokenKind::SectionBreak, 2);
        assert_eq!(p.state.line_number, 3);

        let p = probe("\r\n\r\n", scan_section_break);
        assert_token(&p, TokenKind::SectionBreak, 4);

        assert_none(&probe("\nA", scan_section_break), 1);
    }

    #[test]
    fn section_break_leaves_tune_body() {
        let state = ScannerState {
            in_tune_body: true,
            ..ScannerState::new()
        };
        let p = run("\n\n", ValidSymbols::only(BOTH), state, scan_line_break);
        assert_token(&p, TokenKind::SectionBreak, 2);
        assert!(!p.state.in_tune_body);
    }

    #[test]
    fn line_break_prefers_section_break() {
        let p = probe_only("\n\nA", BOTH, scan_line_break);
        assert_token(&p, TokenKind::SectionBreak, 2);
        assert_eq!(p.end, Some(2));
        assert_eq!(p.state.line_number, 3);

        let p = probe_only("\r\n\r\n", BOTH, scan_line_break);
        assert_token(&p, TokenKind::SectionBreak, 4);
    }

    #[test]
    fn line_break_falls_back_to_eol() {
        let p = probe_only("\nA", BOTH, scan_line_break);
        assert_token(&p, TokenKind::Eol, 1);
        assert_eq!(p.state.line_number, 2);

        let p = probe_only("\n\n", &[TokenKind::Eol], scan_line_break);
        assert_token(&p, TokenKind::Eol, 1);
        assert_eq!(p.end, Some(1));

        // The `\r` is read past, but the token ends at the first newline.
        let p = probe_only("\n\rA", BOTH, scan_line_break);
        assert!(p.matched);
        assert_eq!(p.kind, Some(TokenKind::Eol));
        assert_eq!((p.pos, p.end), (2, Some(1)));
        assert_eq!(p.state.line_number, 2);
    }
}
