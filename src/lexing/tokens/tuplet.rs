//!
//! ## Tuplets
//! `(p:q:r`, where the `q` and `r` parts are optional.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{classify::is_digit, utils::Lexer, TokenKind};

///
/// `(` in front of a digit. Only the paren is part of the token.
///
/// The paren is taken before the digit is checked, so a slur's `(`
/// is left behind the cursor when this fails.
///
#[AbcRef("Duplets, triplets, quadruplets, etc.", "abc:standard:v2.1:duplets_triplets_quadruplets_etc")]
pub fn scan_tuplet_lparen(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::TupletLParen) || !lx.eat('(') {
        return false;
    }

    lx.upcoming(is_digit) && lx.emit(TokenKind::TupletLParen)
}

///
/// `(` as a tuplet, a slur or a bare paren, in that order of preference.
///
pub fn scan_tuplet_paren(lx: &mut Lexer<'_>) -> bool {
    if !lx.eat('(') {
        return false;
    }

    lx.mark_end();

    let kind = if lx.upcoming(is_digit) && lx.valid(TokenKind::TupletLParen) {
        TokenKind::TupletLParen
    } else if lx.valid(TokenKind::Slur) {
        TokenKind::Slur
    } else if lx.valid(TokenKind::LParen) {
        TokenKind::LParen
    } else {
        return false;
    };

    lx.accept(kind)
}

pub fn scan_tuplet_colon(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::TupletColon) || !lx.eat(':') {
        return false;
    }

    lx.emit(TokenKind::TupletColon)
}

fn scan_slot(lx: &mut Lexer<'_>, kind: TokenKind) -> bool {
    if !lx.valid(kind) || lx.take_while(is_digit) == 0 {
        return false;
    }

    lx.emit(kind)
}

pub fn scan_tuplet_p(lx: &mut Lexer<'_>) -> bool {
    scan_slot(lx, TokenKind::TupletP)
}

pub fn scan_tuplet_q(lx: &mut Lexer<'_>) -> bool {
    scan_slot(lx, TokenKind::TupletQ)
}

pub fn scan_tuplet_r(lx: &mut Lexer<'_>) -> bool {
    scan_slot(lx, TokenKind::TupletR)
}

///
/// A tuplet's colon, or its first acceptable numeric slot.
///
pub fn scan_tuplet_slots(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some(':') => scan_tuplet_colon(lx),
        Some(ch) if is_digit(ch) => {
            let slot = [TokenKind::TupletP, TokenKind::TupletQ, TokenKind::TupletR]
                .into_iter()
                .find(|kind| lx.valid(*kind));

            match slot {
                Some(kind) => scan_slot(lx, kind),
                None => false,
            }
        }
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
    fn tuplet_paren() {
        assert_token(&probe("(3", scan_tuplet_lparen), TokenKind::TupletLParen, 1);
        assert_none(&probe("(A", scan_tuplet_lparen), 1);
        assert_none(&probe("A", scan_tuplet_lparen), 0);
    }

    #[test]
    fn paren_preference() {
        let all = [TokenKind::TupletLParen, TokenKind::Slur, TokenKind::LParen];
        assert_token(&probe_only("(3", &all, scan_tuplet_paren), TokenKind::TupletLParen, 1);
        assert_token(&probe_only("(A", &all, scan_tuplet_paren), TokenKind::Slur, 1);

        let p = probe_only("(3", &[TokenKind::LParen], scan_tuplet_paren);
        assert_token(&p, TokenKind::LParen, 1);

        assert_none(&probe_only("(", &[TokenKind::TupletLParen], scan_tuplet_paren), 1);
    }

    #[test]
    fn slots() {
        assert_token(&probe(":", scan_tuplet_colon), TokenKind::TupletColon, 1);
        assert_token(&probe("3", scan_tuplet_p), TokenKind::TupletP, 1);
        assert_token(&probe("12:", scan_tuplet_q), TokenKind::TupletQ, 2);
        assert_token(&probe("4", scan_tuplet_r), TokenKind::TupletR, 1);
        assert_none(&probe("A", scan_tuplet_colon), 0);
        assert_none(&probe("A", scan_tuplet_p), 0);

        let p = probe_only("2", &[TokenKind::TupletR, TokenKind::TupletQ], scan_tuplet_slots);
        assert_token(&p, TokenKind::TupletQ, 1);
        assert_none(&probe_only("2", &[TokenKind::TupletColon], scan_tuplet_slots), 0);
    }
}
