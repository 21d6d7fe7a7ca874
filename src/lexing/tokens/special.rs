//!
//! ## Utility characters
//! Voice overlays, system breaks, spacers, the backslash,
//! and the `C`/`C|` meter literals.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_identifier_continue, is_newline, is_whitespace},
    utils::Lexer,
    TokenKind,
};

use super::letter::{finish_letter, Run};

fn scan_char(lx: &mut Lexer<'_>, ch: char, kind: TokenKind) -> bool {
    if !lx.valid(kind) || !lx.eat(ch) {
        return false;
    }

    lx.emit(kind)
}

///
/// `&` within a bar, overlaying a second voice.
///
#[AbcRef("Voice overlay", "abc:standard:v2.1:voice_overlay")]
pub fn scan_voice_overlay(lx: &mut Lexer<'_>) -> bool {
    scan_char(lx, '&', TokenKind::VoiceOverlay)
}

pub fn scan_ampersand(lx: &mut Lexer<'_>) -> bool {
    scan_char(lx, '&', TokenKind::Ampersand)
}

///
/// `&`, as whichever acceptable kind comes first:
/// an overlay, a bare ampersand, or a voice separator.
///
pub fn scan_ampersand_family(lx: &mut Lexer<'_>) -> bool {
    let kind = [TokenKind::VoiceOverlay, TokenKind::Ampersand, TokenKind::Voice]
        .into_iter()
        .find(|kind| lx.valid(*kind));

    match kind {
        Some(kind) => scan_char(lx, '&', kind),
        None => false,
    }
}

///
/// `$`: a forced line break in the score.
///
pub fn scan_system_break(lx: &mut Lexer<'_>) -> bool {
    scan_char(lx, '$', TokenKind::SystemBreak)
}

#[AbcRef("Spacer", "abc:standard:v2.1:typesetting_extra_space")]
pub fn scan_y_spacer(lx: &mut Lexer<'_>) -> bool {
    scan_char(lx, 'y', TokenKind::YSpacer)
}

///
/// `` ` ``: beams notes together without spacing them apart.
///
pub fn scan_backtick_spacer(lx: &mut Lexer<'_>) -> bool {
    scan_char(lx, '`', TokenKind::BacktickSpacer)
}

///
/// Spacers. `y` still opens a field when a colon follows it.
///
pub fn scan_spacer(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some('y') if lx.valid(TokenKind::YSpacer) => {
            let _ = lx.take();
            finish_letter(lx, 'y', &[(TokenKind::YSpacer, Run::Single)])
        }
        Some('`') => scan_backtick_spacer(lx),
        _ => false,
    }
}

pub fn scan_line_continuation(lx: &mut Lexer<'_>) -> bool {
    scan_char(lx, '\\', TokenKind::LineContinuation)
}

///
/// `\` escapes the character after it, except before a newline,
/// where it continues the line.
///
pub fn scan_backslash(lx: &mut Lexer<'_>) -> bool {
    if !lx.eat('\\') {
        return false;
    }

    lx.mark_end();

    if lx.valid(TokenKind::EscapedChar) && lx.upcoming(|ch| !is_newline(ch)) {
        let _ = lx.take();
        return lx.emit(TokenKind::EscapedChar);
    }

    let kind = if lx.valid(TokenKind::LineContinuation) {
        TokenKind::LineContinuation
    } else if lx.valid(TokenKind::EscapedChar) {
        TokenKind::EscapedChar
    } else {
        return false;
    };

    lx.accept(kind)
}

fn ends_special_literal(lx: &Lexer<'_>) -> bool {
    lx.at_end() || lx.upcoming(|ch| is_whitespace(ch) || is_newline(ch) || ch == ']')
}

///
/// `C` (common time) or `C|` (cut time), standing alone.
///
#[AbcRef("M: meter", "abc:standard:v2.1:mmeter")]
pub fn scan_special_literal(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::SpecialLiteral) || !lx.eat('C') {
        return false;
    }

    lx.eat('|');
    ends_special_literal(lx) && lx.emit(TokenKind::SpecialLiteral)
}

///
/// A meter literal, or else the word or field value the `C` starts.
///
pub fn scan_special_literal_or_text(lx: &mut Lexer<'_>) -> bool {
    if !lx.eat('C') {
        return false;
    }

    lx.mark_end();
    let piped = lx.eat('|');

    if ends_special_literal(lx) {
        return lx.emit(TokenKind::SpecialLiteral);
    }

    if !piped && lx.valid(TokenKind::Identifier) {
        lx.take_while(is_identifier_continue);
        return lx.emit(TokenKind::Identifier);
    }

    if lx.valid(TokenKind::InfoString) {
        lx.take_until(is_newline);
        return lx.emit(TokenKind::InfoString);
    }

    lx.valid(TokenKind::Identifier) && lx.accept(TokenKind::Identifier)
}

#[cfg(test)]
mod tests {
    use crate::lexing::{
        utils::probe::{assert_none, assert_token, probe, probe_only},
        TokenKind,
    };

    use super::*;

    #[test]
    fn ampersands() {
        assert_token(&probe("&", scan_voice_overlay), TokenKind::VoiceOverlay, 1);
        assert_token(&probe("&", scan_ampersand), TokenKind::Ampersand, 1);
        assert_token(&probe("&", scan_ampersand_family), TokenKind::VoiceOverlay, 1);

        let p = probe_only("&", &[TokenKind::Voice, TokenKind::Ampersand], scan_ampersand_family);
        assert_token(&p, TokenKind::Ampersand, 1);

        assert_none(&probe("A", scan_ampersand_family), 0);
    }

    #[test]
    fn breaks_and_spacers() {
        assert_token(&probe("$", scan_system_break), TokenKind::SystemBreak, 1);
        assert_token(&probe("y", scan_y_spacer), TokenKind::YSpacer, 1);
        assert_token(&probe("`", scan_backtick_spacer), TokenKind::BacktickSpacer, 1);
        assert_none(&probe("A", scan_system_break), 0);
        assert_none(&probe("A", scan_y_spacer), 0);

        assert_token(&probe("yA", scan_spacer), TokenKind::YSpacer, 1);
        assert_token(&probe("y:", scan_spacer), TokenKind::InfoHeader, 2);
        assert_none(&probe_only("y", &[TokenKind::BacktickSpacer], scan_spacer), 0);
    }

    #[test]
    fn backslashes() {
        assert_token(&probe("\\", scan_line_continuation), TokenKind::LineContinuation, 1);

        let both = [TokenKind::EscapedChar, TokenKind::LineContinuation];
        assert_token(&probe_only("\\n", &both, scan_backslash), TokenKind::EscapedChar, 2);
        assert_token(&probe_only("\\\n", &both, scan_backslash), TokenKind::LineContinuation, 1);

        let p = probe_only("\\n", &[TokenKind::LineContinuation], scan_backslash);
        assert_token(&p, TokenKind::LineContinuation, 1);
    }

    #[test]
    fn meter_literals() {
        assert_token(&probe("C", scan_special_literal), TokenKind::SpecialLiteral, 1);
        assert_token(&probe("C|\n", scan_special_literal), TokenKind::SpecialLiteral, 2);
        assert_token(&probe("C]", scan_special_literal), TokenKind::SpecialLiteral, 1);
        assert_token(&probe("C| ", scan_special_literal), TokenKind::SpecialLiteral, 2);
        assert_none(&probe("Cm", scan_special_literal), 1);
        assert_none(&probe("A", scan_special_literal), 0);
    }

    #[test]
    fn meter_literal_fallbacks() {
        let words = [TokenKind::SpecialLiteral, TokenKind::Identifier];
        let p = probe_only("Cmaj", &words, scan_special_literal_or_text);
        assert_token(&p, TokenKind::Identifier, 4);

        let text = [TokenKind::SpecialLiteral, TokenKind::InfoString];
        let p = probe_only("C|2 x\n", &text, scan_special_literal_or_text);
        assert_token(&p, TokenKind::InfoString, 5);

        let p = probe_only("C|2", &words, scan_special_literal_or_text);
        assert!(p.matched);
        assert_eq!(p.end, Some(1));
    }
}
