//!
//! ## Lyrics
//! `w:` lines aligned with the notes above them, and `W:` lines
//! printed after the tune.
//!

use abc_scanner_macros::AbcRef;

use crate::lexing::{
    classify::{is_newline, is_whitespace},
    utils::Lexer,
    TokenKind,
};

use super::letter::scan_header;

///
/// Characters with a meaning of their own on a lyric line.
///
fn is_lyric_special(ch: char) -> bool {
    matches!(ch, '-' | '_' | '*' | '~' | '|' | '\\' | '%')
}

pub fn is_lyric_text(ch: char) -> bool {
    !(is_lyric_special(ch) || is_whitespace(ch) || is_newline(ch))
}

#[AbcRef("Lyrics", "abc:standard:v2.1:lyrics")]
pub fn scan_lyric_header(lx: &mut Lexer<'_>) -> bool {
    scan_header(lx, |ch| ch == 'w', TokenKind::LyricHeader, &[])
}

pub fn scan_lyric_section_header(lx: &mut Lexer<'_>) -> bool {
    scan_header(lx, |ch| ch == 'W', TokenKind::LyricSectionHeader, &[])
}

///
/// A syllable.
///
pub fn scan_lyric_text(lx: &mut Lexer<'_>) -> bool {
    if !lx.valid(TokenKind::LyricText) || lx.take_while(is_lyric_text) == 0 {
        return false;
    }

    lx.emit(TokenKind::LyricText)
}

fn scan_marker(lx: &mut Lexer<'_>, ch: char, kind: TokenKind) -> bool {
    if !lx.valid(kind) || !lx.eat(ch) {
        return false;
    }

    lx.emit(kind)
}

///
/// `_`: the previous syllable is held for one more note.
///
pub fn scan_lyric_underscore(lx: &mut Lexer<'_>) -> bool {
    scan_marker(lx, '_', TokenKind::LyricUnderscore)
}

pub fn scan_lyric_hyphen(lx: &mut Lexer<'_>) -> bool {
    scan_marker(lx, '-', TokenKind::LyricHyphen)
}

///
/// `*`: one note is skipped.
///
pub fn scan_lyric_star(lx: &mut Lexer<'_>) -> bool {
    scan_marker(lx, '*', TokenKind::LyricStar)
}

///
/// `~`: a space that keeps two words under one note.
///
pub fn scan_lyric_space(lx: &mut Lexer<'_>) -> bool {
    scan_marker(lx, '~', TokenKind::LyricSpace)
}

pub fn is_lyric_start(ch: char) -> bool {
    is_lyric_text(ch) || matches!(ch, '-' | '_' | '*' | '~')
}

pub fn scan_lyrics(lx: &mut Lexer<'_>) -> bool {
    match lx.peek() {
        Some('_') => scan_lyric_underscore(lx),
        Some('-') => scan_lyric_hyphen(lx),
        Some('*') => scan_lyric_star(lx),
        Some('~') => scan_lyric_space(lx),
        Some(_) => scan_lyric_text(lx),
        None => false,
    }
}
