//!
//! The dispatcher: one scan call, one token.
//!
//! Sub-scanners are tried in a fixed order, kept as data in [PRIORITY]
//! so the order itself can be tested. Several token families share a
//! first character, and the cursor can't be rewound, so whichever
//! scanner sees a shared prefix first must be able to settle it.
//!

use tracing::{debug, trace};

use super::{
    classify::{
        is_accidental_start, is_alpha, is_decoration_char, is_digit, is_identifier_start,
        is_newline, is_note_letter, is_octave_marker, is_reserved_char, is_rest_letter,
        is_whitespace,
    },
    tokens::{
        barline::scan_bar_or_bracket,
        bracket::{scan_bracket, scan_grace_group},
        comment::scan_percent_token,
        directive::{is_unit_start, scan_free_text, scan_identifier, scan_text, scan_unit_or_word},
        info::{scan_field_or_word, scan_info_continuation},
        line_terminator::scan_line_break,
        lyrics::{is_lyric_start, scan_lyrics},
        pitch::{
            scan_accidental, scan_decoration_or_field, scan_note, scan_octave,
            scan_rest_or_field, scan_slur, scan_tie,
        },
        punctuation::{is_punctuation, scan_invalid, scan_punctuation, scan_reserved_char},
        repeat::{is_repeat_start, scan_repeat_ending},
        rhythm::{is_rhythm_start, scan_number, scan_rhythm},
        special::{
            scan_ampersand_family, scan_backslash, scan_spacer, scan_special_literal_or_text,
            scan_system_break,
        },
        symbol::{scan_quoted, scan_symbol_marker},
        symbol_line::{is_symbol_line_text, scan_symbol_line},
        tuplet::{scan_tuplet_paren, scan_tuplet_slots},
        user_macro::{is_user_or_macro_start, scan_user_or_macro},
        whitespace::scan_whitespace,
    },
    utils::{Cursor, Lexer},
    ScannerState, TokenKind, ValidSymbols,
};

///
/// Names for the entries of [PRIORITY].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScannerId {
    Percent,
    Whitespace,
    LineBreak,
    Backslash,
    Quoted,
    SymbolMarker,
    Barline,
    TupletParen,
    Accidental,
    Spacer,
    NoteLetter,
    Octave,
    Rest,
    Tie,
    Decoration,
    Slur,
    GraceGroup,
    Bracket,
    Rhythm,
    Lyrics,
    SymbolLine,
    TupletSlots,
    RepeatEnding,
    InfoContinuation,
    UserSymbolMacro,
    SpecialLiteral,
    InfoHeader,
    Punctuation,
    Number,
    MeasurementUnit,
    Ampersand,
    SystemBreak,
    ReservedChar,
    Identifier,
    Text,
    Recovery,
}

///
/// One sub-scanner in the dispatch order.
///
#[derive(Clone, Copy)]
pub struct Entry {
    pub id: ScannerId,

    ///
    /// Characters this scanner can start on.
    /// It isn't tried for any other lookahead.
    ///
    pub guard: fn(char) -> bool,

    ///
    /// Kinds this scanner may produce.
    /// It isn't tried unless one of them is valid.
    ///
    pub kinds: &'static [TokenKind],
    pub scan: fn(&mut Lexer<'_>) -> bool,
}

use super::TokenKind as K;

///
/// Every sub-scanner, highest priority first.
///
pub static PRIORITY: &[Entry] = &[
    Entry {
        id: ScannerId::Percent,
        guard: |ch| ch == '%',
        kinds: &[K::Comment, K::StylesheetDirective],
        scan: scan_percent_token,
    },
    Entry {
        id: ScannerId::Whitespace,
        guard: is_whitespace,
        kinds: &[K::Whitespace],
        scan: scan_whitespace,
    },
    Entry {
        id: ScannerId::LineBreak,
        guard: is_newline,
        kinds: &[K::Eol, K::SectionBreak],
        scan: scan_line_break,
    },
    Entry {
        id: ScannerId::Backslash,
        guard: |ch| ch == '\\',
        kinds: &[K::EscapedChar, K::LineContinuation],
        scan: scan_backslash,
    },
    Entry {
        id: ScannerId::Quoted,
        guard: |ch| ch == '"',
        kinds: &[K::Annotation, K::ChordSymbol],
        scan: scan_quoted,
    },
    Entry {
        id: ScannerId::SymbolMarker,
        guard: |ch| matches!(ch, '!' | '+'),
        kinds: &[K::Symbol, K::Plus],
        scan: scan_symbol_marker,
    },
    Entry {
        id: ScannerId::Barline,
        guard: |ch| matches!(ch, '|' | ':' | '['),
        kinds: &[K::Barline],
        scan: scan_bar_or_bracket,
    },
    Entry {
        id: ScannerId::TupletParen,
        guard: |ch| ch == '(',
        kinds: &[K::TupletLParen, K::Slur, K::LParen],
        scan: scan_tuplet_paren,
    },
    Entry {
        id: ScannerId::Accidental,
        guard: is_accidental_start,
        kinds: &[K::Accidental],
        scan: scan_accidental,
    },
    Entry {
        id: ScannerId::Spacer,
        guard: |ch| matches!(ch, 'y' | '`'),
        kinds: &[K::YSpacer, K::BacktickSpacer],
        scan: scan_spacer,
    },
    Entry {
        id: ScannerId::NoteLetter,
        guard: is_note_letter,
        kinds: &[K::NoteLetter],
        scan: scan_note,
    },
    Entry {
        id: ScannerId::Octave,
        guard: is_octave_marker,
        kinds: &[K::Octave],
        scan: scan_octave,
    },
    Entry {
        id: ScannerId::Rest,
        guard: is_rest_letter,
        kinds: &[K::Rest],
        scan: scan_rest_or_field,
    },
    Entry {
        id: ScannerId::Tie,
        guard: |ch| ch == '-',
        kinds: &[K::Tie],
        scan: scan_tie,
    },
    Entry {
        id: ScannerId::Decoration,
        guard: is_decoration_char,
        kinds: &[K::Decoration],
        scan: scan_decoration_or_field,
    },
    Entry {
        id: ScannerId::Slur,
        guard: |ch| matches!(ch, '(' | ')'),
        kinds: &[K::Slur],
        scan: scan_slur,
    },
    Entry {
        id: ScannerId::GraceGroup,
        guard: |ch| matches!(ch, '{' | '}' | '/'),
        kinds: &[K::GraceLeftBrace, K::GraceRightBrace, K::GraceSlash],
        scan: scan_grace_group,
    },
    Entry {
        id: ScannerId::Bracket,
        guard: |ch| matches!(ch, '[' | ']'),
        kinds: &[
            K::ChordLeftBracket,
            K::ChordRightBracket,
            K::InlineFieldLeftBracket,
            K::InlineFieldRightBracket,
        ],
        scan: scan_bracket,
    },
    Entry {
        id: ScannerId::Rhythm,
        guard: is_rhythm_start,
        kinds: &[
            K::RhythmNumerator,
            K::RhythmDenominator,
            K::RhythmSeparator,
            K::BrokenRhythm,
        ],
        scan: scan_rhythm,
    },
    Entry {
        id: ScannerId::Lyrics,
        guard: is_lyric_start,
        kinds: &[
            K::LyricText,
            K::LyricUnderscore,
            K::LyricHyphen,
            K::LyricStar,
            K::LyricSpace,
        ],
        scan: scan_lyrics,
    },
    Entry {
        id: ScannerId::SymbolLine,
        guard: |ch| ch == '*' || is_symbol_line_text(ch),
        kinds: &[K::SymbolLineStar, K::SymbolLineText],
        scan: scan_symbol_line,
    },
    Entry {
        id: ScannerId::TupletSlots,
        guard: |ch| ch == ':' || is_digit(ch),
        kinds: &[K::TupletP, K::TupletColon, K::TupletQ, K::TupletR],
        scan: scan_tuplet_slots,
    },
    Entry {
        id: ScannerId::RepeatEnding,
        guard: is_repeat_start,
        kinds: &[K::RepeatNumber, K::RepeatComma, K::RepeatDash, K::RepeatX],
        scan: scan_repeat_ending,
    },
    Entry {
        id: ScannerId::InfoContinuation,
        guard: |ch| ch == '+',
        kinds: &[K::InfoContinuation],
        scan: scan_info_continuation,
    },
    Entry {
        id: ScannerId::UserSymbolMacro,
        guard: is_user_or_macro_start,
        kinds: &[
            K::UserSymbol,
            K::UserSymbolInvocation,
            K::MacroVar,
            K::MacroInvocation,
        ],
        scan: scan_user_or_macro,
    },
    Entry {
        id: ScannerId::SpecialLiteral,
        guard: |ch| ch == 'C',
        kinds: &[K::SpecialLiteral],
        scan: scan_special_literal_or_text,
    },
    Entry {
        id: ScannerId::InfoHeader,
        guard: is_alpha,
        kinds: &[
            K::InfoHeader,
            K::LyricHeader,
            K::LyricSectionHeader,
            K::SymbolLineHeader,
            K::UserSymbolHeader,
            K::MacroHeader,
        ],
        scan: scan_field_or_word,
    },
    Entry {
        id: ScannerId::Punctuation,
        guard: is_punctuation,
        kinds: &[
            K::Equals,
            K::Slash,
            K::Minus,
            K::Plus,
            K::LParen,
            K::RParen,
            K::LBrace,
            K::RBrace,
            K::LBracket,
            K::RBracket,
            K::Pipe,
        ],
        scan: scan_punctuation,
    },
    Entry {
        id: ScannerId::Number,
        guard: is_digit,
        kinds: &[K::Number],
        scan: scan_number,
    },
    Entry {
        id: ScannerId::MeasurementUnit,
        guard: is_unit_start,
        kinds: &[K::MeasurementUnit],
        scan: scan_unit_or_word,
    },
    Entry {
        id: ScannerId::Ampersand,
        guard: |ch| ch == '&',
        kinds: &[K::VoiceOverlay, K::Ampersand, K::Voice],
        scan: scan_ampersand_family,
    },
    Entry {
        id: ScannerId::SystemBreak,
        guard: |ch| ch == '$',
        kinds: &[K::SystemBreak],
        scan: scan_system_break,
    },
    Entry {
        id: ScannerId::ReservedChar,
        guard: is_reserved_char,
        kinds: &[K::ReservedChar],
        scan: scan_reserved_char,
    },
    Entry {
        id: ScannerId::Identifier,
        guard: is_identifier_start,
        kinds: &[K::Identifier],
        scan: scan_identifier,
    },
    Entry {
        id: ScannerId::Text,
        guard: |ch| !is_newline(ch),
        kinds: &[K::InfoString, K::MacroString, K::FreeText],
        scan: scan_text,
    },
    Entry {
        id: ScannerId::Recovery,
        guard: |_| true,
        kinds: &[K::Invalid],
        scan: scan_invalid,
    },
];

///
/// Produce at most one token from the cursor.
///
/// On success the token's kind is reported to the cursor, its end is
/// marked, and `true` is returned. On failure nothing is reported, though
/// characters may have been advanced past.
///
pub fn scan(state: &mut ScannerState, cursor: &mut dyn Cursor, valid: &ValidSymbols) -> bool {
    let mut lx = Lexer::new(cursor, state, *valid);

    let Some(next) = lx.peek() else {
        if lx.valid(TokenKind::Eof) {
            trace!("end of input");
            return lx.emit(TokenKind::Eof);
        }

        debug!("end of input, but no EOF token is acceptable");
        return false;
    };

    // Inside `%%begintext`, whole lines are prose until a `%` line.
    if lx.state().in_text_block
        && lx.valid(TokenKind::FreeText)
        && next != '%'
        && scan_free_text(&mut lx)
    {
        trace!("free text in text block");
        return true;
    }

    for entry in PRIORITY {
        if !(entry.guard)(next) || !lx.valid_any(entry.kinds) {
            continue;
        }

        trace!(scanner = ?entry.id, ?next, "trying");

        if (entry.scan)(&mut lx) {
            match entry.id {
                ScannerId::Recovery => debug!(?next, line = lx.state().line_number, "recovered"),
                id => trace!(scanner = ?id, "matched"),
            }
            return true;
        }

        if lx.advanced() > 0 {
            debug!(
                scanner = ?entry.id,
                advanced = lx.advanced(),
                "characters taken, but no token"
            );
            return false;
        }
    }

    debug!(?next, line = lx.state().line_number, "no token");
    false
}
