//!
//! Token kinds the scanner can produce, and the per-call
//! mask of kinds the grammar will currently accept.
//!

use std::{collections::HashMap, fmt, str::FromStr};

use lazy_static::lazy_static;
use thiserror::Error;

macro_rules! token_kinds {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)*) => {
        ///
        /// Every token kind the external scanner knows about.
        ///
        /// The ordinal of each variant is the index the grammar engine
        /// uses in its valid-symbol array, so the order is fixed.
        ///
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum TokenKind {
            $($(#[$meta])* $variant,)*
        }

        impl TokenKind {
            ///
            /// All kinds, in ordinal order.
            ///
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            ///
            /// The grammar's name for this kind.
            ///
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)*
                }
            }
        }
    };
}

token_kinds! {
    // Pitch and music.
    Accidental => "ACCIDENTAL",
    NoteLetter => "NOTE_LETTER",
    Octave => "OCTAVE",
    Rest => "REST",
    Tie => "TIE",
    Decoration => "DECORATION",
    Slur => "SLUR",
    Barline => "BARLINE",

    // Rhythm.
    RhythmNumerator => "RHY_NUMER",
    RhythmDenominator => "RHY_DENOM",
    RhythmSeparator => "RHY_SEP",
    BrokenRhythm => "RHY_BRKN",
    TupletLParen => "TUPLET_LPAREN",
    TupletP => "TUPLET_P",
    TupletColon => "TUPLET_COLON",
    TupletQ => "TUPLET_Q",
    TupletR => "TUPLET_R",
    RepeatNumber => "REPEAT_NUMBER",
    RepeatComma => "REPEAT_COMMA",
    RepeatDash => "REPEAT_DASH",
    RepeatX => "REPEAT_X",

    // Structural brackets.
    ChordLeftBracket => "CHRD_LEFT_BRKT",
    ChordRightBracket => "CHRD_RIGHT_BRKT",
    GraceLeftBrace => "GRC_GRP_LEFT_BRACE",
    GraceRightBrace => "GRC_GRP_RGHT_BRACE",
    GraceSlash => "GRC_GRP_SLSH",
    InlineFieldLeftBracket => "INLN_FLD_LFT_BRKT",
    InlineFieldRightBracket => "INLN_FLD_RGT_BRKT",

    // Generic punctuation.
    Equals => "EQL",
    Slash => "SLASH",
    Minus => "MINUS",
    Plus => "PLUS",
    LParen => "LPAREN",
    RParen => "RPAREN",
    LBrace => "LBRACE",
    RBrace => "RBRACE",
    LBracket => "LBRACKET",
    RBracket => "RBRACKET",
    Pipe => "PIPE",

    // Information fields.
    Annotation => "ANNOTATION",
    InfoHeader => "INF_HDR",
    InfoString => "INFO_STR",
    InfoContinuation => "INF_CTND",
    Voice => "VOICE",
    VoiceOverlay => "VOICE_OVRLAY",
    LineContinuation => "LINE_CONT",

    // Symbols, user symbols and macros.
    Symbol => "SYMBOL",
    UserSymbol => "USER_SY",
    UserSymbolHeader => "USER_SY_HDR",
    UserSymbolInvocation => "USER_SY_INVOCATION",
    MacroHeader => "MACRO_HDR",
    MacroString => "MACRO_STR",
    MacroInvocation => "MACRO_INVOCATION",
    MacroVar => "MACRO_VAR",

    // Lyrics.
    LyricHeader => "LY_HDR",
    LyricText => "LY_TXT",
    LyricUnderscore => "LY_UNDR",
    LyricHyphen => "LY_HYPH",
    LyricSectionHeader => "LY_SECT_HDR",
    LyricSpace => "LY_SPS",
    LyricStar => "LY_STAR",

    // Symbol lines.
    SymbolLineHeader => "SY_HDR",
    SymbolLineStar => "SY_STAR",
    SymbolLineText => "SY_TXT",

    // Directives.
    StylesheetDirective => "STYLESHEET_DIRECTIVE",
    MeasurementUnit => "MEASUREMENT_UNIT",

    // Utility.
    Ampersand => "AMPERSAND",
    SystemBreak => "SYSTEM_BREAK",
    BacktickSpacer => "BCKTCK_SPC",
    YSpacer => "Y_SPC",
    SpecialLiteral => "SPECIAL_LITERAL",

    // General.
    Identifier => "IDENTIFIER",
    Number => "NUMBER",
    ReservedChar => "RESERVED_CHAR",
    EscapedChar => "ESCAPED_CHAR",
    ChordSymbol => "CHORD_SYMBOL",
    /// Reserved for the grammar; never produced by the scanner.
    Discard => "DISCARD",

    // Trivia and structure.
    Comment => "COMMENT",
    Whitespace => "WS",
    Eol => "EOL",
    FreeText => "FREE_TXT",
    SectionBreak => "SCT_BRK",
    Invalid => "INVALID",
    Eof => "EOF",
}

impl TokenKind {
    ///
    /// Number of token kinds (the length of a valid-symbol array).
    ///
    pub const COUNT: usize = Self::ALL.len();

    ///
    /// Ordinal of this kind in the grammar's external-token list.
    ///
    pub const fn ordinal(self) -> u16 {
        self as u16
    }

}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// A token kind lookup that didn't resolve.
///
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnknownTokenKind {
    #[error("No token kind has ordinal {0} (there are {count})", count = TokenKind::COUNT)]
    Ordinal(u16),

    #[error("No token kind is named `{0}`")]
    Name(String),
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, TokenKind> =
        TokenKind::ALL.iter().map(|kind| (kind.name(), *kind)).collect();
}

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    ///
    /// Looks up a kind by its grammar name, ignoring case.
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s.trim().to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| UnknownTokenKind::Name(s.to_string()))
    }
}

impl TryFrom<u16> for TokenKind {
    type Error = UnknownTokenKind;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        TokenKind::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(UnknownTokenKind::Ordinal(value))
    }
}

///
/// The per-call set of token kinds the grammar would accept.
///
/// A fixed-size bitset indexed by [TokenKind::ordinal].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValidSymbols(u128);

impl ValidSymbols {
    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self((1u128 << TokenKind::COUNT) - 1)
    }

    pub fn only(kinds: &[TokenKind]) -> Self {
        kinds.iter().copied().collect()
    }

    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1 << kind as u16))
    }

    #[must_use]
    pub const fn without(self, kind: TokenKind) -> Self {
        Self(self.0 & !(1 << kind as u16))
    }

    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1 << kind as u16) != 0
    }

    pub fn contains_any(self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| self.contains(*kind))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    ///
    /// The kinds in this set, in ordinal order.
    ///
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.contains(*kind))
    }
}

impl FromIterator<TokenKind> for ValidSymbols {
    fn from_iter<T: IntoIterator<Item = TokenKind>>(iter: T) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

///
/// The grammar engine's `bool[COUNT]` form.
///
impl From<&[bool]> for ValidSymbols {
    fn from(flags: &[bool]) -> Self {
        flags
            .iter()
            .zip(TokenKind::ALL)
            .filter(|(flag, _)| **flag)
            .map(|(_, kind)| *kind)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{TokenKind, UnknownTokenKind, ValidSymbols};

    #[test]
    fn ordinals_follow_grammar_order() {
        assert_eq!(TokenKind::COUNT, 84);
        assert_eq!(TokenKind::Accidental.ordinal(), 0);
        assert_eq!(TokenKind::Barline.ordinal(), 7);
        assert_eq!(TokenKind::TupletP.ordinal(), 13);
        assert_eq!(TokenKind::TupletColon.ordinal(), 14);
        assert_eq!(TokenKind::Eof.ordinal(), 83);

        for (i, kind) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.ordinal()), i);
            assert_eq!(TokenKind::try_from(i as u16), Ok(*kind));
        }

        assert_eq!(TokenKind::try_from(84), Err(UnknownTokenKind::Ordinal(84)));
    }

    #[test]
    fn names() {
        assert_eq!(TokenKind::InfoHeader.to_string(), "INF_HDR");
        assert_eq!("sct_brk".parse::<TokenKind>(), Ok(TokenKind::SectionBreak));
        assert_eq!(" NOTE_LETTER ".parse::<TokenKind>(), Ok(TokenKind::NoteLetter));
        assert!(matches!(
            "NOT_A_KIND".parse::<TokenKind>(),
            Err(UnknownTokenKind::Name(_))
        ));
    }

    #[test]
    fn short_names_parse() {
        let kinds = "NOTE_LETTER,BARLINE,WS,EOL"
            .split(',')
            .map(str::parse::<TokenKind>)
            .collect::<Result<Vec<_>, _>>();
        assert_eq!(
            kinds,
            Ok(vec![
                TokenKind::NoteLetter,
                TokenKind::Barline,
                TokenKind::Whitespace,
                TokenKind::Eol
            ])
        );
        assert!("WHITESPACE".parse::<TokenKind>().is_err());
    }

    #[test]
    fn valid_symbols() {
        let all = ValidSymbols::all();
        assert!(TokenKind::ALL.iter().all(|kind| all.contains(*kind)));
        assert_eq!(all.iter().count(), TokenKind::COUNT);

        let set = ValidSymbols::only(&[TokenKind::Eol, TokenKind::SectionBreak]);
        assert!(set.contains(TokenKind::Eol));
        assert!(!set.contains(TokenKind::Whitespace));
        assert_eq!(
            set.without(TokenKind::Eol).iter().collect::<Vec<_>>(),
            vec![TokenKind::SectionBreak]
        );
        assert!(ValidSymbols::none().is_empty());
    }

    #[test]
    fn from_bool_array() {
        let mut flags = [false; TokenKind::COUNT + 2];
        flags[TokenKind::Rest.ordinal() as usize] = true;
        flags[TokenKind::COUNT + 1] = true;

        let set = ValidSymbols::from(&flags[..]);
        assert_eq!(set, ValidSymbols::only(&[TokenKind::Rest]));
    }
}
