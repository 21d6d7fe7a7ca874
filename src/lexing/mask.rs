//!
//! A stand-in for the grammar: which kinds are valid where.
//!
//! The real grammar knows exactly what it expects next. [DocumentMask]
//! gets by with the kind of the previous token and a little memory of
//! the line it is on, which is enough to tokenize ordinary ABC files.
//!

use super::{tokenizer::SymbolMask, ScannerState, TokenKind, ValidSymbols};

use super::TokenKind as K;

///
/// Valid anywhere.
///
const BASE: &[TokenKind] = &[
    K::Eol,
    K::SectionBreak,
    K::Eof,
    K::Comment,
    K::Whitespace,
    K::Invalid,
];

const HEADERS: &[TokenKind] = &[
    K::InfoHeader,
    K::LyricHeader,
    K::LyricSectionHeader,
    K::SymbolLineHeader,
    K::UserSymbolHeader,
    K::MacroHeader,
];

///
/// Music, wherever it may appear in a tune body.
///
const BODY: &[TokenKind] = &[
    K::Accidental,
    K::NoteLetter,
    K::Rest,
    K::Tie,
    K::Decoration,
    K::Slur,
    K::Barline,
    K::BrokenRhythm,
    K::TupletLParen,
    K::ChordLeftBracket,
    K::ChordRightBracket,
    K::GraceLeftBrace,
    K::GraceRightBrace,
    K::InlineFieldLeftBracket,
    K::Annotation,
    K::ChordSymbol,
    K::Symbol,
    K::UserSymbolInvocation,
    K::VoiceOverlay,
    K::LineContinuation,
    K::SystemBreak,
    K::YSpacer,
    K::BacktickSpacer,
];

const INLINE_VALUE: &[TokenKind] = &[
    K::Identifier,
    K::Number,
    K::Slash,
    K::Equals,
    K::Minus,
    K::ReservedChar,
    K::Annotation,
    K::InlineFieldRightBracket,
];

const LYRICS: &[TokenKind] = &[
    K::LyricText,
    K::LyricUnderscore,
    K::LyricHyphen,
    K::LyricStar,
    K::LyricSpace,
    K::Barline,
    K::LineContinuation,
];

const SYMBOL_LINE: &[TokenKind] = &[
    K::SymbolLineStar,
    K::SymbolLineText,
    K::Barline,
    K::Symbol,
    K::Annotation,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TupletPhase {
    Open,
    AfterP,
    FirstColon,
    AfterQ,
    SecondColon,
}

///
/// Where on a line the previous token left us.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Context {
    #[default]
    LineStart,

    ///
    /// Only trivia until the end of the line.
    ///
    LineEnd,
    FieldValue,
    InlineHeader,
    InlineValue,
    Lyrics,
    SymbolLine,

    ///
    /// `U:` line: the letter, `=`, then the symbol.
    ///
    UserSymbol(u8),

    ///
    /// `m:` line: the name, `=`, then the expansion.
    ///
    Macro(u8),
    Tuplet(TupletPhase),
    Body,
}

///
/// A line-oriented approximation of the ABC grammar's expectations.
///
#[derive(Debug, Clone, Default)]
pub struct DocumentMask {
    context: Context,
}

impl DocumentMask {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&mut self, previous: TokenKind) {
        use Context::*;

        self.context = match (self.context, previous) {
            (_, K::Eol | K::SectionBreak) => LineStart,
            (_, K::Comment | K::StylesheetDirective | K::FreeText | K::InfoString | K::MacroString) => {
                LineEnd
            }
            (context, K::Whitespace) => context,

            (InlineHeader, K::InfoHeader) => InlineValue,
            (_, K::InlineFieldLeftBracket) => InlineHeader,
            (_, K::InlineFieldRightBracket) => Body,
            (_, K::InfoHeader | K::InfoContinuation) => FieldValue,
            (_, K::LyricHeader | K::LyricSectionHeader) => Lyrics,
            (_, K::SymbolLineHeader) => SymbolLine,

            (_, K::UserSymbolHeader) => UserSymbol(0),
            (UserSymbol(0), K::UserSymbol) => UserSymbol(1),
            (UserSymbol(1), K::Equals) => UserSymbol(2),
            (UserSymbol(_), _) => LineEnd,

            (_, K::MacroHeader) => Macro(0),
            (Macro(0), K::MacroVar) => Macro(1),
            (Macro(1), K::Equals) => Macro(2),
            (Macro(_), _) => LineEnd,

            (context @ (LineEnd | InlineValue | Lyrics | SymbolLine), _) => context,

            (_, K::TupletLParen) => Tuplet(TupletPhase::Open),
            (Tuplet(TupletPhase::Open), K::TupletP) => Tuplet(TupletPhase::AfterP),
            (Tuplet(TupletPhase::AfterP), K::TupletColon) => Tuplet(TupletPhase::FirstColon),
            (Tuplet(TupletPhase::FirstColon), K::TupletQ) => Tuplet(TupletPhase::AfterQ),
            (Tuplet(TupletPhase::FirstColon | TupletPhase::AfterQ), K::TupletColon) => {
                Tuplet(TupletPhase::SecondColon)
            }

            _ => Body,
        };
    }

    ///
    /// Music, plus what may follow the previous token in particular.
    ///
    fn body(previous: Option<TokenKind>) -> ValidSymbols {
        let mut valid = ValidSymbols::only(BODY);

        let follows: &[TokenKind] = match previous {
            Some(K::NoteLetter) => &[K::Octave, K::RhythmNumerator, K::RhythmSeparator],
            Some(K::Octave | K::Rest | K::ChordRightBracket) => {
                &[K::RhythmNumerator, K::RhythmSeparator]
            }
            Some(K::RhythmNumerator) => &[K::RhythmSeparator],
            Some(K::RhythmSeparator) => &[K::RhythmDenominator, K::RhythmSeparator],
            Some(K::GraceLeftBrace) => &[K::GraceSlash],
            Some(K::Barline | K::RepeatComma | K::RepeatDash) => &[K::RepeatNumber],
            Some(K::RepeatNumber) => {
                valid = valid.without(K::Tie).without(K::Rest);
                &[K::RepeatComma, K::RepeatDash, K::RepeatX]
            }
            _ => &[],
        };

        follows.iter().fold(valid, |valid, kind| valid.with(*kind))
    }

    fn current(&self, state: &ScannerState, previous: Option<TokenKind>) -> ValidSymbols {
        use Context::*;

        let extra = match self.context {
            LineStart => {
                let mut valid = ValidSymbols::only(HEADERS)
                    .with(K::StylesheetDirective)
                    .with(K::InfoContinuation);

                if state.in_tune_body {
                    valid = Self::body(None).iter().fold(valid, ValidSymbols::with);
                }

                if !state.in_tune_body || state.in_text_block {
                    valid = valid.with(K::FreeText);
                }

                valid
            }
            LineEnd => ValidSymbols::none(),
            FieldValue => ValidSymbols::only(&[K::InfoString]),
            InlineHeader => ValidSymbols::only(&[K::InfoHeader]),
            InlineValue => ValidSymbols::only(INLINE_VALUE),
            Lyrics => ValidSymbols::only(LYRICS),
            SymbolLine => ValidSymbols::only(SYMBOL_LINE),
            UserSymbol(0) => ValidSymbols::only(&[K::UserSymbol]),
            UserSymbol(1) => ValidSymbols::only(&[K::Equals]),
            UserSymbol(_) => ValidSymbols::only(&[K::Symbol, K::Annotation]),
            Macro(0) => ValidSymbols::only(&[K::MacroVar]),
            Macro(1) => ValidSymbols::only(&[K::Equals]),
            Macro(_) => ValidSymbols::only(&[K::MacroString]),
            Tuplet(TupletPhase::Open) => ValidSymbols::only(&[K::TupletP]),
            Tuplet(TupletPhase::FirstColon) => ValidSymbols::only(&[K::TupletQ, K::TupletColon]),
            Tuplet(TupletPhase::SecondColon) => ValidSymbols::only(&[K::TupletR]),
            // After a slot, a colon is the tuplet's, not a bar line's.
            Tuplet(_) => Self::body(None).without(K::Barline).with(K::TupletColon),
            Body => Self::body(previous),
        };

        BASE.iter().fold(extra, |valid, kind| valid.with(*kind))
    }
}

impl SymbolMask for DocumentMask {
    fn valid_symbols(&mut self, state: &ScannerState, previous: Option<TokenKind>) -> ValidSymbols {
        if let Some(previous) = previous {
            self.advance(previous);
        }

        self.current(state, previous)
    }
}
