//!
//! Running one sub-scanner over a string, for tests.
//!

use crate::{
    common::{file::SourceFile, Source},
    lexing::{utils::Lexer, ScannerState, TokenKind, ValidSymbols},
};

///
/// What a single scan call did.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Probe {
    pub matched: bool,
    pub kind: Option<TokenKind>,

    ///
    /// Cursor position after the call (taken and skipped characters).
    ///
    pub pos: usize,

    ///
    /// Position of the last `mark_end`.
    ///
    pub end: Option<usize>,
    pub state: ScannerState,
}

pub(crate) fn run(
    input: &str,
    valid: ValidSymbols,
    mut state: ScannerState,
    scanner: impl FnOnce(&mut Lexer<'_>) -> bool,
) -> Probe {
    let source = SourceFile::dummy_file(input);
    let mut stream = source.stream();

    let matched = {
        let mut lexer = Lexer::new(&mut stream, &mut state, valid);
        scanner(&mut lexer)
    };

    Probe {
        matched,
        kind: stream.result(),
        pos: stream.index().into(),
        end: stream.marked().map(Into::into),
        state,
    }
}

///
/// Everything valid, fresh state.
///
pub(crate) fn probe(input: &str, scanner: impl FnOnce(&mut Lexer<'_>) -> bool) -> Probe {
    run(input, ValidSymbols::all(), ScannerState::new(), scanner)
}

///
/// Only `kinds` valid, fresh state.
///
pub(crate) fn probe_only(
    input: &str,
    kinds: &[TokenKind],
    scanner: impl FnOnce(&mut Lexer<'_>) -> bool,
) -> Probe {
    run(input, ValidSymbols::only(kinds), ScannerState::new(), scanner)
}

///
/// Asserts a match of `kind` leaving the cursor at `pos`.
///
#[track_caller]
pub(crate) fn assert_token(probe: &Probe, kind: TokenKind, pos: usize) {
    assert!(probe.matched, "expected {kind} at {pos}, got {probe:?}");
    assert_eq!(probe.kind, Some(kind), "{probe:?}");
    assert_eq!(probe.pos, pos, "{probe:?}");
}

///
/// Asserts no match, with the cursor left at `pos`.
///
#[track_caller]
pub(crate) fn assert_none(probe: &Probe, pos: usize) {
    assert!(!probe.matched, "expected no match, got {probe:?}");
    assert_eq!(probe.pos, pos, "{probe:?}");
}
