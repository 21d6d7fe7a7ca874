//!
//! The C ABI the grammar engine loads the scanner through.
//!
//! The engine owns the lexer and the valid-symbol array; the scanner
//! owns its payload, a boxed [Scanner], from `create` until `destroy`.
//! Pointers handed in by the engine are trusted to be valid for the
//! duration of each call.
//!

use std::{
    ffi::{c_char, c_uint, c_void},
    slice,
};

use crate::lexing::{Cursor, Scanner, TokenKind, ValidSymbols};

///
/// Size of the buffer the engine passes to `serialize`.
///
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

///
/// The engine's lexer, as laid out in its `parser.h`.
///
/// Only the fields up to `eof` are declared; the struct is only
/// ever reached through the engine's pointer.
///
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

///
/// [Cursor] over the engine's lexer for one scan call.
///
struct EngineCursor {
    lexer: *mut TSLexer,
}

impl Cursor for EngineCursor {
    fn lookahead(&self) -> Option<char> {
        if self.at_end() {
            return None;
        }

        // SAFETY: the engine keeps the lexer alive and valid during `scan`.
        let raw = unsafe { (*self.lexer).lookahead };

        // The engine reports bytes it can't decode as -1.
        let ch = u32::try_from(raw).ok().and_then(char::from_u32);
        Some(ch.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn advance(&mut self, consume: bool) {
        // SAFETY: as above; the engine's `advance` takes a `skip` flag.
        unsafe { ((*self.lexer).advance)(self.lexer, !consume) }
    }

    fn mark_end(&mut self) {
        // SAFETY: as above.
        unsafe { ((*self.lexer).mark_end)(self.lexer) }
    }

    fn at_end(&self) -> bool {
        // SAFETY: as above.
        unsafe { ((*self.lexer).eof)(self.lexer) }
    }

    fn set_result(&mut self, kind: TokenKind) {
        // SAFETY: as above.
        unsafe { (*self.lexer).result_symbol = kind.ordinal() }
    }
}

#[no_mangle]
pub extern "C" fn tree_sitter_abc_external_scanner_create() -> *mut c_void {
    Box::into_raw(Box::new(Scanner::new())).cast()
}

///
/// # Safety
/// `payload` must come from `create` and must not be used afterwards.
///
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_abc_external_scanner_destroy(payload: *mut c_void) {
    if payload.is_null() {
        return;
    }

    // SAFETY: the payload was boxed by `create` and is released exactly once.
    drop(unsafe { Box::from_raw(payload.cast::<Scanner>()) });
}

///
/// # Safety
/// `payload` must come from `create`; `buffer` must hold
/// [SERIALIZATION_BUFFER_SIZE] writable bytes.
///
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_abc_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> c_uint {
    // SAFETY: a live payload from `create`, not aliased during this call.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_ref() }) else {
        return 0;
    };

    if buffer.is_null() {
        return 0;
    }

    // SAFETY: the engine's buffer is SERIALIZATION_BUFFER_SIZE bytes long.
    let buffer = unsafe { slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE) };
    c_uint::try_from(scanner.serialize_into(buffer)).unwrap_or(0)
}

///
/// # Safety
/// `payload` must come from `create`; `buffer` must hold `length` bytes.
///
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_abc_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    // SAFETY: a live payload from `create`, not aliased during this call.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_mut() }) else {
        return;
    };

    if buffer.is_null() {
        return;
    }

    // SAFETY: the engine guarantees `length` readable bytes.
    let bytes = unsafe { slice::from_raw_parts(buffer.cast::<u8>(), length as usize) };
    scanner.deserialize(bytes);
}

///
/// # Safety
/// `payload` must come from `create`, `lexer` must be the engine's live
/// lexer, and `valid_symbols` must hold one flag per [TokenKind].
///
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_abc_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    // SAFETY: a live payload from `create`, not aliased during this call.
    let Some(scanner) = (unsafe { payload.cast::<Scanner>().as_mut() }) else {
        return false;
    };

    if lexer.is_null() || valid_symbols.is_null() {
        return false;
    }

    // SAFETY: the engine passes one flag per external token.
    let flags = unsafe { slice::from_raw_parts(valid_symbols, TokenKind::COUNT) };
    let valid = ValidSymbols::from(flags);

    scanner.scan(&mut EngineCursor { lexer }, &valid)
}

#[cfg(test)]
mod tests {
    use std::ffi::c_char;

    use crate::lexing::{ScannerState, TokenKind};

    use super::*;

    ///
    /// An engine lexer over a string, with the `TSLexer` header first
    /// so the engine's callbacks can find the rest.
    ///
    #[repr(C)]
    struct FakeLexer {
        header: TSLexer,
        codes: Vec<i32>,
        index: usize,
        marked: Option<usize>,
    }

    unsafe extern "C" fn fake_advance(lexer: *mut TSLexer, _skip: bool) {
        let fake = unsafe { &mut *lexer.cast::<FakeLexer>() };
        if fake.index < fake.codes.len() {
            fake.index += 1;
        }
        fake.header.lookahead = fake.codes.get(fake.index).copied().unwrap_or(0);
    }

    unsafe extern "C" fn fake_mark_end(lexer: *mut TSLexer) {
        let fake = unsafe { &mut *lexer.cast::<FakeLexer>() };
        fake.marked = Some(fake.index);
    }

    unsafe extern "C" fn fake_get_column(_: *mut TSLexer) -> u32 {
        0
    }

    unsafe extern "C" fn fake_range_start(_: *const TSLexer) -> bool {
        false
    }

    unsafe extern "C" fn fake_eof(lexer: *const TSLexer) -> bool {
        let fake = unsafe { &*lexer.cast::<FakeLexer>() };
        fake.index >= fake.codes.len()
    }

    impl FakeLexer {
        fn new(input: &str) -> Box<Self> {
            Self::from_codes(input.chars().map(|ch| ch as i32).collect())
        }

        ///
        /// Raw lookahead values, including the engine's -1 for bytes
        /// that aren't valid UTF-8.
        ///
        fn from_codes(codes: Vec<i32>) -> Box<Self> {
            Box::new(Self {
                header: TSLexer {
                    lookahead: codes.first().copied().unwrap_or(0),
                    result_symbol: 0,
                    advance: fake_advance,
                    mark_end: fake_mark_end,
                    get_column: fake_get_column,
                    is_at_included_range_start: fake_range_start,
                    eof: fake_eof,
                },
                codes,
                index: 0,
                marked: None,
            })
        }
    }

    fn flags(kinds: &[TokenKind]) -> Vec<bool> {
        TokenKind::ALL.iter().map(|kind| kinds.contains(kind)).collect()
    }

    #[test]
    fn lifecycle() {
        let payload = tree_sitter_abc_external_scanner_create();
        let mut buffer = [0 as c_char; SERIALIZATION_BUFFER_SIZE];

        unsafe {
            assert_eq!(tree_sitter_abc_external_scanner_serialize(payload, buffer.as_mut_ptr()), 4);
            assert_eq!(&buffer[..4], &[0, 0, 0, 1]);

            let snapshot = [1 as c_char, 1, 0, 9];
            tree_sitter_abc_external_scanner_deserialize(payload, snapshot.as_ptr(), 4);
            assert_eq!(
                *(*payload.cast::<Scanner>()).state(),
                ScannerState {
                    in_tune_body: true,
                    in_text_block: true,
                    line_number: 9
                }
            );

            // Too short: ignored.
            tree_sitter_abc_external_scanner_deserialize(payload, snapshot.as_ptr(), 2);
            assert_eq!((*payload.cast::<Scanner>()).state().line_number, 9);

            tree_sitter_abc_external_scanner_destroy(payload);
        }
    }

    #[test]
    fn scanning_through_the_engine_lexer() {
        let payload = tree_sitter_abc_external_scanner_create();
        let mut lexer = FakeLexer::new("[|]A");
        let valid = flags(&[TokenKind::Barline, TokenKind::ChordLeftBracket]);

        unsafe {
            let header = std::ptr::addr_of_mut!(lexer.header);
            assert!(tree_sitter_abc_external_scanner_scan(payload, header, valid.as_ptr()));
            tree_sitter_abc_external_scanner_destroy(payload);
        }

        assert_eq!(lexer.header.result_symbol, TokenKind::Barline.ordinal());
        assert_eq!(lexer.marked, Some(3));
    }

    fn scan_with(lexer: &mut FakeLexer, kinds: &[TokenKind]) -> bool {
        let payload = tree_sitter_abc_external_scanner_create();
        let valid = flags(kinds);

        unsafe {
            let header = std::ptr::addr_of_mut!(lexer.header);
            let matched = tree_sitter_abc_external_scanner_scan(payload, header, valid.as_ptr());
            tree_sitter_abc_external_scanner_destroy(payload);
            matched
        }
    }

    #[test]
    fn undecodable_bytes_are_not_the_end() {
        let mut lexer = FakeLexer::from_codes(vec![-1, -1, ' ' as i32, 'A' as i32]);
        assert!(scan_with(&mut lexer, &[TokenKind::Eof, TokenKind::Invalid]));
        assert_eq!(lexer.header.result_symbol, TokenKind::Invalid.ordinal());
        assert_eq!(lexer.marked, Some(2));

        // With nothing to recover into, the call fails rather than ending the input.
        let mut lexer = FakeLexer::from_codes(vec![-1, 'A' as i32]);
        assert!(!scan_with(&mut lexer, &[TokenKind::Eof]));
        assert_eq!(lexer.marked, None);
    }

    #[test]
    fn end_of_input() {
        let mut lexer = FakeLexer::new("");
        assert!(scan_with(&mut lexer, &[TokenKind::Eof, TokenKind::Invalid]));
        assert_eq!(lexer.header.result_symbol, TokenKind::Eof.ordinal());
    }

    #[test]
    fn null_payloads_are_harmless() {
        unsafe {
            tree_sitter_abc_external_scanner_destroy(std::ptr::null_mut());
            let buffer = [0 as c_char; 4];
            tree_sitter_abc_external_scanner_deserialize(std::ptr::null_mut(), buffer.as_ptr(), 4);
            assert!(!tree_sitter_abc_external_scanner_scan(
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null(),
            ));
        }
    }
}
