//!
//! The process of lexing involves converting [char]s
//! from source code into lexical tokens according to
//! some [lexical grammar](https://en.wikipedia.org/wiki/Lexical_grammar).
//!
//! Here, lexing is driven from outside: each call to [scan] is told
//! which [TokenKind]s the grammar would accept, and produces at most one.
//!

pub mod classify;
pub mod dispatch;
pub mod kind;
pub mod mask;
pub mod scanner;
pub mod state;
pub mod tokenizer;
pub mod tokens;
pub mod utils;

pub use self::{
    dispatch::scan,
    kind::{TokenKind, UnknownTokenKind, ValidSymbols},
    mask::DocumentMask,
    scanner::Scanner,
    state::{ScannerState, StateError},
    tokenizer::{LexError, Lexeme, SymbolMask, Tokenizer},
    utils::{Cursor, Lexer, SourceStream},
};
