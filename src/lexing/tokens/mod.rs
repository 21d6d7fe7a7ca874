//!
//! Sub-scanners, one module per family of tokens.
//!
//! Each is a `fn(&mut Lexer) -> bool`: it either reports a token
//! (marking its end) or reports nothing, possibly having taken
//! characters it cannot give back.
//!

pub mod barline;
pub mod bracket;
pub mod comment;
pub mod directive;
pub mod info;
pub mod letter;
pub mod line_terminator;
pub mod lyrics;
pub mod pitch;
pub mod punctuation;
pub mod repeat;
pub mod rhythm;
pub mod special;
pub mod symbol;
pub mod symbol_line;
pub mod tuplet;
pub mod user_macro;
pub mod whitespace;
