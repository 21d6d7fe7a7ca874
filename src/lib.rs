//!
//! ## abc-scanner
//!
//! An external token scanner for [ABC music notation](https://abcnotation.com/wiki/abc:standard:v2.1),
//! built to sit underneath an incremental grammar engine.
//!
//! The engine calls [lexing::scan] once per token, telling it which
//! [lexing::TokenKind]s are acceptable; the scanner produces at most one.
//! Between calls, the engine snapshots the tiny [lexing::ScannerState]
//! so lexing can restart anywhere after an edit.
//!
//! * [lexing] holds the token scanners and their dispatcher,
//! * [ffi] exposes them through the engine's C ABI,
//! * [common] provides source text, spans and locations.
//!

pub mod common;
pub mod ffi;
pub mod lexing;
