//! abc-tokens: print the token stream of an ABC file.
//!
//! Runs the scanner the way the grammar engine would, one call per
//! token, and prints `line:column  KIND  text` for each.
//!
//! Usage:
//! ```bash
//! abc-tokens tune.abc
//! abc-tokens --only NOTE_LETTER,BARLINE,WS,EOL - < tune.abc
//! RUST_LOG=abc_scanner=trace abc-tokens tune.abc
//! ```

use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use abc_scanner::{
    common::{Source, SourceFile},
    lexing::{DocumentMask, ScannerState, SymbolMask, TokenKind, Tokenizer, ValidSymbols},
};

#[derive(Debug, Parser)]
#[command(name = "abc-tokens", version, about = "Print the token stream of an ABC file")]
struct Args {
    /// ABC file to scan; `-` or nothing reads stdin.
    path: Option<PathBuf>,

    /// Treat every token kind as valid on every call.
    #[arg(long, conflicts_with = "only")]
    all_valid: bool,

    /// Comma-separated token kinds that are valid on every call.
    #[arg(long, value_delimiter = ',')]
    only: Vec<TokenKind>,

    /// Starting scanner state, as the 8 hex digits of a snapshot.
    #[arg(long)]
    state: Option<String>,
}

fn parse_state(hex: &str) -> Result<ScannerState> {
    let hex = hex.trim();
    if hex.len() != 8 || !hex.is_ascii() {
        bail!("Expected 8 hex digits, got {hex:?}");
    }

    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid scanner state {hex:?}"))?;

    Ok(ScannerState::try_from(bytes.as_slice())?)
}

fn read_source(path: Option<&PathBuf>) -> Result<SourceFile> {
    match path {
        Some(path) if path.as_os_str() != "-" => SourceFile::read_from_file(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(SourceFile::new("<stdin>", text))
        }
    }
}

fn dump<M: SymbolMask>(file: &SourceFile, state: ScannerState, mask: M) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for lexeme in Tokenizer::with_state(file, state, mask) {
        let lexeme = match lexeme {
            Ok(lexeme) => lexeme,
            Err(err) => {
                let at = file
                    .locate(err.span())
                    .map(|loc| loc.to_string())
                    .unwrap_or_else(|| file.path().to_string());
                bail!("{at}: {err}");
            }
        };

        let text = file.source_at(lexeme).unwrap_or_default();
        let (line, column) = file
            .locate(lexeme.span)
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or_default();

        writeln!(out, "{line}:{column}\t{}\t{text:?}", lexeme.kind)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let state = match &args.state {
        Some(hex) => parse_state(hex)?,
        None => ScannerState::new(),
    };
    let file = read_source(args.path.as_ref())?;

    if args.all_valid {
        dump(&file, state, ValidSymbols::all())
    } else if !args.only.is_empty() {
        // EOF must stay reachable or the stream never ends cleanly.
        let valid = ValidSymbols::only(&args.only).with(TokenKind::Eof);
        dump(&file, state, valid)
    } else {
        dump(&file, state, DocumentMask::new())
    }
}
