//!
//! An ABC source file.
//!

use std::{fmt::Formatter, ops::Range, path::Path};

use super::{Loc, Source, Span, Spanned};

///
/// Line and column information for
/// a particular location in source code.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineColumn<'a> {
    file: &'a str,
    line: usize,
    column: usize,
}

impl<'a> LineColumn<'a> {
    ///
    /// 1-based line number, matching [crate::lexing::ScannerState::line_number].
    ///
    pub fn line(&self) -> usize {
        self.line + 1
    }

    ///
    /// 1-based column, counted in characters.
    ///
    pub fn column(&self) -> usize {
        self.column + 1
    }
}

///
/// Converting to 1-based only for display.
///
impl<'a> std::fmt::Display for LineColumn<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.column + 1)
    }
}

///
/// Finds the starting character index of all lines.
///
/// ABC lines end in `\n` or `\r\n`; a lone `\r` does not end a line.
///
fn line_starts(st: &[char]) -> Vec<usize> {
    let mut v = vec![0];

    for (i, ch) in st.iter().enumerate() {
        if *ch == '\n' {
            v.push(i + 1);
        }
    }

    if matches!(v.last(), Some(i) if *i >= st.len() && v.len() > 1) {
        let _ = v.pop();
    }

    v
}

///
/// A real source file.
///
/// Here, line-column information can be provided.
///
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: String,
    chars: Vec<char>,
    line_starts: Vec<usize>,
}

impl SourceFile {
    ///
    /// Source text that did not come from disk (stdin, an editor buffer).
    ///
    pub fn new(path: impl ToString, contents: impl ToString) -> Self {
        let path = path.to_string();
        let chars = contents.to_string().chars().collect::<Vec<_>>();
        let line_starts = line_starts(&chars);

        Self {
            path,
            chars,
            line_starts,
        }
    }

    ///
    /// TESTING ONLY
    /// ***
    /// Create a dummy file with a fake path.
    ///
    #[cfg(test)]
    pub fn dummy_file(contents: &str) -> Self {
        Self::new("DUMMY.abc", contents)
    }

    ///
    /// Attempts to read ABC text from a given file path.
    ///
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        Ok(Self::new(path.display(), contents))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    ///
    /// Return the (0-based) line and column information at a [Loc] in this file.
    ///
    fn line_col(&self, loc: Loc) -> Option<(usize, usize)> {
        if loc.0 > self.chars.len() {
            return None;
        }

        // Last line starting at or before `loc`.
        let line = self.line_starts.partition_point(|start| *start <= loc.0) - 1;
        Some((line, loc.0 - self.line_starts[line]))
    }
}

impl Source for SourceFile {
    type Location<'a> = LineColumn<'a>
    where Self: 'a;

    fn locate(&self, span: Span) -> Option<Self::Location<'_>> {
        if self.in_bounds(&span) {
            let (line, column) = self.line_col(span.start)?;
            return Some(LineColumn {
                file: &self.path,
                line,
                column,
            });
        }

        None
    }

    fn bounds(&self) -> Range<Loc> {
        Loc(0)..Loc(self.chars.len())
    }

    fn source_at(&self, span: impl Spanned) -> Option<String> {
        let span = span.span();
        if self.in_bounds(&span) && span.start <= span.end {
            return Some(self.chars[span.as_range()].iter().collect());
        }

        None
    }

    fn characters(&self) -> &[char] {
        &self.chars
    }
}
