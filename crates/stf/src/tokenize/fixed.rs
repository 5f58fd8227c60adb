//! Field extraction for fixed-column text.

use crate::cursor::Cursor;
use crate::options::{ParseOptions, Trim};
use crate::token::Token;

/// Per-line position state; a fresh value is used for every line.
#[derive(Debug, Default)]
pub(crate) struct LinePosition {
    /// Characters consumed since the start of the line.
    pub column: usize,
    /// Index of the next split position to honour.
    pub boundary: usize,
}

/// Read characters until `end` (a character offset from line start) or the
/// end of the line. `None` reads to the end of the line.
pub(crate) fn next_cell(
    cur: &mut Cursor<'_>,
    options: &ParseOptions,
    line: &mut LinePosition,
    end: Option<usize>,
) -> Token {
    let term = options.line_terminator;
    let mut field = String::new();
    while let Some(c) = cur.peek() {
        if c == term || Some(line.column) == end {
            break;
        }
        field.push(c);
        cur.bump();
        line.column += 1;
    }
    line.boundary += 1;

    let mut s = field.as_str();
    if options.trim.contains(Trim::LEFT) {
        s = s.trim_start_matches(' ');
    }
    if options.trim.contains(Trim::RIGHT) {
        s = s.trim_end_matches(' ');
    }
    if s.len() == field.len() {
        Token::from_field(field)
    } else {
        Token::from_field(s.to_string())
    }
}
