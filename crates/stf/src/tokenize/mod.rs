//! Line and document tokenizers, driving one of the two cell strategies.

pub(crate) mod delimited;
pub(crate) mod fixed;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::options::{Mode, ParseOptions};
use crate::token::{Grid, Row, Token};

/// Tokenize a whole buffer.
///
/// Every physical line yields a row, so `"a\n\nb"` has three rows and a
/// trailing terminator produces a final single-`Empty` row. Parsing stops
/// after `max_lines` rows; exceeding either ceiling fails the whole call.
pub fn parse(options: &ParseOptions, buffer: &str) -> Result<Grid> {
    options.validate()?;
    let mut cur = Cursor::new(buffer);
    let mut grid = Grid::new();
    loop {
        let row = tokenize_line(&mut cur, options, grid.len())?;
        grid.push(row);
        if cur.is_eof() {
            break;
        }
        cur.bump();
        if options.max_lines.is_some_and(|max| grid.len() >= max) {
            break;
        }
        if grid.len() >= options.limits.max_rows {
            tracing::warn!(
                "parse: row ceiling {} reached with input remaining",
                options.limits.max_rows
            );
            return Err(Error::TooManyRows {
                row: grid.len(),
                limit: options.limits.max_rows,
            });
        }
    }
    tracing::debug!(
        "parse: {} bytes -> {} rows, widest {} columns",
        buffer.len(),
        grid.len(),
        grid.width()
    );
    Ok(grid)
}

/// Tokenize the line under the cursor, leaving the cursor on its terminator
/// (or at end of buffer). An empty line yields a single `Empty` token.
pub(crate) fn tokenize_line(
    cur: &mut Cursor<'_>,
    options: &ParseOptions,
    line_no: usize,
) -> Result<Row> {
    match options.mode {
        Mode::Delimited => delimited_line(cur, options, line_no),
        Mode::FixedWidth => fixed_line(cur, options, line_no),
    }
}

fn delimited_line(cur: &mut Cursor<'_>, options: &ParseOptions, line_no: usize) -> Result<Row> {
    let mut row = Row::new();
    loop {
        let token = delimited::next_cell(cur, options);
        push_token(&mut row, token, options, line_no)?;
        if cur.at_line_end(options.line_terminator) {
            return Ok(row);
        }
    }
}

fn fixed_line(cur: &mut Cursor<'_>, options: &ParseOptions, line_no: usize) -> Result<Row> {
    let term = options.line_terminator;
    let mut row = Row::new();
    let mut line = fixed::LinePosition::default();
    loop {
        let Some(boundary) = options.split_positions.get(line.boundary) else {
            // Past the last boundary: the rest of the line belongs to no column.
            while !cur.at_line_end(term) {
                cur.bump();
            }
            return Ok(row);
        };
        let token = fixed::next_cell(cur, options, &mut line, boundary.offset());
        push_token(&mut row, token, options, line_no)?;
        if cur.at_line_end(term) {
            return Ok(row);
        }
    }
}

#[inline]
fn push_token(row: &mut Row, token: Token, options: &ParseOptions, line_no: usize) -> Result<()> {
    if row.len() >= options.limits.max_columns {
        tracing::warn!(
            "parse: line {} exceeds column ceiling {}",
            line_no,
            options.limits.max_columns
        );
        return Err(Error::TooManyColumns {
            line: line_no,
            limit: options.limits.max_columns,
        });
    }
    row.push(token);
    Ok(())
}
