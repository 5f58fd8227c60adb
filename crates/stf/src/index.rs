//! Line-start index with per-line signatures, used to re-tokenize only the
//! lines a preview actually needs.

use core::ops::RangeInclusive;

use crate::cursor::{Cursor, terminator_offsets};
use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::token::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineEntry {
    start: usize,
    signature: u32,
}

/// Owns the buffer it indexes. A changed buffer needs a new index; changed
/// parsing rules only need [`LineIndex::invalidate`].
#[derive(Debug, Clone)]
pub struct LineIndex {
    buffer: String,
    terminator: char,
    row_limit: Option<usize>,
    lines: Vec<LineEntry>,
    valid_signature: u32,
}

/// Record the start of every line in `buffer`, stopping after `row_limit`
/// lines. Lines are counted exactly as [`crate::parse`] counts rows.
pub fn build_line_index(
    buffer: impl Into<String>,
    terminator: char,
    row_limit: Option<usize>,
) -> LineIndex {
    let buffer = buffer.into();
    let limit = row_limit.unwrap_or(usize::MAX);
    let mut lines = vec![LineEntry {
        start: 0,
        signature: 0,
    }];
    if limit > 1 {
        let step = terminator.len_utf8();
        for off in terminator_offsets(&buffer, terminator) {
            lines.push(LineEntry {
                start: off + step,
                signature: 0,
            });
            if lines.len() >= limit {
                break;
            }
        }
    }
    tracing::debug!(
        "build_line_index: {} lines over {} bytes",
        lines.len(),
        buffer.len()
    );
    LineIndex {
        buffer,
        terminator,
        row_limit,
        lines,
        valid_signature: 1,
    }
}

impl LineIndex {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn terminator(&self) -> char {
        self.terminator
    }

    pub fn valid_signature(&self) -> u32 {
        self.valid_signature
    }

    /// Byte offset where line `n` starts.
    pub fn line_start(&self, n: usize) -> Option<usize> {
        self.lines.get(n).map(|l| l.start)
    }

    /// Text of line `n` without its terminator.
    pub fn line(&self, n: usize) -> Option<&str> {
        let start = self.line_start(n)?;
        let rest = &self.buffer[start..];
        Some(match rest.find(self.terminator) {
            Some(end) => &rest[..end],
            None => rest,
        })
    }

    /// Whether line `n` holds a row tokenized under the current signature.
    pub fn is_current(&self, n: usize) -> bool {
        self.lines
            .get(n)
            .is_some_and(|l| l.signature == self.valid_signature)
    }

    /// Clamp a requested range to the indexed lines. `to_line` of `None` or
    /// past the end means the last line; an empty result is `None`.
    pub fn clamp(&self, from_line: usize, to_line: Option<usize>) -> Option<RangeInclusive<usize>> {
        let last = self.lines.len().checked_sub(1)?;
        let to = match to_line {
            Some(t) if t <= last => t,
            _ => last,
        };
        (from_line <= to).then_some(from_line..=to)
    }

    /// Mark every cached line stale without rescanning the buffer.
    pub fn invalidate(&mut self) {
        self.valid_signature = self.valid_signature.wrapping_add(1);
        if self.valid_signature == 0 {
            // Old stamps could collide with the restarted counter.
            for line in &mut self.lines {
                line.signature = 0;
            }
            self.valid_signature = 1;
        }
        tracing::debug!("invalidate: signature now {}", self.valid_signature);
    }

    #[cfg(test)]
    fn force_signature(&mut self, sig: u32) {
        self.valid_signature = sig;
    }
}

/// Free-function form of [`LineIndex::invalidate`].
pub fn invalidate(index: &mut LineIndex) {
    index.invalidate();
}

/// Tokenize lines `from_line..=to_line` of an indexed buffer.
///
/// Lines whose signature is already current come back as `None`, meaning the
/// caller's previously stored row is still right. Signatures are only stamped
/// once the whole range has tokenized successfully.
pub fn parse_ranged(
    options: &ParseOptions,
    index: &mut LineIndex,
    from_line: usize,
    to_line: Option<usize>,
) -> Result<Vec<Option<Row>>> {
    options.validate()?;
    if options.line_terminator != index.terminator {
        return Err(Error::ConfigurationChanged(format!(
            "line terminator {:?} differs from indexed {:?}",
            options.line_terminator, index.terminator
        )));
    }
    if options.max_lines != index.row_limit {
        return Err(Error::ConfigurationChanged(format!(
            "line limit {:?} differs from indexed {:?}",
            options.max_lines, index.row_limit
        )));
    }
    if index.lines.len() > options.limits.max_rows {
        tracing::warn!(
            "parse_ranged: {} indexed lines exceed row ceiling {}",
            index.lines.len(),
            options.limits.max_rows
        );
        return Err(Error::TooManyRows {
            row: options.limits.max_rows,
            limit: options.limits.max_rows,
        });
    }

    let Some(range) = index.clamp(from_line, to_line) else {
        return Ok(Vec::new());
    };

    let valid = index.valid_signature;
    let mut out = Vec::with_capacity(range.end() - range.start() + 1);
    let mut fresh = Vec::new();
    for n in range.clone() {
        let entry = index.lines[n];
        if entry.signature == valid {
            out.push(None);
            continue;
        }
        let mut cur = Cursor::at(&index.buffer, entry.start);
        out.push(Some(crate::tokenize::tokenize_line(&mut cur, options, n)?));
        fresh.push(n);
    }
    for &n in &fresh {
        index.lines[n].signature = valid;
    }
    tracing::debug!(
        "parse_ranged: lines {:?}, {} tokenized, {} reused",
        range,
        fresh.len(),
        out.len() - fresh.len()
    );
    Ok(out)
}
