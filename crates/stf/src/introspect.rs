//! Single-pass sizing scans used to lay out previews without building a grid.
//!
//! These deliberately do not run the tokenizer. Delimited scans are not
//! quote-aware: a separator inside quotes still counts as a column break.

use crate::cursor::terminator_offsets;
use crate::options::{Boundary, Mode, ParseOptions};

fn lines<'a>(options: &ParseOptions, buffer: &'a str) -> impl Iterator<Item = &'a str> {
    buffer
        .split(options.line_terminator)
        .take(options.row_budget())
}

/// Number of rows [`crate::parse`] would produce.
pub fn row_count(options: &ParseOptions, buffer: &str) -> usize {
    let budget = options.row_budget();
    let terminators = terminator_offsets(buffer, options.line_terminator)
        .take(budget)
        .count();
    (terminators + 1).min(budget)
}

/// Widest line measured in columns.
pub fn column_count(options: &ParseOptions, buffer: &str) -> usize {
    match options.mode {
        Mode::FixedWidth => options.split_positions.len(),
        Mode::Delimited => lines(options, buffer)
            .map(|line| separator_breaks(options, line) + 1)
            .max()
            .unwrap_or(0),
    }
}

/// Longest line in characters, terminator excluded.
pub fn longest_row_width(options: &ParseOptions, buffer: &str) -> usize {
    lines(options, buffer)
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

/// Widest content of column `index`, in characters. Unknown columns are 0.
pub fn column_width(options: &ParseOptions, buffer: &str, index: usize) -> usize {
    match options.mode {
        Mode::FixedWidth => fixed_column_width(options, buffer, index),
        Mode::Delimited => lines(options, buffer)
            .map(|line| delimited_column_width(options, line, index))
            .max()
            .unwrap_or(0),
    }
}

/// Count separators that would end a field, folding runs when collapsing.
fn separator_breaks(options: &ParseOptions, line: &str) -> usize {
    let mut breaks = 0;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if !options.is_separator(c) {
            continue;
        }
        if options.collapse_repeated_separators
            && chars.peek().is_some_and(|&n| options.is_separator(n))
        {
            continue;
        }
        breaks += 1;
    }
    breaks
}

fn delimited_column_width(options: &ParseOptions, line: &str, index: usize) -> usize {
    let mut column = 0;
    let mut width = 0;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if options.is_separator(c) {
            if options.collapse_repeated_separators
                && chars.peek().is_some_and(|&n| options.is_separator(n))
            {
                continue;
            }
            if column == index {
                return width;
            }
            column += 1;
        } else if column == index {
            width += 1;
        }
    }
    if column == index { width } else { 0 }
}

fn fixed_column_width(options: &ParseOptions, buffer: &str, index: usize) -> usize {
    let positions = &options.split_positions;
    let Some(&end) = positions.get(index) else {
        return 0;
    };
    let start = match index {
        0 => 0,
        i => positions[i - 1].offset().unwrap_or(0),
    };
    match end {
        Boundary::At(n) => n.saturating_sub(start),
        Boundary::EndOfLine => longest_row_width(options, buffer).saturating_sub(start),
    }
}
