//! Field extraction for separator-delimited text.

use crate::cursor::Cursor;
use crate::options::{ParseOptions, Trim};
use crate::token::Token;

/// Read one field and step past the separator that ended it.
///
/// Left trimming runs before the opening-quote check, so `  "a,b"` is quoted
/// when `Trim::LEFT` is set and taken literally otherwise. Text after a
/// closing quote is kept, giving `"abc"def` -> `abcdef`.
pub(crate) fn next_cell(cur: &mut Cursor<'_>, options: &ParseOptions) -> Token {
    let term = options.line_terminator;
    let quote = options.quote_char;

    if options.trim.contains(Trim::LEFT) {
        cur.skip_while(' ');
    }

    let mut in_quote = false;
    if cur.peek() == Some(quote) {
        cur.bump();
        in_quote = true;
    }

    let mut field = String::new();
    while let Some(c) = cur.peek() {
        if c == term {
            break;
        }
        if in_quote {
            cur.bump();
            if c == quote {
                if options.quote_doubling_is_literal && cur.peek() == Some(quote) {
                    cur.bump();
                    field.push(quote);
                } else {
                    in_quote = false;
                }
                continue;
            }
            field.push(c);
        } else if options.is_separator(c) {
            if options.collapse_repeated_separators
                && cur.peek_second().is_some_and(|n| options.is_separator(n))
            {
                cur.bump();
                continue;
            }
            break;
        } else {
            field.push(c);
            cur.bump();
        }
    }

    if options.trim.contains(Trim::RIGHT) {
        let kept = field.trim_end_matches(' ').len();
        field.truncate(kept);
    }

    if cur.peek().is_some_and(|c| c != term) {
        cur.bump();
    }

    Token::from_field(field)
}
