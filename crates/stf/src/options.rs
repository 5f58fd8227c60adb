use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Widest sheet a parse may produce.
pub const MAX_COLUMNS: usize = 16_384;
/// Tallest sheet a parse may produce.
pub const MAX_ROWS: usize = 1_048_576;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    #[default]
    Delimited,
    FixedWidth,
}

bitflags! {
    /// Characters that end a field in delimited mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Separators: u16 {
        const TAB = 0x0001;
        const COLON = 0x0002;
        const COMMA = 0x0004;
        const SPACE = 0x0008;
        const SEMICOLON = 0x0010;
        const PIPE = 0x0020;
        const SLASH = 0x0040;
        const HYPHEN = 0x0080;
        const BANG = 0x0100;
        /// Use `ParseOptions::custom_separator`
        const CUSTOM = 0x0200;
    }
}

bitflags! {
    /// Which ends of a field lose their plain spaces. Tabs are never trimmed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Trim: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x02;
    }
}

impl Default for Separators {
    fn default() -> Self {
        Separators::TAB
    }
}

impl Default for Trim {
    fn default() -> Self {
        Trim::empty()
    }
}

impl Separators {
    /// The character a built-in flag stands for; `None` for `CUSTOM` or a
    /// combination of flags.
    pub fn as_char(self) -> Option<char> {
        let c = match self {
            s if s == Separators::TAB => '\t',
            s if s == Separators::COLON => ':',
            s if s == Separators::COMMA => ',',
            s if s == Separators::SPACE => ' ',
            s if s == Separators::SEMICOLON => ';',
            s if s == Separators::PIPE => '|',
            s if s == Separators::SLASH => '/',
            s if s == Separators::HYPHEN => '-',
            s if s == Separators::BANG => '!',
            _ => return None,
        };
        Some(c)
    }

    fn flag_for(c: char) -> Separators {
        match c {
            '\t' => Separators::TAB,
            ':' => Separators::COLON,
            ',' => Separators::COMMA,
            ' ' => Separators::SPACE,
            ';' => Separators::SEMICOLON,
            '|' => Separators::PIPE,
            '/' => Separators::SLASH,
            '-' => Separators::HYPHEN,
            '!' => Separators::BANG,
            _ => Separators::empty(),
        }
    }
}

/// End boundary of a fixed-width column, measured in characters from the
/// start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub enum Boundary {
    At(usize),
    /// The column runs to the end of the line (written `-1` in saved options).
    EndOfLine,
}

impl Boundary {
    pub fn offset(self) -> Option<usize> {
        match self {
            Boundary::At(n) => Some(n),
            Boundary::EndOfLine => None,
        }
    }
}

impl TryFrom<i64> for Boundary {
    type Error = Error;

    fn try_from(v: i64) -> Result<Self> {
        match v {
            -1 => Ok(Boundary::EndOfLine),
            v if v >= 0 => Ok(Boundary::At(v as usize)),
            v => Err(Error::InvalidOptions(format!("split position {v} is negative"))),
        }
    }
}

impl From<Boundary> for i64 {
    fn from(b: Boundary) -> i64 {
        match b {
            Boundary::At(n) => n as i64,
            Boundary::EndOfLine => -1,
        }
    }
}

/// Hard ceilings that bound memory and time on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    pub max_columns: usize,
    pub max_rows: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_columns: MAX_COLUMNS,
            max_rows: MAX_ROWS,
        }
    }
}

/// How a buffer is split into rows and tokens.
///
/// The value is read-only for the duration of a parse. Callers that edit
/// options interactively compare the old and new value with `==` to decide
/// whether a re-parse is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    pub mode: Mode,
    pub line_terminator: char,
    /// Number of lines to consume; `None` parses the whole buffer.
    pub max_lines: Option<usize>,
    pub trim: Trim,
    pub separators: Separators,
    /// Only consulted when `separators` contains `CUSTOM`.
    pub custom_separator: Option<char>,
    pub quote_char: char,
    /// Two adjacent quote characters inside a quoted field stand for one
    /// literal quote character.
    pub quote_doubling_is_literal: bool,
    pub collapse_repeated_separators: bool,
    pub split_positions: Vec<Boundary>,
    pub limits: Limits,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Delimited,
            line_terminator: '\n',
            max_lines: None,
            trim: Trim::empty(),
            separators: Separators::TAB,
            custom_separator: None,
            quote_char: '"',
            quote_doubling_is_literal: true,
            collapse_repeated_separators: false,
            split_positions: Vec::new(),
            limits: Limits::default(),
        }
    }
}

impl ParseOptions {
    pub fn csv() -> Self {
        Self {
            separators: Separators::COMMA,
            ..Self::default()
        }
    }

    pub fn tsv() -> Self {
        Self::default()
    }

    pub fn fixed(positions: impl Into<Vec<Boundary>>) -> Self {
        Self {
            mode: Mode::FixedWidth,
            split_positions: positions.into(),
            ..Self::default()
        }
    }

    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Sets the custom separator and enables `Separators::CUSTOM`.
    pub fn with_custom_separator(mut self, c: char) -> Self {
        self.custom_separator = Some(c);
        self.separators |= Separators::CUSTOM;
        self
    }

    pub fn with_quote(mut self, quote: char, doubling_is_literal: bool) -> Self {
        self.quote_char = quote;
        self.quote_doubling_is_literal = doubling_is_literal;
        self
    }

    pub fn with_trim(mut self, trim: Trim) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.collapse_repeated_separators = collapse;
        self
    }

    pub fn with_line_terminator(mut self, terminator: char) -> Self {
        self.line_terminator = terminator;
        self
    }

    pub fn with_max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_split_positions(mut self, positions: impl Into<Vec<Boundary>>) -> Self {
        self.split_positions = positions.into();
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Alphanumeric characters never separate, whatever the configuration.
    #[inline]
    pub fn is_separator(&self, c: char) -> bool {
        if c.is_alphanumeric() {
            return false;
        }
        let flag = Separators::flag_for(c);
        if !flag.is_empty() && self.separators.contains(flag) {
            return true;
        }
        self.separators.contains(Separators::CUSTOM) && self.custom_separator == Some(c)
    }

    /// Number of rows a parse may produce, honouring both `max_lines` and the
    /// row ceiling.
    pub(crate) fn row_budget(&self) -> usize {
        match self.max_lines {
            Some(n) => n.min(self.limits.max_rows),
            None => self.limits.max_rows,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.line_terminator == '\0' {
            return Err(invalid("line terminator must not be NUL"));
        }
        if self.max_lines == Some(0) {
            return Err(invalid("max_lines must be at least 1"));
        }
        if self.limits.max_columns == 0 || self.limits.max_rows == 0 {
            return Err(invalid("limits must be non-zero"));
        }
        match self.mode {
            Mode::Delimited => {
                if self.quote_char == '\0' {
                    return Err(invalid("quote character must not be NUL"));
                }
                if self.separators.contains(Separators::CUSTOM) {
                    match self.custom_separator {
                        None | Some('\0') => {
                            return Err(invalid("custom separator enabled but not set"));
                        }
                        Some(_) => {}
                    }
                }
            }
            Mode::FixedWidth => validate_split_positions(&self.split_positions)?,
        }
        Ok(())
    }
}

fn validate_split_positions(positions: &[Boundary]) -> Result<()> {
    if positions.is_empty() {
        return Err(invalid("fixed-width mode needs at least one split position"));
    }
    let mut prev = 0usize;
    for (i, b) in positions.iter().enumerate() {
        match *b {
            Boundary::At(n) => {
                if n < prev {
                    return Err(Error::InvalidOptions(format!(
                        "split position {n} at index {i} is before {prev}"
                    )));
                }
                prev = n;
            }
            Boundary::EndOfLine if i + 1 != positions.len() => {
                return Err(invalid("end-of-line split position must be last"));
            }
            Boundary::EndOfLine => {}
        }
    }
    Ok(())
}

fn invalid(msg: &str) -> Error {
    Error::InvalidOptions(msg.to_string())
}
