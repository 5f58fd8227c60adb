#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One parsed field. A field with no content after trimming is `Empty`,
/// never `Text("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Option<String>", into = "Option<String>"))]
pub enum Token {
    Text(String),
    #[default]
    Empty,
}

impl Token {
    pub fn from_field(field: String) -> Self {
        if field.is_empty() {
            Token::Empty
        } else {
            Token::Text(field)
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Text(s) => Some(s),
            Token::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Token::Empty)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::from_field(s.to_string())
    }
}

impl From<Option<String>> for Token {
    fn from(s: Option<String>) -> Self {
        s.map_or(Token::Empty, Token::from_field)
    }
}

impl From<Token> for Option<String> {
    fn from(t: Token) -> Self {
        match t {
            Token::Text(s) => Some(s),
            Token::Empty => None,
        }
    }
}

pub type Row = Vec<Token>;

/// Rows in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Column count of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Merge the output of a ranged parse starting at `from_line`.
    ///
    /// `None` entries keep the row already stored at that position; fresh rows
    /// replace it, growing the grid when the range reaches past its end.
    pub fn apply_ranged(&mut self, from_line: usize, updates: Vec<Option<Row>>) {
        for (offset, update) in updates.into_iter().enumerate() {
            let Some(row) = update else {
                continue;
            };
            let at = from_line + offset;
            if at < self.rows.len() {
                self.rows[at] = row;
            } else {
                self.rows.resize_with(at, Row::new);
                self.rows.push(row);
            }
        }
    }
}

impl From<Vec<Row>> for Grid {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl core::ops::Index<usize> for Grid {
    type Output = Row;

    fn index(&self, i: usize) -> &Row {
        &self.rows[i]
    }
}
