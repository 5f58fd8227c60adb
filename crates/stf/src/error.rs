use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A line produced more columns than the configured ceiling allows.
    #[error("too many columns at line {line}: limit is {limit}")]
    TooManyColumns { line: usize, limit: usize },

    /// The document has more rows than the configured ceiling allows.
    #[error("too many rows at row {row}: limit is {limit}")]
    TooManyRows { row: usize, limit: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The line index was built under different line-splitting rules than
    /// the options passed to a ranged parse.
    #[error("options changed since the line index was built: {0}")]
    ConfigurationChanged(String),
}

pub type Result<T> = core::result::Result<T, Error>;
