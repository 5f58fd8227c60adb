#![doc = include_str!("../README.md")]

mod cursor;

pub mod error;
pub mod index;
pub mod introspect;
pub mod normalize;
pub mod options;
pub mod token;
pub mod tokenize;

pub use crate::error::{Error, Result};
pub use crate::index::{LineIndex, build_line_index, invalidate, parse_ranged};
pub use crate::introspect::{column_count, column_width, longest_row_width, row_count};
pub use crate::normalize::{is_valid_bytes, is_valid_text, normalize_line_endings};
pub use crate::options::{Boundary, Limits, Mode, ParseOptions, Separators, Trim};
pub use crate::token::{Grid, Row, Token};
pub use crate::tokenize::parse;
