#![cfg(feature = "serde")]
use serde_json::json;
use stf::{Boundary, Grid, Mode, ParseOptions, Separators, Token, Trim};

#[test]
fn defaults() {
    let opts = ParseOptions::default();
    assert_eq!(opts.mode, Mode::Delimited);
    assert_eq!(opts.line_terminator, '\n');
    assert_eq!(opts.separators, Separators::TAB);
    assert_eq!(opts.quote_char, '"');
    assert!(opts.quote_doubling_is_literal);
    assert!(opts.validate().is_ok());
    assert_eq!(ParseOptions::tsv(), opts);
}

#[test]
fn equality_detects_edits() {
    let before = ParseOptions::fixed(vec![Boundary::At(3), Boundary::EndOfLine]);
    let same = before.clone().with_split_positions(vec![Boundary::At(3), Boundary::EndOfLine]);
    let moved = before.clone().with_split_positions(vec![Boundary::At(4), Boundary::EndOfLine]);
    assert_eq!(before, same);
    assert_ne!(before, moved);
}

#[test]
fn separator_char_lookup() {
    assert_eq!(Separators::SEMICOLON.as_char(), Some(';'));
    assert_eq!(Separators::CUSTOM.as_char(), None);
    assert_eq!((Separators::TAB | Separators::COMMA).as_char(), None);

    let opts = ParseOptions::csv().with_custom_separator('#');
    assert!(opts.is_separator(','));
    assert!(opts.is_separator('#'));
    assert!(!opts.is_separator(';'));
}

#[test]
fn options_serialize_sentinel_as_minus_one() -> Result<(), Box<dyn std::error::Error>> {
    let opts = ParseOptions::fixed(vec![Boundary::At(3), Boundary::EndOfLine])
        .with_trim(Trim::LEFT);
    let v = serde_json::to_value(&opts)?;
    assert_eq!(v["mode"], json!("fixed_width"));
    assert_eq!(v["split_positions"], json!([3, -1]));

    let back: ParseOptions = serde_json::from_value(v)?;
    assert_eq!(back, opts);
    Ok(())
}

#[test]
fn partial_config_fills_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let opts: ParseOptions = serde_json::from_str(
        r#"{"separators": "COMMA | SEMICOLON", "collapse_repeated_separators": true}"#,
    )?;
    assert_eq!(opts.separators, Separators::COMMA | Separators::SEMICOLON);
    assert!(opts.collapse_repeated_separators);
    assert_eq!(opts.quote_char, '"');
    assert_eq!(opts.limits, stf::Limits::default());
    Ok(())
}

#[test]
fn negative_split_position_is_rejected() {
    let res: Result<ParseOptions, _> = serde_json::from_str(r#"{"split_positions": [3, -7]}"#);
    assert!(res.is_err());
}

#[test]
fn grid_serializes_empty_as_null() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::from(vec![vec![Token::from("a"), Token::Empty]]);
    assert_eq!(serde_json::to_value(&grid)?, json!([["a", null]]));
    let back: Grid = serde_json::from_value(json!([["a", null, ""]]))?;
    assert_eq!(back[0], vec![Token::from("a"), Token::Empty, Token::Empty]);
    Ok(())
}
