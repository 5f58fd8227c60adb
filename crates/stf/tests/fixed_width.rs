use stf::{Boundary, Error, ParseOptions, Token, Trim};

fn t(s: &str) -> Token {
    Token::Text(s.to_string())
}

fn fixed(positions: &[i64]) -> ParseOptions {
    let positions: Vec<Boundary> = positions
        .iter()
        .map(|&p| Boundary::try_from(p).unwrap())
        .collect();
    ParseOptions::fixed(positions)
}

#[test]
fn splits_at_boundaries_with_rest_of_line() {
    let grid = stf::parse(&fixed(&[3, 7, -1]), "abcdefghij").unwrap();
    assert_eq!(grid.rows(), &[vec![t("abc"), t("defg"), t("hij")]]);
}

#[test]
fn short_line_yields_fewer_columns() {
    let opts = fixed(&[3, 7, -1]);
    assert_eq!(stf::parse(&opts, "ab").unwrap()[0], vec![t("ab")]);
    assert_eq!(stf::parse(&opts, "abcde").unwrap()[0], vec![t("abc"), t("de")]);
}

#[test]
fn text_past_last_boundary_is_dropped() {
    let grid = stf::parse(&fixed(&[3, 7]), "abcdefghij\nxy").unwrap();
    assert_eq!(grid.rows(), &[vec![t("abc"), t("defg")], vec![t("xy")]]);
}

#[test]
fn position_resets_every_line() {
    let grid = stf::parse(&fixed(&[3, -1]), "abcdef\n123456").unwrap();
    assert_eq!(
        grid.rows(),
        &[vec![t("abc"), t("def")], vec![t("123"), t("456")]]
    );
}

#[test]
fn trimmed_blank_column_is_empty() {
    let opts = fixed(&[2, 4, -1]).with_trim(Trim::LEFT | Trim::RIGHT);
    let grid = stf::parse(&opts, "ab  cd").unwrap();
    assert_eq!(grid[0], vec![t("ab"), Token::Empty, t("cd")]);
}

#[test]
fn trim_applies_to_both_ends() {
    let opts = fixed(&[3, -1]).with_trim(Trim::LEFT | Trim::RIGHT);
    let grid = stf::parse(&opts, "ab  cd ").unwrap();
    assert_eq!(grid[0], vec![t("ab"), t("cd")]);
}

#[test]
fn repeated_boundary_gives_empty_column() {
    let grid = stf::parse(&fixed(&[3, 3, -1]), "abcdef").unwrap();
    assert_eq!(grid[0], vec![t("abc"), Token::Empty, t("def")]);
}

#[test]
fn zero_boundary_gives_leading_empty_column() {
    let grid = stf::parse(&fixed(&[0, -1]), "abc").unwrap();
    assert_eq!(grid[0], vec![Token::Empty, t("abc")]);
}

#[test]
fn separators_and_quotes_are_plain_text() {
    let grid = stf::parse(&fixed(&[2, -1]), "a,\"b,c\"").unwrap();
    assert_eq!(grid[0], vec![t("a,"), t("\"b,c\"")]);
}

#[test]
fn boundaries_count_characters_not_bytes() {
    let grid = stf::parse(&fixed(&[2, -1]), "éüx").unwrap();
    assert_eq!(grid[0], vec![t("éü"), t("x")]);
}

#[test]
fn empty_line_is_single_empty_token() {
    let grid = stf::parse(&fixed(&[2, -1]), "ab\n\ncd").unwrap();
    assert_eq!(
        grid.rows(),
        &[vec![t("ab")], vec![Token::Empty], vec![t("cd")]]
    );
}

#[test]
fn column_ceiling_applies() {
    let mut opts = fixed(&[1, 2, -1]);
    opts.limits.max_columns = 2;
    let err = stf::parse(&opts, "abc").unwrap_err();
    assert_eq!(err, Error::TooManyColumns { line: 0, limit: 2 });
}

#[test]
fn invalid_split_positions() {
    for bad in [&[][..], &[5, 3][..], &[-1, 3][..]] {
        let err = stf::parse(&fixed(bad), "abc").unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)), "{bad:?}");
    }
    assert!(Boundary::try_from(-2).is_err());
}
