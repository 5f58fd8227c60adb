use proptest::prelude::*;
use stf::{Grid, ParseOptions, Token, Trim, build_line_index, parse_ranged, row_count};

fn any_csv_text() -> impl Strategy<Value = String> {
    "[a-c ,;\"\n]{0,80}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn plain_lines_give_one_trimmed_token(text in "[a-z ]{0,12}(\n[a-z ]{0,12}){0,6}") {
        let opts = ParseOptions::csv().with_trim(Trim::LEFT | Trim::RIGHT);
        let grid = stf::parse(&opts, &text).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();
        prop_assert_eq!(grid.len(), lines.len());
        for (row, line) in grid.rows().iter().zip(lines) {
            prop_assert_eq!(row, &vec![Token::from(line.trim_matches(' '))]);
        }
    }

    #[test]
    fn doubled_quotes_round_trip(field in "[a-z, \"]{1,20}") {
        let encoded = format!("\"{}\"", field.replace('"', "\"\""));
        let grid = stf::parse(&ParseOptions::csv(), &encoded).unwrap();
        prop_assert_eq!(grid.rows(), &[vec![Token::Text(field)]]);
    }

    #[test]
    fn row_count_matches_parse(text in any_csv_text(), collapse in any::<bool>()) {
        let opts = ParseOptions::csv().with_collapse(collapse);
        let grid = stf::parse(&opts, &text).unwrap();
        prop_assert_eq!(row_count(&opts, &text), grid.len());
    }

    #[test]
    fn ranged_parse_agrees_with_full_parse(text in any_csv_text(), trim in 0u8..4) {
        let opts = ParseOptions::csv().with_trim(Trim::from_bits_truncate(trim));
        let full = stf::parse(&opts, &text).unwrap();
        let mut idx = build_line_index(text.as_str(), '\n', None);
        prop_assert_eq!(idx.len(), full.len());

        let first = parse_ranged(&opts, &mut idx, 0, None).unwrap();
        let mut grid = Grid::new();
        grid.apply_ranged(0, first);
        prop_assert_eq!(&grid, &full);

        let second = parse_ranged(&opts, &mut idx, 0, None).unwrap();
        prop_assert!(second.iter().all(Option::is_none));
        grid.apply_ranged(0, second);
        prop_assert_eq!(&grid, &full);

        stf::invalidate(&mut idx);
        let third = parse_ranged(&opts, &mut idx, 0, None).unwrap();
        prop_assert!(third.iter().all(Option::is_some));
    }

    #[test]
    fn collapse_matches_single_separator(a in "[a-z]{1,5}", b in "[a-z]{1,5}", run in 1usize..6) {
        let opts = ParseOptions::csv().with_collapse(true);
        let long = format!("{a}{}{b}", ",".repeat(run));
        let short = format!("{a},{b}");
        prop_assert_eq!(stf::parse(&opts, &long).unwrap(), stf::parse(&opts, &short).unwrap());
    }
}
