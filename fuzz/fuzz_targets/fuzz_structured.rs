#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stf::{Boundary, Limits, Mode, ParseOptions, Separators, Trim};

#[derive(Arbitrary, Debug)]
struct Input {
    fixed: bool,
    separators: u16,
    custom: Option<char>,
    quote: char,
    doubling: bool,
    collapse: bool,
    trim: u8,
    terminator: char,
    max_lines: Option<u8>,
    positions: Vec<u8>,
    to_end: bool,
    text: String,
    from: u8,
    to: Option<u8>,
}

fn options(input: &Input) -> ParseOptions {
    let mut positions: Vec<Boundary> = {
        let mut p: Vec<usize> = input.positions.iter().map(|&b| b as usize).collect();
        p.sort_unstable();
        p.into_iter().map(Boundary::At).collect()
    };
    if input.to_end {
        positions.push(Boundary::EndOfLine);
    }
    ParseOptions {
        mode: if input.fixed { Mode::FixedWidth } else { Mode::Delimited },
        line_terminator: input.terminator,
        max_lines: input.max_lines.map(usize::from),
        trim: Trim::from_bits_truncate(input.trim),
        separators: Separators::from_bits_truncate(input.separators),
        custom_separator: input.custom,
        quote_char: input.quote,
        quote_doubling_is_literal: input.doubling,
        collapse_repeated_separators: input.collapse,
        split_positions: positions,
        limits: Limits {
            max_columns: 64,
            max_rows: 256,
        },
    }
}

fuzz_target!(|input: Input| {
    let opts = options(&input);
    let Ok(full) = stf::parse(&opts, &input.text) else {
        return;
    };
    assert_eq!(full.len(), stf::row_count(&opts, &input.text));
    let _ = stf::column_count(&opts, &input.text);
    let _ = stf::column_width(&opts, &input.text, input.from as usize);

    let mut idx = stf::build_line_index(input.text.as_str(), opts.line_terminator, opts.max_lines);
    let from = input.from as usize;
    let to = input.to.map(usize::from);
    let rows = stf::parse_ranged(&opts, &mut idx, from, to).expect("same rules as full parse");
    for (offset, row) in rows.into_iter().enumerate() {
        assert_eq!(row.as_ref(), Some(&full[from + offset]));
    }
});
