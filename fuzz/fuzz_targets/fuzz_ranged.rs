#![no_main]
use libfuzzer_sys::fuzz_target;
use stf::{Grid, ParseOptions};

// Ranged parsing over the whole buffer must agree with a full parse.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let opts = ParseOptions::csv().with_collapse(data.len() % 2 == 0);
        let Ok(full) = stf::parse(&opts, s) else {
            return;
        };
        let mut idx = stf::build_line_index(s, '\n', None);
        let rows = stf::parse_ranged(&opts, &mut idx, 0, None).unwrap();
        let mut grid = Grid::new();
        grid.apply_ranged(0, rows);
        assert_eq!(grid, full);
    }
});
