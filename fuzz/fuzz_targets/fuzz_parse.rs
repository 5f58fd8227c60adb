#![no_main]
use libfuzzer_sys::fuzz_target;
use stf::{ParseOptions, Trim};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let opts = ParseOptions::csv().with_trim(Trim::LEFT | Trim::RIGHT);
        if let Ok(grid) = stf::parse(&opts, s) {
            assert_eq!(grid.len(), stf::row_count(&opts, s));
        }

        let mut owned = s.to_string();
        let len = stf::normalize_line_endings(&mut owned);
        assert!(len <= s.len());
        assert!(!owned.contains('\r'));
    }
});
