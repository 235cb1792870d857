#![no_main]

use libfuzzer_sys::fuzz_target;
use linescan::{Outcome, ScanConfig, Scanner};
use std::io::Cursor;

fuzz_target!(|data: Vec<u8>| {
    let fail_everything = |_line: &str| Outcome::Invalid("rejected".into());

    let true_lines = {
        let terminators = data.iter().filter(|&&b| b == b'\n').count();
        let unterminated_tail = data.last().is_some_and(|&b| b != b'\n');
        (terminators + usize::from(unterminated_tail)) as u64
    };

    for config in [ScanConfig::new(2, 3).unwrap(), ScanConfig::default()] {
        let scanner = Scanner::with_config(fail_everything, config);
        let report = scanner
            .scan(Cursor::new(data.clone()), &mut std::io::sink())
            .unwrap();

        // Every line fails, so the report is exactly 1..=true_lines
        let numbers: Vec<u64> = report.line_numbers().collect();
        let expected: Vec<u64> = (1..=true_lines).collect();
        assert_eq!(numbers, expected);
    }
});
