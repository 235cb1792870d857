#![no_main]

use libfuzzer_sys::fuzz_target;
use linescan::{ChunkReader, ScanConfig};
use std::io::Cursor;

fuzz_target!(|data: Vec<u8>| {
    // Tiny windows and batches so chunk seams land everywhere
    let configs = vec![
        ScanConfig::new(1, 1).unwrap(),
        ScanConfig::new(3, 2).unwrap(),
        ScanConfig::new(16, 5).unwrap(),
        ScanConfig::default(),
    ];

    let true_lines = {
        let terminators = data.iter().filter(|&&b| b == b'\n').count();
        let unterminated_tail = data.last().is_some_and(|&b| b != b'\n');
        terminators + usize::from(unterminated_tail)
    };

    for config in configs {
        let reader = ChunkReader::new(Cursor::new(data.clone()), config);
        let chunks: Vec<_> = reader.collect::<Result<_, _>>().unwrap();

        // Verify: the last chunk (and only the last) is final
        assert!(chunks.last().unwrap().is_final());
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(!chunk.is_final());
        }

        // Verify: non-final chunks end on a line boundary
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.data().last(), Some(&b'\n'));
        }

        // Verify: reassembly is byte-exact
        let reassembled: Vec<u8> = chunks.iter().flat_map(|c| c.data().to_vec()).collect();
        assert_eq!(reassembled, data);

        // Verify: totality of line counts
        let total: usize = chunks.iter().map(|c| c.line_count()).sum();
        assert_eq!(total, true_lines);

        // Verify: offsets are contiguous
        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.offset(), Some(expected_offset));
            expected_offset += chunk.len() as u64;
        }
    }
});
