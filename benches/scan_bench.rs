//! Benchmarks for linescan.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::io::Cursor;

use linescan::{ChunkReader, NtriplesCheck, ScanConfig, Scanner};

fn triples(count: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..count {
        data.extend_from_slice(
            format!("<http://example.org/s{0}> <http://example.org/p> <http://example.org/o{0}> .\n", i)
                .as_bytes(),
        );
    }
    data
}

fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader");

    for lines in [1_000, 100_000] {
        let data = triples(lines);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(format!("chunk_{}_lines", lines), &data, |b, data| {
            b.iter(|| {
                let reader =
                    ChunkReader::new(Cursor::new(black_box(data.clone())), ScanConfig::default());
                let mut total = 0usize;
                for chunk in reader {
                    total += chunk.unwrap().line_count();
                }
                black_box(total)
            });
        });
    }

    // One pathological line far larger than the window
    let long_line = vec![b'x'; 8 * 1024 * 1024];
    group.throughput(Throughput::Bytes(long_line.len() as u64));
    group.bench_with_input("spill_8mb_line", &long_line, |b, data| {
        let config = ScanConfig::default().with_nominal_buffer_bytes(64 * 1024);
        b.iter(|| {
            let mut reader = ChunkReader::new(Cursor::new(black_box(data.clone())), config);
            let chunk = reader.next_chunk().unwrap();
            black_box(chunk.len())
        });
    });

    group.finish();
}

fn bench_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let data = triples(50_000);
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_with_input("ntriples_clean_50k", &data, |b, data| {
        b.iter(|| {
            let scanner = Scanner::new(NtriplesCheck);
            let report = scanner
                .scan(Cursor::new(black_box(data.clone())), &mut std::io::sink())
                .unwrap();
            black_box(report.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reader, bench_scanner);
criterion_main!(benches);
