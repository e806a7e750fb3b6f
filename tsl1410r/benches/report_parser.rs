use criterion::{criterion_group, criterion_main, Criterion};
use manifest_dir_macros::exist_relative_path;
use tsl1410r::{hex_parser::parse_hex_str, report::parser::parse_report};

const REPORT_STREAM: &'static str =
    include_str!(exist_relative_path!("resources/test/report_stream_example.txt"));

fn bench_decoding_reports(c: &mut Criterion) {
    let (_, stream) = parse_hex_str(REPORT_STREAM).expect("Could not parse hex file");
    c.bench_function("single report", |b| b.iter(|| parse_report(&stream)));
    c.bench_function("report stream", |b| {
        b.iter(|| {
            let mut data = &stream[..];
            while !data.is_empty() {
                let (rest, _) = parse_report(data).expect("fixture holds whole reports");
                data = rest;
            }
        })
    });
}

criterion_group!(benches, bench_decoding_reports);
criterion_main!(benches);
