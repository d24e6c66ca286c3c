use criterion::{Criterion, criterion_group, criterion_main};
use reserve_sizer_core::{Extractor, Recommender};
use std::fmt::Write;
use std::hint::black_box;

fn counter_dump(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        let _ = writeln!(text, "types.unrelated.counter_{i} {i}");
        if i % 97 == 0 {
            text.push_str("some interleaved log output without a value\n");
        }
    }
    text.push_str("types.input.files 120000\n");
    text.push_str("types.input.classes 300000\n");
    text.push_str("types.input.modules 50000\n");
    text.push_str("types.input.methods.total 2000000\n");
    text
}

fn benchmark_extract(c: &mut Criterion) {
    let text = counter_dump(50_000);
    let extractor = Extractor::default();
    let recommender = Recommender::default();

    c.bench_function("extract_50k_lines", |b| {
        b.iter(|| {
            let snapshot = extractor.extract(black_box(&text));
            black_box(recommender.recommend_all(&snapshot));
        })
    });
}

criterion_group!(benches, benchmark_extract);
criterion_main!(benches);
