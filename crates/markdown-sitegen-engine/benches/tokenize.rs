use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::tokenize;
mod common;

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for words in [10, 100, 1000] {
        let line = common::generate_inline_line(words);
        group.bench_function(format!("{words}_words"), |b| {
            b.iter(|| {
                let spans = tokenize(std::hint::black_box(&line));
                std::hint::black_box(spans)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
