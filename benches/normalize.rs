use ai_core::normalize;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_text(paragraphs: usize) -> String {
    let paragraph = "Le café de l'Opéra (est. 1875) served 1,200+ guests/day!! \
        Prices: €4.50 → €5.00 #inflation @paris\t\n";
    paragraph.repeat(paragraphs)
}

fn normalize_bench(c: &mut Criterion) {
    let short = sample_text(1);
    let long = sample_text(2_000);

    c.bench_function("normalize_short", |b| {
        b.iter(|| black_box(normalize(black_box(&short))));
    });
    c.bench_function("normalize_long", |b| {
        b.iter(|| black_box(normalize(black_box(&long))));
    });
}

criterion_group!(benches, normalize_bench);
criterion_main!(benches);
