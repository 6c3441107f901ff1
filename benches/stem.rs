//! Benchmarks for full-word stemming and the exception fast path.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use porter2::Porter2;

const WORDS: &[&str] = &[
    "consign", "consigned", "consigning", "consignment", "consistency", "consolation",
    "conspiracy", "knackeries", "kneeling", "knightly", "generalization", "hopefulness",
    "replacement", "sensibilities", "caresses", "luxuriating",
];

const EXCEPTIONS: &[&str] = &[
    "skis", "skies", "dying", "lying", "tying", "idly", "gently", "ugly", "early",
    "only", "singly", "sky", "news", "howe", "atlas", "cosmos", "bias", "andes",
];

fn bench_stem_words(c: &mut Criterion) {
    let stemmer = Porter2::new();
    let mut group = c.benchmark_group("stem");

    group.throughput(Throughput::Elements(WORDS.len() as u64));
    group.bench_function("vocabulary", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(stemmer.stem(black_box(word)).ok());
            }
        });
    });

    group.throughput(Throughput::Elements(EXCEPTIONS.len() as u64));
    group.bench_function("exceptions", |b| {
        b.iter(|| {
            for word in EXCEPTIONS {
                black_box(stemmer.stem(black_box(word)).ok());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_stem_words);
criterion_main!(benches);
