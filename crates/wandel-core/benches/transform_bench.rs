// Criterion benchmarks for wandel-core.
//
// Run:
//   cargo bench -p wandel-core

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wandel_core::{SuffixTransform, Transform};

/// Singular/plural and positive/comparative pairs covering the common rule
/// shapes: identity, pure addition, umlaut only, and replacement.
const WORD_PAIRS: &[(&str, &str)] = &[
    ("Spiegel", "Spiegel"),
    ("Mantel", "M\u{00E4}ntel"),
    ("Kino", "Kinos"),
    ("Buch", "B\u{00FC}cher"),
    ("Aula", "Aulen"),
    ("Atlas", "Atlanten"),
    ("hoch", "h\u{00F6}her"),
    ("Pr\u{00E4}sidiumsmitglied", "Pr\u{00E4}sidiumsmitglieder"),
];

/// Derive the rule for every pair in the list.
fn bench_compute(c: &mut Criterion) {
    c.bench_function("compute_word_pairs", |b| {
        b.iter(|| {
            for &(origin, derived) in WORD_PAIRS {
                let transform =
                    SuffixTransform::compute(black_box(origin), black_box(derived)).unwrap();
                black_box(transform);
            }
        })
    });
}

/// Replay a precomputed rule on every origin word.
fn bench_apply(c: &mut Criterion) {
    let transforms: Vec<(SuffixTransform, &str)> = WORD_PAIRS
        .iter()
        .map(|&(origin, derived)| (SuffixTransform::compute(origin, derived).unwrap(), origin))
        .collect();

    c.bench_function("apply_word_pairs", |b| {
        b.iter(|| {
            for (transform, origin) in &transforms {
                let derived = transform.apply(black_box(origin)).unwrap();
                black_box(derived);
            }
        })
    });
}

criterion_group!(benches, bench_compute, bench_apply);
criterion_main!(benches);
