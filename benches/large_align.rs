//! Benchmark: linear-space global alignment of long random DNA.
//!
//! Run with:
//! `cargo bench --bench large_align`
//!
//! Sizes are chosen so a full score table would not fit comfortably in
//! memory; the engine only ever holds a couple of score rows.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hirschberg::{Aligner, GlobalAligner, HirschbergEngine, Scoring};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn bench_global_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("hirschberg_global_large");
    group.sample_size(10);

    for &len in &[2_000usize, 5_000, 10_000] {
        group.bench_function(format!("global_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    (random_dna(&mut rng, len), random_dna(&mut rng, len))
                },
                |(s, t)| {
                    let engine = HirschbergEngine::new(Scoring::default());
                    let aln = engine.align(&s[..], &t[..]);
                    criterion::black_box(aln.len());
                },
                BatchSize::PerIteration,
            )
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop_then_align");
    group.sample_size(10);

    for &len in &[2_000usize, 5_000] {
        group.bench_function(format!("pipeline_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    (random_dna(&mut rng, len), random_dna(&mut rng, len))
                },
                |(s, t)| {
                    let out = Aligner::default().run(&s[..], &t[..]);
                    criterion::black_box(out.score);
                },
                BatchSize::PerIteration,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_global_large, bench_pipeline);
criterion_main!(benches);
