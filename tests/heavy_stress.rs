#![cfg(feature = "heavy")]
use hirschberg::{AlignerBuilder, GlobalAligner, HirschbergEngine, Scoring};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

/// Flip roughly `rate` of the positions to a different base.
fn mutate(rng: &mut StdRng, seq: &[u8], rate: f64) -> Vec<u8> {
    seq.iter()
        .map(|&b| {
            if rng.gen_bool(rate) {
                b"ACGT"[(b"ACGT".iter().position(|&c| c == b).unwrap_or(0) + 1) % 4]
            } else {
                b
            }
        })
        .collect()
}

#[test]
fn heavy_stress_hirschberg_medium() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 20_000);
    let t = mutate(&mut rng, &s, 0.1);
    let engine = HirschbergEngine::new(Scoring::default());
    let aln = engine.align(&s[..], &t[..]);
    assert_eq!(aln.ungapped_first(), s);
    assert_eq!(aln.ungapped_second(), t);
    // Equal lengths: the no-gap alignment is a lower bound.
    let no_gap: i32 = s
        .iter()
        .zip(&t)
        .map(|(a, b)| Scoring::default().pair(a, b))
        .sum();
    assert!(aln.score(engine.scoring()) >= no_gap);
}

#[test]
fn heavy_stress_pipeline_unrelated() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = random_dna(&mut rng, 10_000);
    let t = random_dna(&mut rng, 12_000);
    let out = AlignerBuilder::new().build().run(&s[..], &t[..]);
    let region = out.region.expect("cropping enabled");
    assert!(out.score >= region.score);
}
