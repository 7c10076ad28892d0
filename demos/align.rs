//! Example: crop two sequences to their best local region and align them.
//!
//! Run with:
//! `cargo run --example align`

use hirschberg::{AlignerBuilder, Scoring};

fn main() {
    let s = b"GATTACA";
    let t = b"GCATGCU";

    // Reference scoring: +2 match, -1 mismatch, -2 gap.
    let aligner = AlignerBuilder::new().with_scoring(Scoring::default()).build();
    let out = aligner.run(s, t);

    if let Some(region) = &out.region {
        println!(
            "Local region: first {:?}, second {:?} (local score {})",
            region.first, region.second, region.score
        );
    }
    println!("Global alignment score: {}", out.score);
    println!("{}", out.alignment);

    // Same inputs without cropping: a global alignment of the whole pair.
    let full = AlignerBuilder::new().with_local_crop(false).build().run(s, t);
    println!();
    println!("Uncropped score: {}", full.score);
    println!("{}", full.alignment);
}
