//! Example: align two FASTA / raw-text files and print a report.
//!
//! Run with:
//! `cargo run --example local_crop -- first.fa second.fa`
//!
//! Without arguments a built-in pair of sequences is used.

use hirschberg::{io, Aligner};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (x, y) = match args.as_slice() {
        [a, b] => (io::read_sequence(a)?, io::read_sequence(b)?),
        _ => (
            b"TTTTTTACGGATCAAGGGGG".to_vec(),
            b"CCCCACGTATCAAC".to_vec(),
        ),
    };

    let aligner = Aligner::default();
    let region = aligner.locate(&x[..], &y[..]);
    let (cx, cy) = region.crop(&x[..], &y[..]);
    println!(
        "cropped {}..{} of {} and {}..{} of {}",
        region.first.start,
        region.first.end,
        x.len(),
        region.second.start,
        region.second.end,
        y.len()
    );
    println!("{}", String::from_utf8_lossy(cx));
    println!("{}", String::from_utf8_lossy(cy));
    println!();

    let out = aligner.run(&x[..], &y[..]);
    io::write_report(std::io::stdout().lock(), &out.alignment, aligner.scoring())?;
    Ok(())
}
