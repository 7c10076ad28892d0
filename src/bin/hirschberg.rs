use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use hirschberg::{io, AlignerBuilder, GlobalAligner, Scoring};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Crop two sequences to their best local region and align them globally in
/// linear space.
#[derive(Parser, Debug)]
#[command(name = "hirschberg", version, about)]
struct Cli {
    /// FASTA or plain-text file holding the first sequence
    first: PathBuf,
    /// FASTA or plain-text file holding the second sequence
    second: PathBuf,
    /// Where to write the alignment report (aligned first, match line, score, aligned second)
    output: Option<PathBuf>,

    /// Print the cropped inputs and the alignment to the console
    #[arg(short, long)]
    console: bool,
    /// Report the peak resident memory observed around each stage
    #[arg(short, long)]
    memory: bool,
    /// Report the wall-clock time of the alignment
    #[arg(short, long)]
    time: bool,

    #[arg(long = "match", default_value_t = hirschberg::scoring::MATCH_SCORE, allow_negative_numbers = true)]
    match_score: i32,
    #[arg(long = "mismatch", default_value_t = hirschberg::scoring::MISMATCH_SCORE, allow_negative_numbers = true)]
    mismatch_score: i32,
    #[arg(long = "gap", default_value_t = hirschberg::scoring::GAP_SCORE, allow_negative_numbers = true)]
    gap_score: i32,
    /// Align the full inputs without cropping them to their best local region
    #[arg(long)]
    no_crop: bool,
}

/// Tracks the largest resident set size sampled so far.
struct MemoryProbe {
    sys: System,
    peak_bytes: u64,
}

impl MemoryProbe {
    fn new() -> Self {
        Self {
            sys: System::new(),
            peak_bytes: 0,
        }
    }

    fn sample(&mut self) {
        // Process memory is only refreshed when asked for explicitly.
        self.sys
            .refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
        let rss = get_current_pid()
            .ok()
            .and_then(|pid| self.sys.process(pid))
            .map(|p| p.memory())
            .unwrap_or(0);
        self.peak_bytes = self.peak_bytes.max(rss);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let x = io::read_sequence(&cli.first)
        .with_context(|| format!("reading first sequence from {}", cli.first.display()))?;
    let y = io::read_sequence(&cli.second)
        .with_context(|| format!("reading second sequence from {}", cli.second.display()))?;
    log::info!("loaded sequences of length {} and {}", x.len(), y.len());

    let scoring = Scoring::new(cli.match_score, cli.mismatch_score, cli.gap_score);
    let aligner = AlignerBuilder::new()
        .with_scoring(scoring)
        .with_local_crop(!cli.no_crop)
        .build();

    let mut probe = cli.memory.then(MemoryProbe::new);
    if let Some(p) = probe.as_mut() {
        p.sample();
    }

    let start = Instant::now();
    let region = aligner.crops().then(|| aligner.locate(&x[..], &y[..]));
    let (cx, cy) = match &region {
        Some(region) => region.crop(&x[..], &y[..]),
        None => (&x[..], &y[..]),
    };
    if let Some(p) = probe.as_mut() {
        p.sample();
    }
    if cli.console {
        println!("LocalToGlobal:");
        println!("{}", String::from_utf8_lossy(cx));
        println!("{}", String::from_utf8_lossy(cy));
        println!("-------");
    }

    let alignment = aligner.global().align(cx, cy);
    let elapsed = start.elapsed();
    if let Some(p) = probe.as_mut() {
        p.sample();
    }

    if cli.console {
        println!("Score: {}", alignment.score(&scoring));
        println!("Alignment result:");
        println!("{alignment}");
    }
    if cli.time {
        println!("Time taken: {:.3}ms", elapsed.as_secs_f64() * 1e3);
    }
    if let Some(p) = probe {
        println!("Memory taken: {}bytes", p.peak_bytes);
    }

    if let Some(path) = &cli.output {
        io::write_report_file(path, &alignment, &scoring)
            .with_context(|| format!("writing report to {}", path.display()))?;
        log::info!("report written to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => println!("Finished successfully"),
        Err(err) => {
            eprintln!("hirschberg: {err:#}");
            std::process::exit(1);
        }
    }
}
