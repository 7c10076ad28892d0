//! Local cropping plus linear-space global alignment.
//!
//! This crate aligns two symbol sequences in three stages:
//! 1. A two-row Smith–Waterman scan, run forward and then on the reversed
//!    prefixes, crops both inputs to their best-scoring local region.
//! 2. Hirschberg's divide and conquer recursively halves the first sequence,
//!    using two linear-space Needleman–Wunsch score rows to find where the
//!    second sequence must be split.
//! 3. Once a side has at most one symbol, a full-table Needleman–Wunsch with
//!    traceback finishes the leaf.
//!
//! The outcome is one optimal global alignment of the cropped inputs, found
//! in O(|x|·|y|) time and O(|y|) working memory. All tie-breaks follow a fixed
//! scan order, so the same inputs always yield the same alignment.
//!
//! ## Quick start
//! ```
//! let aln = hirschberg::align(b"GATTACA", b"GCATGCU");
//! assert_eq!(aln.first_string(), "CA");
//! assert_eq!(aln.second_string(), "CA");
//! assert_eq!(aln.score(&hirschberg::Scoring::default()), 4);
//! ```
//!
//! ## Configuration
//! [`AlignerBuilder`] changes the scoring scheme, turns local cropping off, or
//! swaps the linear-space engine for the full-table solver.
//!
//! ```
//! use hirschberg::AlignerBuilder;
//!
//! let aligner = AlignerBuilder::new().with_local_crop(false).build();
//! let out = aligner.run(b"GATTACA", b"GCATGCU");
//! assert_eq!(out.score, 2);
//! ```

pub mod aligner;
pub mod alignment;
pub mod builder;
pub mod engine;
pub mod exact;
pub mod io;
pub mod local;
pub mod partition;
pub mod score_row;
pub mod scoring;
pub mod traits;
pub mod utils;

pub use crate::aligner::{Aligner, Outcome};
pub use crate::alignment::Alignment;
pub use crate::builder::AlignerBuilder;
pub use crate::engine::HirschbergEngine;
pub use crate::exact::NeedlemanWunsch;
pub use crate::local::{find_local_region, LocalRegion};
pub use crate::scoring::Scoring;
pub use crate::traits::{GlobalAligner, Symbol};

/// Align two sequences with the reference scoring (+2 / -1 / -2).
///
/// Both inputs are cropped to their best local region first; the result is an
/// optimal global alignment of the cropped pair.
pub fn align<S: Symbol>(x: &[S], y: &[S]) -> Alignment<S> {
    Aligner::default().align(x, y)
}
