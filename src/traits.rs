//! Core trait definitions shared by every aligner in the crate.
//!
//! Two seams are defined here:
//! - [`Symbol`]: what a sequence is made of. The algorithms only ever compare
//!   symbols for equality; the trait additionally names the gap marker that
//!   aligned outputs use and how to render a symbol for reports.
//! - [`GlobalAligner`]: anything that turns two sequences into an
//!   [`Alignment`] covering both inputs end to end.
//!
//! The local-cropping pipeline in [`crate::aligner`] is generic over
//! [`GlobalAligner`], so the linear-space engine and the full-table solver are
//! interchangeable behind it.

use crate::alignment::Alignment;

/// A single element of an input sequence.
///
/// Semantics:
/// - Equality is the only comparison used by the dynamic programs.
/// - [`Symbol::GAP`] is written into aligned outputs for insertions/deletions.
///   Input sequences are expected not to contain it.
pub trait Symbol: Copy + PartialEq {
    /// Placeholder emitted on the side of an alignment column that consumes
    /// nothing.
    const GAP: Self;

    /// Render the symbol for textual output.
    fn to_char(self) -> char;

    /// Returns true if this is the gap marker.
    #[inline]
    fn is_gap(self) -> bool {
        self == Self::GAP
    }
}

impl Symbol for u8 {
    const GAP: u8 = b'-';

    #[inline]
    fn to_char(self) -> char {
        self as char
    }
}

impl Symbol for char {
    const GAP: char = '-';

    #[inline]
    fn to_char(self) -> char {
        self
    }
}

/// A procedure producing an optimal global alignment of two sequences.
///
/// Requirements:
/// - The returned alignment must be *complete*: removing gap columns from
///   either side reproduces the corresponding input in order.
/// - Both aligned sides have equal length and no column is a gap on both
///   sides.
/// - The result is deterministic for a given input pair; implementations fix
///   their tie-break order so that equal-scoring alternatives always resolve
///   the same way.
pub trait GlobalAligner {
    /// Align `x` against `y` over their entire lengths.
    fn align<S: Symbol>(&self, x: &[S], y: &[S]) -> Alignment<S>;
}
