//! Recursive linear-space alignment engine (Hirschberg's divide and conquer).
//!
//! Each step halves the first sequence at `xmid = len/2`, scores the top half
//! forward and the bottom half backward against the whole second sequence
//! with [`last_row`], and lets [`partition`] pick the column `ymid` where an
//! optimal path crosses row `xmid`. Both sub-rectangles are then solved
//! independently and their columns concatenated in order.
//!
//! Base cases:
//! - one side empty: the other side against a run of gaps;
//! - one side of length 1: the exact full-table solver.
//!
//! Columns are appended into a single output buffer in left-to-right order,
//! so no intermediate alignments are allocated per level.

use crate::alignment::Alignment;
use crate::exact::NeedlemanWunsch;
use crate::partition::partition;
use crate::score_row::last_row;
use crate::scoring::Scoring;
use crate::traits::{GlobalAligner, Symbol};
use crate::utils::{midpoint, reversed};

/// Linear-space global aligner.
///
/// Typical usage:
/// ```
/// use hirschberg::{GlobalAligner, HirschbergEngine, Scoring};
///
/// let engine = HirschbergEngine::new(Scoring::default());
/// let aln = engine.align(b"GATTACA", b"GCATGCU");
/// assert_eq!(aln.first.len(), aln.second.len());
/// assert_eq!(aln.score(engine.scoring()), 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HirschbergEngine {
    scoring: Scoring,
}

impl HirschbergEngine {
    pub fn new(scoring: Scoring) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// Align `x` against `y` and return `(score, alignment)`.
    ///
    /// The score is that of the returned alignment under this engine's
    /// scoring scheme, which equals the optimal global score.
    pub fn run<S: Symbol>(&self, x: &[S], y: &[S]) -> (i32, Alignment<S>) {
        let alignment = self.align(x, y);
        (alignment.score(&self.scoring), alignment)
    }

    /// Solve `x` vs `y` and append the columns to `out`.
    fn reconstruct<S: Symbol>(&self, x: &[S], y: &[S], depth: usize, out: &mut Alignment<S>) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("reconstruct", depth, x_len = x.len(), y_len = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match (x.len(), y.len()) {
            (0, _) => {
                for &b in y {
                    out.push(S::GAP, b);
                }
            }
            (_, 0) => {
                for &a in x {
                    out.push(a, S::GAP);
                }
            }
            (1, _) | (_, 1) => {
                NeedlemanWunsch::new(self.scoring).align_into(x, y, out);
            }
            (n, _) => {
                let xmid = midpoint(n);
                let (x_top, x_bottom) = x.split_at(xmid);

                let forward = last_row(x_top, y, &self.scoring);
                let backward = last_row(&reversed(x_bottom), &reversed(y), &self.scoring);
                let ymid = partition(&forward, &backward);

                #[cfg(feature = "tracing")]
                tracing::trace!(xmid, ymid, "split");

                let (y_left, y_right) = y.split_at(ymid);
                self.reconstruct(x_top, y_left, depth + 1, out);
                self.reconstruct(x_bottom, y_right, depth + 1, out);
            }
        }
    }
}

impl GlobalAligner for HirschbergEngine {
    fn align<S: Symbol>(&self, x: &[S], y: &[S]) -> Alignment<S> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("hirschberg", x_len = x.len(), y_len = y.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut out = Alignment::with_capacity(x.len() + y.len());
        self.reconstruct(x, y, 0, &mut out);
        out
    }
}
