//! Full-table Needleman–Wunsch with traceback.
//!
//! Quadratic in time and space. The recursive engine only calls it when one
//! side has at most one symbol, where the table is at most 2×(n+1). It is
//! also a complete [`GlobalAligner`] on its own and serves as the
//! brute-force reference the linear-space engine is checked against.

use crate::alignment::Alignment;
use crate::scoring::Scoring;
use crate::traits::{GlobalAligner, Symbol};

/// Exact quadratic-space global aligner.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeedlemanWunsch {
    scoring: Scoring,
}

impl NeedlemanWunsch {
    pub fn new(scoring: Scoring) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// Fill the complete score table for `x` (rows) vs `y` (columns).
    pub fn table<S: Symbol>(&self, x: &[S], y: &[S]) -> Vec<Vec<i32>> {
        let n = x.len();
        let m = y.len();
        let gap = self.scoring.gap_score;

        let mut f = vec![vec![0i32; m + 1]; n + 1];
        for (i, row) in f.iter_mut().enumerate() {
            row[0] = self.scoring.gaps(i);
        }
        for j in 0..=m {
            f[0][j] = self.scoring.gaps(j);
        }

        for i in 1..=n {
            for j in 1..=m {
                let mut best = f[i - 1][j - 1] + self.scoring.pair(x[i - 1], y[j - 1]);
                let up = f[i - 1][j] + gap;
                if up > best {
                    best = up;
                }
                let left = f[i][j - 1] + gap;
                if left > best {
                    best = left;
                }
                f[i][j] = best;
            }
        }
        f
    }

    /// Optimal global score of `x` vs `y`.
    pub fn score<S: Symbol>(&self, x: &[S], y: &[S]) -> i32 {
        self.table(x, y)[x.len()][y.len()]
    }

    /// Align and append the columns to `out`.
    pub(crate) fn align_into<S: Symbol>(&self, x: &[S], y: &[S], out: &mut Alignment<S>) {
        let f = self.table(x, y);
        let gap = self.scoring.gap_score;

        // Backtrack from (n,m) to (0,0); columns come out last-first.
        let mut i = x.len();
        let mut j = y.len();
        let mut rev = Alignment::with_capacity(i + j);

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && f[i][j] == f[i - 1][j - 1] + self.scoring.pair(x[i - 1], y[j - 1])
            {
                rev.push(x[i - 1], y[j - 1]);
                i -= 1;
                j -= 1;
            } else if i > 0 && f[i][j] == f[i - 1][j] + gap {
                rev.push(x[i - 1], S::GAP);
                i -= 1;
            } else {
                // Every cell is reproduced by one of its three predecessors,
                // and row 0 is reproduced from the left.
                debug_assert!(j > 0 && f[i][j] == f[i][j - 1] + gap);
                rev.push(S::GAP, y[j - 1]);
                j -= 1;
            }
        }

        out.first.extend(rev.first.into_iter().rev());
        out.second.extend(rev.second.into_iter().rev());
    }
}

impl GlobalAligner for NeedlemanWunsch {
    fn align<S: Symbol>(&self, x: &[S], y: &[S]) -> Alignment<S> {
        let mut out = Alignment::with_capacity(x.len() + y.len());
        self.align_into(x, y, &mut out);
        out
    }
}
