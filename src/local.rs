//! Local Region Finder: crops two sequences to their best local alignment.
//!
//! A Smith–Waterman scan is run with two rolling rows, recording only where
//! the maximum cell is. The forward pass finds the inclusive *end* of the best
//! local region; a second pass over the reversed, end-truncated prefixes finds
//! its *start*.
//!
//! Scan order is load-bearing: the outer loop walks the second sequence, the
//! inner loop the first, and a cell only replaces the recorded maximum when it
//! is strictly greater. The first maximum in that order wins.

use std::ops::Range;

use crate::scoring::Scoring;
use crate::utils::reversed;

/// Result of a single linear-space local scan.
///
/// `first_end` / `second_end` are 0-based inclusive indices of the last
/// symbols in the best local alignment. When no cell scores above zero they
/// stay at `(0, 0)` with `score == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalHit {
    pub score: i32,
    pub first_end: usize,
    pub second_end: usize,
}

/// Half-open span of each input covered by the best local alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalRegion {
    pub first: Range<usize>,
    pub second: Range<usize>,
    pub score: i32,
}

impl LocalRegion {
    /// Sub-slices of `x` and `y` covered by this region.
    pub fn crop<'a, S>(&self, x: &'a [S], y: &'a [S]) -> (&'a [S], &'a [S]) {
        (&x[self.first.clone()], &y[self.second.clone()])
    }

    /// True when the region covers both inputs entirely.
    pub fn is_full(&self, first_len: usize, second_len: usize) -> bool {
        self.first == (0..first_len) && self.second == (0..second_len)
    }
}

/// One Smith–Waterman pass over `x` (inner) and `y` (outer) in O(|x|) space.
pub fn local_scan<S: PartialEq + Copy>(x: &[S], y: &[S], scoring: &Scoring) -> LocalHit {
    let m = x.len();
    let mut prev = vec![0i32; m + 1];
    let mut curr = vec![0i32; m + 1];
    let mut best = LocalHit {
        score: 0,
        first_end: 0,
        second_end: 0,
    };

    for (j, &cy) in y.iter().enumerate() {
        // curr[0] is never written and stays 0.
        for i in 1..=m {
            let diag = prev[i - 1] + scoring.pair(x[i - 1], cy);
            let left = curr[i - 1] + scoring.gap_score;
            let up = prev[i] + scoring.gap_score;
            let cell = diag.max(left).max(up).max(0);
            curr[i] = cell;

            if cell > best.score {
                best = LocalHit {
                    score: cell,
                    first_end: i - 1,
                    second_end: j,
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Locate the best-scoring local region of `x` and `y`.
///
/// If either input is empty, both ranges are empty and the score is 0.
pub fn find_local_region<S: PartialEq + Copy>(
    x: &[S],
    y: &[S],
    scoring: &Scoring,
) -> LocalRegion {
    if x.is_empty() || y.is_empty() {
        return LocalRegion {
            first: 0..0,
            second: 0..0,
            score: 0,
        };
    }

    let end = local_scan(x, y, scoring);

    let x_rev = reversed(&x[..=end.first_end]);
    let y_rev = reversed(&y[..=end.second_end]);
    let start = local_scan(&x_rev, &y_rev, scoring);

    debug_assert!(start.first_end <= end.first_end);
    debug_assert!(start.second_end <= end.second_end);

    LocalRegion {
        first: end.first_end - start.first_end..end.first_end + 1,
        second: end.second_end - start.second_end..end.second_end + 1,
        score: start.score,
    }
}
