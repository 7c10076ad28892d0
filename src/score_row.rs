//! Linear-space Needleman–Wunsch score propagation.

use crate::scoring::Scoring;

/// Compute the last row of the Needleman–Wunsch table for `x` vs `y`.
///
/// Returns a vector `row` of length |y|+1, where `row[j]` is the optimal
/// global score of `x` against `y[0..j]`. Only two rows are live at a time.
pub fn last_row<S: PartialEq + Copy>(x: &[S], y: &[S], scoring: &Scoring) -> Vec<i32> {
    let n = y.len();
    let gap = scoring.gap_score;

    // row 0
    let mut prev: Vec<i32> = (0..=n).map(|j| scoring.gaps(j)).collect();
    let mut curr = vec![0i32; n + 1];

    for &cx in x {
        curr[0] = prev[0] + gap;
        for j in 1..=n {
            let diag = prev[j - 1] + scoring.pair(cx, y[j - 1]);
            let left = curr[j - 1] + gap;
            let up = prev[j] + gap;
            curr[j] = diag.max(left).max(up);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_row_small_cases() {
        let s = Scoring::default();
        assert_eq!(last_row(b"", b"", &s), vec![0]);
        assert_eq!(last_row(b"A", b"", &s), vec![-2]);
        assert_eq!(last_row(b"", b"AC", &s), vec![0, -2, -4]);
        assert_eq!(last_row(b"A", b"A", &s), vec![-2, 2]);
        assert_eq!(last_row(b"A", b"C", &s), vec![-2, -1]);
    }

    #[test]
    fn last_row_matches_full_table_corner() {
        let s = Scoring::default();
        // GATTACA vs GCATGCU: one optimal alignment is
        //   G-ATTACA
        //   GCA-TGCU
        // scoring 4*2 - 2*2 - 2*1 = 2.
        let row = last_row(b"GATTACA", b"GCATGCU", &s);
        assert_eq!(row.len(), 8);
        assert_eq!(row[7], 2);
        assert_eq!(row[0], -14);
    }
}
