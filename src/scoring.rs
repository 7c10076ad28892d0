//! Linear scoring scheme shared by all dynamic programs.

/// Reward for aligning two equal symbols in the reference configuration.
pub const MATCH_SCORE: i32 = 2;
/// Score for aligning two different symbols in the reference configuration.
pub const MISMATCH_SCORE: i32 = -1;
/// Score for aligning a symbol against a gap in the reference configuration.
pub const GAP_SCORE: i32 = -2;

/// Match / mismatch / gap scores.
///
/// All three values are added to DP cells as-is, so penalties are negative
/// numbers. Any integers are accepted; the algorithms do not rely on signs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl Scoring {
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    /// Substitution score for a diagonal move over `a` and `b`.
    #[inline]
    pub fn pair<S: PartialEq>(&self, a: S, b: S) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Score of `len` consecutive gap columns.
    #[inline]
    pub fn gaps(&self, len: usize) -> i32 {
        self.gap_score * len as i32
    }
}

impl Default for Scoring {
    /// +2 match, -1 mismatch, -2 gap.
    fn default() -> Self {
        Self::new(MATCH_SCORE, MISMATCH_SCORE, GAP_SCORE)
    }
}
