//! The aligned pair returned by every [`GlobalAligner`](crate::GlobalAligner).

use std::fmt;

use crate::scoring::Scoring;
use crate::traits::Symbol;

/// Two equal-length aligned sequences with [`Symbol::GAP`] markers.
///
/// Column `k` pairs `first[k]` with `second[k]`; at most one of them is a gap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment<S> {
    pub first: Vec<S>,
    pub second: Vec<S>,
}

/// Classification of a single alignment column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Match,
    Mismatch,
    Gap,
}

impl Column {
    /// Marker used in the match line.
    pub fn marker(self) -> char {
        match self {
            Column::Match => '|',
            Column::Mismatch => 'x',
            Column::Gap => ' ',
        }
    }
}

impl<S: Symbol> Alignment<S> {
    pub fn new(first: Vec<S>, second: Vec<S>) -> Self {
        debug_assert_eq!(first.len(), second.len());
        Self { first, second }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            first: Vec::with_capacity(capacity),
            second: Vec::with_capacity(capacity),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Append one column.
    #[inline]
    pub fn push(&mut self, a: S, b: S) {
        self.first.push(a);
        self.second.push(b);
    }

    /// Append all columns of `other` after the columns of `self`.
    pub fn extend(&mut self, other: Alignment<S>) {
        self.first.extend(other.first);
        self.second.extend(other.second);
    }

    /// Iterate over the columns as `(first, second)` pairs.
    pub fn columns(&self) -> impl Iterator<Item = (S, S)> + '_ {
        self.first.iter().copied().zip(self.second.iter().copied())
    }

    pub fn column_kinds(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns().map(|(a, b)| {
            if a.is_gap() || b.is_gap() {
                Column::Gap
            } else if a == b {
                Column::Match
            } else {
                Column::Mismatch
            }
        })
    }

    /// Sum of per-column scores under `scoring`.
    pub fn score(&self, scoring: &Scoring) -> i32 {
        self.column_kinds()
            .map(|c| match c {
                Column::Match => scoring.match_score,
                Column::Mismatch => scoring.mismatch_score,
                Column::Gap => scoring.gap_score,
            })
            .sum()
    }

    /// `|` for matches, `x` for mismatches, a space for gap columns.
    pub fn match_line(&self) -> String {
        self.column_kinds().map(Column::marker).collect()
    }

    /// The first input, recovered by dropping gap markers.
    pub fn ungapped_first(&self) -> Vec<S> {
        self.first.iter().copied().filter(|s| !s.is_gap()).collect()
    }

    /// The second input, recovered by dropping gap markers.
    pub fn ungapped_second(&self) -> Vec<S> {
        self.second.iter().copied().filter(|s| !s.is_gap()).collect()
    }

    pub fn first_string(&self) -> String {
        self.first.iter().map(|&s| s.to_char()).collect()
    }

    pub fn second_string(&self) -> String {
        self.second.iter().map(|&s| s.to_char()).collect()
    }
}

impl<S: Symbol> fmt::Display for Alignment<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.first_string())?;
        writeln!(f, "{}", self.match_line())?;
        write!(f, "{}", self.second_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aln(a: &str, b: &str) -> Alignment<u8> {
        Alignment::new(a.as_bytes().to_vec(), b.as_bytes().to_vec())
    }

    #[test]
    fn score_and_markers() {
        let a = aln("G-ATTACA", "GCA-TGCU");
        assert_eq!(a.match_line(), "| | |x|x");
        let s = Scoring::default();
        assert_eq!(a.score(&s), 4 * 2 + 2 * -2 + 2 * -1);
    }

    #[test]
    fn ungapped_recovers_inputs() {
        let a = aln("AC-GT", "A-TGT");
        assert_eq!(a.ungapped_first(), b"ACGT".to_vec());
        assert_eq!(a.ungapped_second(), b"ATGT".to_vec());
    }

    #[test]
    fn display_has_three_lines() {
        let a = aln("AC", "AG");
        assert_eq!(a.to_string(), "AC\n|x\nAG");
    }

    #[test]
    fn extend_concatenates_in_order() {
        let mut a = aln("A-", "AC");
        a.extend(aln("G", "-"));
        assert_eq!(a.first_string(), "A-G");
        assert_eq!(a.second_string(), "AC-");
        assert_eq!(a.len(), 3);
    }
}
