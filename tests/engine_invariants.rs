use hirschberg::{align, GlobalAligner, HirschbergEngine, Scoring, Symbol};
use proptest::prelude::*;

proptest! {
    #[test]
    fn outputs_have_equal_length_and_no_double_gaps(
        a in "[ACGT]{1,40}",
        b in "[ACGT]{1,40}",
    ) {
        let aln = align(a.as_bytes(), b.as_bytes());
        prop_assert_eq!(aln.first.len(), aln.second.len());
        prop_assert!(aln.columns().all(|(x, y)| !(x.is_gap() && y.is_gap())));
        prop_assert_eq!(aln.match_line().chars().count(), aln.len());
    }

    #[test]
    fn removing_gaps_restores_inputs(a in "[ACGT]{0,40}", b in "[ACGT]{0,40}") {
        let aln = HirschbergEngine::new(Scoring::default()).align(a.as_bytes(), b.as_bytes());
        prop_assert_eq!(aln.ungapped_first(), a.as_bytes().to_vec());
        prop_assert_eq!(aln.ungapped_second(), b.as_bytes().to_vec());
    }

    #[test]
    fn deterministic_across_runs(a in "[ACGT]{0,20}", b in "[ACGT]{0,20}") {
        let engine = HirschbergEngine::new(Scoring::default());
        prop_assert_eq!(engine.align(a.as_bytes(), b.as_bytes()), engine.align(a.as_bytes(), b.as_bytes()));
    }
}

#[test]
fn appending_identical_symbol_does_not_reduce_score() {
    let scoring = Scoring::default();
    let engine = HirschbergEngine::new(scoring);
    let (base, _) = engine.run(b"GATTACA", b"GCATGCU");
    let (extended, _) = engine.run(b"GATTACAA", b"GCATGCUA");
    assert!(extended >= base + scoring.match_score);
}

#[test]
fn one_symbol_against_long_sequence() {
    let engine = HirschbergEngine::new(Scoring::default());
    let aln = engine.align(b"G", b"AAAAGAAAA");
    assert_eq!(aln.len(), 9);
    assert_eq!(aln.first_string(), "----G----");
    assert_eq!(aln.score(engine.scoring()), 2 - 16);
}
