use crate::aligner::Aligner;
use crate::engine::HirschbergEngine;
use crate::exact::NeedlemanWunsch;
use crate::scoring::Scoring;

pub struct AlignerBuilder {
    scoring: Scoring,
    crop: bool,
}

impl Default for AlignerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AlignerBuilder {
    pub fn new() -> Self {
        Self {
            scoring: Scoring::default(),
            crop: true,
        }
    }
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }
    pub fn with_match_score(mut self, score: i32) -> Self {
        self.scoring.match_score = score;
        self
    }
    pub fn with_mismatch_score(mut self, score: i32) -> Self {
        self.scoring.mismatch_score = score;
        self
    }
    pub fn with_gap_score(mut self, score: i32) -> Self {
        self.scoring.gap_score = score;
        self
    }
    /// Toggle the local-region cropping stage (on by default).
    pub fn with_local_crop(mut self, crop: bool) -> Self {
        self.crop = crop;
        self
    }
    pub fn build(self) -> Aligner<HirschbergEngine> {
        Aligner::with_global(self.scoring, self.crop, HirschbergEngine::new(self.scoring))
    }
    /// Same pipeline, but with the quadratic-space full-table aligner.
    pub fn build_exact(self) -> Aligner<NeedlemanWunsch> {
        Aligner::with_global(self.scoring, self.crop, NeedlemanWunsch::new(self.scoring))
    }
}
