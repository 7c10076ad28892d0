//! The full alignment pipeline: local cropping, then global alignment.

use crate::alignment::Alignment;
use crate::engine::HirschbergEngine;
use crate::local::{find_local_region, LocalRegion};
use crate::scoring::Scoring;
use crate::traits::{GlobalAligner, Symbol};

/// What one pipeline run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<S> {
    /// Global alignment of the (possibly cropped) inputs.
    pub alignment: Alignment<S>,
    /// Region the inputs were cropped to; `None` when cropping is disabled.
    pub region: Option<LocalRegion>,
    /// Score of `alignment` under the pipeline's scoring scheme.
    pub score: i32,
}

/// Crops two sequences to their best local region and aligns the result
/// globally with `G`.
///
/// Build one with [`AlignerBuilder`](crate::AlignerBuilder) or take the
/// reference configuration from [`Aligner::default`].
#[derive(Clone, Debug)]
pub struct Aligner<G = HirschbergEngine> {
    scoring: Scoring,
    crop: bool,
    global: G,
}

impl Default for Aligner<HirschbergEngine> {
    fn default() -> Self {
        let scoring = Scoring::default();
        Self::with_global(scoring, true, HirschbergEngine::new(scoring))
    }
}

impl<G: GlobalAligner> Aligner<G> {
    /// Assemble a pipeline from its parts.
    ///
    /// `global` should score with the same `scoring`; the builder guarantees
    /// this for the aligners it constructs.
    pub fn with_global(scoring: Scoring, crop: bool, global: G) -> Self {
        Self {
            scoring,
            crop,
            global,
        }
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    pub fn crops(&self) -> bool {
        self.crop
    }

    pub fn global(&self) -> &G {
        &self.global
    }

    /// Locate the local region `run` would crop to.
    pub fn locate<S: Symbol>(&self, x: &[S], y: &[S]) -> LocalRegion {
        find_local_region(x, y, &self.scoring)
    }

    /// Run the pipeline on `x` and `y`.
    pub fn run<S: Symbol>(&self, x: &[S], y: &[S]) -> Outcome<S> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("align", x_len = x.len(), y_len = y.len(), crop = self.crop);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (region, x, y) = if self.crop {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("local_crop");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let region = self.locate(x, y);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                first = ?region.first,
                second = ?region.second,
                score = region.score,
                "cropped to local region"
            );
            let (cx, cy) = region.crop(x, y);
            (Some(region), cx, cy)
        } else {
            (None, x, y)
        };

        let alignment = {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("global_align", x_len = x.len(), y_len = y.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.global.align(x, y)
        };
        let score = alignment.score(&self.scoring);

        #[cfg(feature = "tracing")]
        tracing::debug!(score, columns = alignment.len(), "alignment finished");

        Outcome {
            alignment,
            region,
            score,
        }
    }

    /// Run the pipeline and return only the aligned pair.
    pub fn align<S: Symbol>(&self, x: &[S], y: &[S]) -> Alignment<S> {
        self.run(x, y).alignment
    }
}
