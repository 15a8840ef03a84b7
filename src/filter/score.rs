use crate::errors::{MweError, MweResult};
use crate::filter::MweFilter;
use crate::mwe::Mwe;
use crate::score::{Glossary, GlossOverlap, Length, MarkedRatio, MweScore};
use crate::token::Token;

/// Keeps MWEs whose score lies in `[min, max]`.
#[derive(Debug, Clone)]
pub struct ScoreFilter<S> {
    score: S,
    min: f64,
    max: f64,
}

impl<S: MweScore> ScoreFilter<S> {
    /// Fails when either bound is NaN or `min > max`.
    pub fn new(score: S, min: f64, max: f64) -> MweResult<Self> {
        if min.is_nan() || max.is_nan() {
            return Err(MweError::invalid_argument("range", "bounds must be numbers"));
        }
        if min > max {
            return Err(MweError::invalid_argument(
                "range",
                format!("minimum {} exceeds maximum {}", min, max),
            ));
        }
        Ok(Self { score, min, max })
    }

    pub fn at_least(score: S, min: f64) -> MweResult<Self> {
        Self::new(score, min, f64::INFINITY)
    }

    pub fn at_most(score: S, max: f64) -> MweResult<Self> {
        Self::new(score, f64::NEG_INFINITY, max)
    }

    pub fn score(&self) -> &S {
        &self.score
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl ScoreFilter<Length> {
    /// Keep MWEs of `min..=max` tokens.
    pub fn length(min: usize, max: usize) -> MweResult<Self> {
        Self::new(Length, min as f64, max as f64)
    }
}

impl ScoreFilter<MarkedRatio> {
    /// Keep MWEs whose root was marked as an MWE in at least `min` of its
    /// recorded occurrences.
    pub fn marked_ratio(min: f64) -> MweResult<Self> {
        Self::new(MarkedRatio, min, 1.0)
    }
}

impl<G: Glossary + Send + Sync> ScoreFilter<GlossOverlap<G>> {
    pub fn gloss_overlap(glossary: G, min: f64) -> MweResult<Self> {
        Self::new(GlossOverlap::new(glossary), min, 1.0)
    }
}

impl<S: MweScore> MweFilter for ScoreFilter<S> {
    fn keep(&self, mwe: &Mwe, sentence: &[Token]) -> bool {
        let score = self.score.score(mwe, sentence);
        score >= self.min && score <= self.max
    }

    fn name(&self) -> &'static str {
        self.score.name()
    }
}
