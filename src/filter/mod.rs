//! Filters: detectors that drop results of an inner detector.
//!
//! A [`Filter`] pairs an inner [`Detector`] with an [`MweFilter`] predicate.
//! Predicates see the whole sentence so they can inspect tokens that are not
//! part of the MWE (e.g. punctuation inside its span).

mod fence;
mod inflection;
mod score;

use tracing::trace;

use crate::detect::Detector;
use crate::errors::MweResult;
use crate::mwe::Mwe;
use crate::token::Token;

pub use fence::FenceFilter;
pub use inflection::{Inflection, InflectionRule, RulePosition};
pub use score::ScoreFilter;

/// Predicate deciding whether a detected MWE survives.
pub trait MweFilter: Send + Sync {
    fn keep(&self, mwe: &Mwe, sentence: &[Token]) -> bool;

    /// Short name used in trace output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> MweFilter for F
where
    F: Fn(&Mwe, &[Token]) -> bool + Send + Sync,
{
    fn keep(&self, mwe: &Mwe, sentence: &[Token]) -> bool {
        self(mwe, sentence)
    }
}

/// Keeps the results of `inner` accepted by `filter`, in their original order.
#[derive(Debug, Clone)]
pub struct Filter<D, F> {
    inner: D,
    filter: F,
}

impl<D, F> Filter<D, F> {
    pub fn new(inner: D, filter: F) -> Self {
        Self { inner, filter }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }
}

impl<D: Detector, F: MweFilter> Detector for Filter<D, F> {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        let mut mwes = self.inner.detect(sentence)?;
        let before = mwes.len();
        mwes.retain(|mwe| self.filter.keep(mwe, sentence));
        trace!(
            filter = self.filter.name(),
            before,
            after = mwes.len(),
            "filtered"
        );
        Ok(mwes)
    }
}

/// Keeps MWEs whose tokens form one contiguous run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Continuity;

impl MweFilter for Continuity {
    fn keep(&self, mwe: &Mwe, _sentence: &[Token]) -> bool {
        mwe.is_continuous()
    }

    fn name(&self) -> &'static str {
        "continuity"
    }
}

/// Keeps MWEs whose tokens appear in the entry's part order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Order;

impl MweFilter for Order {
    fn keep(&self, mwe: &Mwe, _sentence: &[Token]) -> bool {
        mwe.is_in_order()
    }

    fn name(&self) -> &'static str {
        "order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{DetectorExt, Exhaustive};
    use crate::test_utils::{ids, open_index, tok};

    fn sentence() -> Vec<Token> {
        vec![
            tok("record", "NN", &[]),
            tok("world", "NN", &[]),
            tok("record", "NN", &[]),
            tok("of", "IN", &[]),
            tok("world", "NN", &[]),
        ]
    }

    #[test]
    fn continuity_and_order() {
        let index = open_index("world_record_N 0,0,0,0,0");
        let raw = Exhaustive::new(index.clone()).detect(&sentence()).unwrap();
        assert_eq!(raw.len(), 4);

        let continuous = Exhaustive::new(index.clone())
            .filtered(Continuity)
            .detect(&sentence())
            .unwrap();
        assert_eq!(
            ids(&continuous),
            vec![
                "world_record_N[0:record 1:world]",
                "world_record_N[1:world 2:record]"
            ]
        );

        let ordered = Exhaustive::new(index.clone())
            .filtered(Continuity)
            .filtered(Order)
            .detect(&sentence())
            .unwrap();
        assert_eq!(ids(&ordered), vec!["world_record_N[1:world 2:record]"]);
    }

    #[test]
    fn closures_are_filters() {
        let index = open_index("world_record_N 0,0,0,0,0");
        let found = Exhaustive::new(index)
            .filtered(|mwe: &Mwe, _: &[Token]| mwe.start() >= 2)
            .detect(&sentence())
            .unwrap();
        assert_eq!(ids(&found), vec!["world_record_N[2:record 4:world]"]);
    }
}
