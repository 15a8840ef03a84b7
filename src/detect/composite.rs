use tracing::trace;

use crate::detect::{check_sentence, dedup_and_sort, Detector};
use crate::errors::MweResult;
use crate::mwe::Mwe;
use crate::token::Token;

/// Union of several detectors' results.
///
/// Results found by more than one detector on the same tokens with the same
/// POS are reported once. Which one is kept does not depend on detector
/// order: the assignment closest to dictionary order wins, then the
/// smaller entry id.
#[derive(Default)]
pub struct Composite {
    detectors: Vec<Box<dyn Detector>>,
}

impl Composite {
    pub fn new(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { detectors }
    }

    pub fn with<D: Detector + 'static>(mut self, detector: D) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl std::fmt::Debug for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composite")
            .field("detectors", &self.detectors.len())
            .finish()
    }
}

impl Detector for Composite {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        check_sentence(sentence)?;
        let mut all = Vec::new();
        for detector in &self.detectors {
            all.extend(detector.detect(sentence)?);
        }
        let found = all.len();
        let mwes = dedup_and_sort(all);
        trace!(found, kept = mwes.len(), "composite detection");
        Ok(mwes)
    }
}
