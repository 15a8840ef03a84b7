use std::collections::BTreeMap;

use tracing::trace;

use crate::detect::{sort_mwes, Detector};
use crate::errors::MweResult;
use crate::mwe::Mwe;
use crate::token::Token;

/// Keeps, for each start position, the longest MWE starting there, then
/// scans left to right dropping any survivor that shares a token with one
/// already kept.
///
/// Among equally long MWEs with the same start, the one whose following
/// tokens come earlier in the sentence wins.
#[derive(Debug, Clone)]
pub struct LongestMatchLeftToRight<D> {
    inner: D,
}

impl<D> LongestMatchLeftToRight<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

fn better(candidate: &Mwe, current: &Mwe) -> bool {
    candidate
        .len()
        .cmp(&current.len())
        .then_with(|| current.positions().cmp(&candidate.positions()))
        .then_with(|| current.entry().cmp(candidate.entry()))
        .is_gt()
}

impl<D: Detector> Detector for LongestMatchLeftToRight<D> {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        let candidates = self.inner.detect(sentence)?;
        let before = candidates.len();

        let mut by_start: BTreeMap<usize, Mwe> = BTreeMap::new();
        for candidate in candidates {
            match by_start.get(&candidate.start()) {
                Some(current) if !better(&candidate, current) => {}
                _ => {
                    by_start.insert(candidate.start(), candidate);
                }
            }
        }

        let mut kept: Vec<Mwe> = Vec::new();
        for candidate in by_start.into_values() {
            let clashes = candidate
                .positions()
                .iter()
                .any(|&position| kept.iter().any(|mwe| mwe.contains_position(position)));
            if !clashes {
                kept.push(candidate);
            }
        }
        sort_mwes(&mut kept);
        trace!(before, after = kept.len(), "longest match left to right");
        Ok(kept)
    }
}
