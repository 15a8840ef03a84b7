//! Detection strategies and the common detector contract.
//!
//! Every strategy, filter and resolver implements [`Detector`]. Filters and
//! resolvers wrap exactly one inner detector, so a pipeline is a chain of
//! wrappers around a strategy:
//!
//! ```
//! use std::sync::Arc;
//! use layered_mwe::{Continuity, Detector, DetectorExt, Exhaustive, Length, MweIndex, Token};
//!
//! let index = Arc::new(MweIndex::from_text("world_record_N 5,0,3,1,0"));
//! index.open().unwrap();
//!
//! let detector = Exhaustive::new(index)
//!     .filtered(Continuity)
//!     .resolve_by_score(Length);
//!
//! let sentence = vec![
//!     Token::tagged("the", "DT").unwrap(),
//!     Token::tagged("world", "NN").unwrap(),
//!     Token::tagged("record", "NN").unwrap(),
//! ];
//! let found = detector.detect(&sentence).unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].id().to_string(), "world_record_N");
//! ```

mod composite;
mod consecutive;
mod exhaustive;
mod proper_nouns;

use std::collections::HashSet;
use std::sync::Arc;

use crate::entry::{MweDescription, RootEntry};
use crate::errors::{MweError, MweResult};
use crate::filter::{Filter, MweFilter};
use crate::index::MweIndex;
use crate::mwe::Mwe;
use crate::resolve::{LongestMatchLeftToRight, ResolveByScore};
use crate::score::MweScore;
use crate::token::Token;

pub use composite::Composite;
pub use consecutive::Consecutive;
pub use exhaustive::Exhaustive;
pub use proper_nouns::ProperNouns;

/// Finds MWEs in a tagged sentence.
///
/// Implementations return results ordered by start position, never fail on
/// a sentence without MWEs, and fail with
/// [`MweError::InvalidArgument`] on an empty sentence. Detection is a pure
/// function of the sentence and the index.
pub trait Detector: Send + Sync {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>>;
}

impl<D: Detector + ?Sized> Detector for Box<D> {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        (**self).detect(sentence)
    }
}

impl<D: Detector + ?Sized> Detector for Arc<D> {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        (**self).detect(sentence)
    }
}

impl<D: Detector + ?Sized> Detector for &D {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        (**self).detect(sentence)
    }
}

/// Builder-style composition of detectors.
pub trait DetectorExt: Detector + Sized {
    /// Drop results failing `filter`.
    fn filtered<F: MweFilter>(self, filter: F) -> Filter<Self, F> {
        Filter::new(self, filter)
    }

    /// Greedily keep the best-scoring results, discarding overlaps.
    fn resolve_by_score<S: MweScore>(self, score: S) -> ResolveByScore<Self, S> {
        ResolveByScore::new(self, score)
    }

    /// Keep the longest result starting at each position, left to right.
    fn longest_match(self) -> LongestMatchLeftToRight<Self> {
        LongestMatchLeftToRight::new(self)
    }

    fn boxed(self) -> Box<dyn Detector>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<D: Detector> DetectorExt for D {}

pub(crate) fn check_sentence(sentence: &[Token]) -> MweResult<()> {
    if sentence.is_empty() {
        return Err(MweError::invalid_argument(
            "sentence",
            "must contain at least one token",
        ));
    }
    Ok(())
}

/// Root entries any of the token's lookup keys participates in, sorted by
/// id and deduplicated.
pub(crate) fn candidate_entries(index: &MweIndex, token: &Token) -> MweResult<Vec<Arc<RootEntry>>> {
    let mut entries: Vec<Arc<RootEntry>> = Vec::new();
    for key in token.lookup_keys() {
        entries.extend(index.get(&key)?);
    }
    entries.sort_by(|a, b| (a.form(), a.pos()).cmp(&(b.form(), b.pos())));
    entries.dedup_by(|a, b| Arc::ptr_eq(a, b));
    Ok(entries)
}

/// Order results by start position, then POS, then the full position list,
/// then part order, then entry. Among results on the same tokens, the
/// assignment closest to dictionary order comes first whichever entry it
/// belongs to.
pub(crate) fn sort_mwes(mwes: &mut [Mwe]) {
    fn part_order(mwe: &Mwe) -> Vec<usize> {
        mwe.members().iter().map(|member| member.part).collect()
    }
    mwes.sort_by(|a, b| {
        a.start()
            .cmp(&b.start())
            .then_with(|| a.pos().cmp(&b.pos()))
            .then_with(|| a.positions().cmp(&b.positions()))
            .then_with(|| part_order(a).cmp(&part_order(b)))
            .then_with(|| a.entry().cmp(b.entry()))
    });
}

/// Sort, then drop results whose token positions and POS repeat an earlier
/// one, so the survivor is the first in [`sort_mwes`] order.
pub(crate) fn dedup_and_sort(mut mwes: Vec<Mwe>) -> Vec<Mwe> {
    sort_mwes(&mut mwes);
    let mut seen = HashSet::new();
    mwes.retain(|mwe| seen.insert(mwe.key()));
    mwes
}
