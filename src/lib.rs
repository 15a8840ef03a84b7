#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Multi-word expression (MWE) detection for layered-nlp.
//!
//! Given a dictionary of known expressions ("world record", "look up",
//! "face to face") and a sentence of tagged, stemmed tokens, this crate
//! finds every occurrence of a known expression, including ones whose
//! parts are separated or out of order, and narrows the candidates down to
//! a non-overlapping result set.
//!
//! ## Dictionary
//!
//! - [`MweIndex`] - Lookup from word form to the entries using it
//! - [`RootEntry`] / [`InflectedEntry`] - Entry descriptions and counts
//! - [`Entry`] - Handle to either kind of entry
//!
//! ## Detection Strategies
//!
//! - [`Consecutive`] - Adjacent, in-order parts only
//! - [`Exhaustive`] - Also discontinuous and out-of-order matches
//! - [`ProperNouns`] - Runs of proper-noun tokens
//! - [`Composite`] - Union of several detectors
//!
//! ## Filters and Resolvers
//!
//! Every stage wraps another [`Detector`] (see [`DetectorExt`]):
//!
//! - [`Continuity`], [`Order`], [`Inflection`], [`FenceFilter`],
//!   [`ScoreFilter`] - Drop candidates failing a predicate
//! - [`ResolveByScore`], [`LongestMatchLeftToRight`] - Remove overlaps
//!
//! [`PipelineConfig`] builds a whole chain from presets or TOML.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use layered_mwe::{Detector, DetectorExt, Exhaustive, Length, MweIndex, Token};
//!
//! let index = Arc::new(MweIndex::from_text(
//!     "world_record_N 5,0,3,1,0\nlook_up_V 4,2,0,0,1",
//! ));
//! index.open().unwrap();
//!
//! let sentence = vec![
//!     Token::tagged("She", "PRP").unwrap(),
//!     Token::tagged("looked", "VBD").unwrap().with_stems(["look"]),
//!     Token::tagged("the", "DT").unwrap(),
//!     Token::tagged("record", "NN").unwrap(),
//!     Token::tagged("up", "RP").unwrap(),
//! ];
//!
//! let detector = Exhaustive::new(index).resolve_by_score(Length);
//! let found = detector.detect(&sentence).unwrap();
//! assert_eq!(found[0].to_string(), "look_up_V[1:looked 4:up]");
//! ```

mod builder;
mod detect;
mod display;
mod entry;
mod errors;
mod filter;
mod index;
mod mwe;
mod pos;
mod resolve;
mod score;
mod stop_words;
mod token;

// Pipeline presets and configuration
pub mod pipeline;

pub use builder::MweBuilder;
pub use detect::{Composite, Consecutive, Detector, DetectorExt, Exhaustive, ProperNouns};
pub use display::MweDisplay;
pub use entry::{
    Count, Counts, Entry, EntryId, InflectedEntry, MweDescription, Part, RootEntry, COUNT_FIELDS,
};
pub use errors::{MweError, MweResult};
pub use filter::{
    Continuity, FenceFilter, Filter, Inflection, InflectionRule, MweFilter, Order, RulePosition,
    ScoreFilter,
};
pub use index::{parse_index, IndexSource, MweIndex};
pub use mwe::{Member, Mwe};
pub use pipeline::{PipelineConfig, ScoreKind, Stage, Strategy};
pub use pos::Pos;
pub use resolve::{LongestMatchLeftToRight, ResolveByScore};
pub use score::{
    overlap, GapVariance, GlossOverlap, Glossary, Inverted, Length, MarkedRatio, MweScore,
    StartIndex,
};
pub use stop_words::StopWords;
pub use token::Token;

#[cfg(test)]
mod test_utils;
