//! Resolvers: detectors that remove overlapping results of an inner
//! detector so that no two remaining MWEs share a token.

mod by_score;
mod longest_match;

pub use by_score::ResolveByScore;
pub use longest_match::LongestMatchLeftToRight;
