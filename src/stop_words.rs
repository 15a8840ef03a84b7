//! Stop-word sets.
//!
//! The exhaustive strategy defers stop-word tokens until every content slot
//! of a candidate is settled. The default set is a fixed list of common
//! English function words; callers can supply their own.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::token::Token;

const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static DEFAULT_STOP_WORDS: Lazy<StopWords> = Lazy::new(|| StopWords::new(ENGLISH.iter().copied()));

/// A set of lowercase stop words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english().clone()
    }
}

impl StopWords {
    /// Build a stop-word set. Words are lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The default English stop-word set.
    pub fn english() -> &'static StopWords {
        &DEFAULT_STOP_WORDS
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// A token is a stop word when its form and every one of its stems are
    /// stop words. Such a token can only ever fill a stop-word part.
    pub fn is_stop_token(&self, token: &Token) -> bool {
        self.contains(token.form())
            && token
                .stems()
                .map_or(true, |stems| stems.iter().all(|stem| self.contains(stem)))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
