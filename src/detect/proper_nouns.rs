use std::collections::HashSet;
use std::sync::Arc;

use tracing::trace;

use crate::detect::{check_sentence, Detector};
use crate::entry::{Counts, Entry, RootEntry};
use crate::errors::MweResult;
use crate::mwe::{Member, Mwe};
use crate::pos::Pos;
use crate::token::Token;

/// Penn Treebank proper-noun tags.
const PROPER_NOUN_TAGS: &[&str] = &["NNP", "NNPS"];

/// Detects runs of two or more adjacent proper nouns, e.g. "New York".
///
/// The index is not consulted: each run yields a synthesized noun entry
/// built from the lowercased token forms, with zero counts.
#[derive(Debug, Clone)]
pub struct ProperNouns {
    tags: HashSet<String>,
}

impl Default for ProperNouns {
    fn default() -> Self {
        Self::with_tags(PROPER_NOUN_TAGS.iter().copied())
    }
}

impl ProperNouns {
    /// Detect runs of tokens carrying any of `tags`.
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    fn is_proper(&self, token: &Token) -> bool {
        token.tag().map_or(false, |tag| self.tags.contains(tag))
    }

    fn run_to_mwe(&self, sentence: &[Token], start: usize, end: usize) -> MweResult<Mwe> {
        let run = &sentence[start..end];
        let lemmas: Vec<String> = run.iter().map(|token| token.form().to_lowercase()).collect();
        let root = RootEntry::from_parts(lemmas.as_slice(), Pos::Noun, Counts::default())?;
        let members = run
            .iter()
            .enumerate()
            .map(|(part, token)| Member {
                position: start + part,
                token: token.clone(),
                part,
            })
            .collect();
        Mwe::new(Entry::Root(Arc::new(root)), members)
    }
}

impl Detector for ProperNouns {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        check_sentence(sentence)?;
        let mut mwes = Vec::new();
        let mut start = 0;
        while start < sentence.len() {
            if !self.is_proper(&sentence[start]) {
                start += 1;
                continue;
            }
            let mut end = start + 1;
            while end < sentence.len() && self.is_proper(&sentence[end]) {
                end += 1;
            }
            if end - start >= 2 {
                mwes.push(self.run_to_mwe(sentence, start, end)?);
            }
            start = end;
        }
        trace!(tokens = sentence.len(), found = mwes.len(), "proper noun detection");
        Ok(mwes)
    }
}
