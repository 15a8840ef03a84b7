use std::collections::HashSet;

use crate::filter::MweFilter;
use crate::mwe::Mwe;
use crate::token::Token;

/// Sentence punctuation and brackets in Penn Treebank tags.
const FENCE_TAGS: &[&str] = &[".", ",", ":", "(", ")", "`", "''", "-LRB-", "-RRB-"];

/// Drops MWEs that span across a fence: a non-member token between their
/// first and last member whose tag is one of the fence tags.
#[derive(Debug, Clone)]
pub struct FenceFilter {
    tags: HashSet<String>,
}

impl Default for FenceFilter {
    fn default() -> Self {
        Self::with_tags(FENCE_TAGS.iter().copied())
    }
}

impl FenceFilter {
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    fn is_fence(&self, token: &Token) -> bool {
        token.tag().map_or(false, |tag| self.tags.contains(tag))
    }
}

impl MweFilter for FenceFilter {
    fn keep(&self, mwe: &Mwe, sentence: &[Token]) -> bool {
        let (start, end) = (mwe.start(), mwe.end());
        !sentence
            .iter()
            .enumerate()
            .take(end + 1)
            .skip(start)
            .any(|(position, token)| !mwe.contains_position(position) && self.is_fence(token))
    }

    fn name(&self) -> &'static str {
        "fence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{Detector, DetectorExt, Exhaustive};
    use crate::test_utils::{ids, open_index, tok};

    #[test]
    fn punctuation_inside_span_blocks() {
        let index = open_index("look_up_V 0,0,0,0,0");
        let sentence = vec![
            tok("look", "VB", &[]),
            tok(",", ",", &[]),
            tok("up", "RP", &[]),
            tok("look", "VB", &[]),
            tok("it", "PRP", &[]),
            tok("up", "RP", &[]),
        ];
        let found = Exhaustive::new(index)
            .filtered(FenceFilter::default())
            .detect(&sentence)
            .unwrap();
        assert_eq!(
            ids(&found),
            vec!["look_up_V[2:up 3:look]", "look_up_V[3:look 5:up]"]
        );
    }

    #[test]
    fn custom_fences() {
        let index = open_index("look_up_V 0,0,0,0,0");
        let sentence = vec![tok("look", "VB", &[]), tok("it", "PRP", &[]), tok("up", "RP", &[])];
        let fenced = Exhaustive::new(index)
            .filtered(FenceFilter::with_tags(["PRP"]))
            .detect(&sentence)
            .unwrap();
        assert!(fenced.is_empty());
    }
}
