use std::sync::Arc;

use tracing::trace;

use crate::builder::MweBuilder;
use crate::detect::{candidate_entries, check_sentence, dedup_and_sort, Detector};
use crate::entry::Entry;
use crate::errors::MweResult;
use crate::index::MweIndex;
use crate::mwe::Mwe;
use crate::token::Token;

/// Detects only continuous MWEs whose parts appear in dictionary order with
/// no interstitial tokens.
///
/// Each in-progress record may only take the next token into its first
/// empty slot; a record the token does not fit is dropped.
#[derive(Debug, Clone)]
pub struct Consecutive {
    index: Arc<MweIndex>,
}

impl Consecutive {
    pub fn new(index: Arc<MweIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &Arc<MweIndex> {
        &self.index
    }
}

impl Detector for Consecutive {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        check_sentence(sentence)?;

        let mut live: Vec<MweBuilder> = Vec::new();
        let mut done: Vec<MweBuilder> = Vec::new();

        for (position, token) in sentence.iter().enumerate() {
            let seeds = candidate_entries(&self.index, token)?
                .into_iter()
                .map(|root| MweBuilder::new(Entry::Root(root)));

            let mut next = Vec::with_capacity(live.len());
            for mut record in live.drain(..).chain(seeds) {
                if !record.fill_next(position, token) {
                    continue;
                }
                if record.is_full() {
                    done.push(record);
                } else {
                    next.push(record);
                }
            }
            live = next;
        }

        let mwes = done
            .iter()
            .map(|record| record.build(sentence))
            .collect::<MweResult<Vec<_>>>()?;
        let mwes = dedup_and_sort(mwes);
        trace!(tokens = sentence.len(), found = mwes.len(), "consecutive detection");
        Ok(mwes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ids, open_index, tok};

    #[test]
    fn finds_adjacent_parts() {
        let index = open_index("world_record_N 0,0,0,0,0");
        let sentence = vec![tok("the", "DT", &[]), tok("world", "NN", &[]), tok("record", "NN", &[])];
        let found = Consecutive::new(index).detect(&sentence).unwrap();
        assert_eq!(ids(&found), vec!["world_record_N[1:world 2:record]"]);
    }

    #[test]
    fn interstitial_token_breaks_match() {
        let index = open_index("world_record_N 0,0,0,0,0");
        let sentence = vec![tok("world", "NN", &[]), tok("speed", "NN", &[]), tok("record", "NN", &[])];
        assert!(Consecutive::new(index).detect(&sentence).unwrap().is_empty());
    }

    #[test]
    fn out_of_order_not_found() {
        let index = open_index("world_record_N 0,0,0,0,0");
        let sentence = vec![tok("record", "NN", &[]), tok("world", "NN", &[])];
        assert!(Consecutive::new(index).detect(&sentence).unwrap().is_empty());
    }

    #[test]
    fn restarts_after_false_start() {
        let index = open_index("world_record_N 0,0,0,0,0");
        let sentence = vec![tok("world", "NN", &[]), tok("world", "NN", &[]), tok("record", "NN", &[])];
        let found = Consecutive::new(index).detect(&sentence).unwrap();
        assert_eq!(ids(&found), vec!["world_record_N[1:world 2:record]"]);
    }

    #[test]
    fn overlapping_entries_both_reported() {
        let index = open_index("world_record_N 0,0,0,0,0\nrecord_player_N 0,0,0,0,0");
        let sentence = vec![tok("world", "NN", &[]), tok("record", "NN", &[]), tok("player", "NN", &[])];
        let found = Consecutive::new(index).detect(&sentence).unwrap();
        assert_eq!(
            ids(&found),
            vec!["world_record_N[0:world 1:record]", "record_player_N[1:record 2:player]"]
        );
    }

    #[test]
    fn stems_are_used() {
        let index = open_index("look_up_V 0,0,0,0,0");
        let sentence = vec![tok("looked", "VBD", &["look"]), tok("up", "RP", &[])];
        let found = Consecutive::new(index).detect(&sentence).unwrap();
        assert_eq!(ids(&found), vec!["look_up_V[0:looked 1:up]"]);
    }
}
