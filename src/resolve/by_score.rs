use tracing::trace;

use crate::detect::{sort_mwes, Detector};
use crate::errors::MweResult;
use crate::mwe::Mwe;
use crate::score::{overlap, MweScore};
use crate::token::Token;

/// Greedy interval scheduling over the inner detector's results.
///
/// Candidates are ranked by score (highest first), then by start position.
/// The best remaining candidate is kept and every candidate sharing a token
/// with it is discarded, until none remain. Remaining ties are broken by
/// entry id and token positions so the outcome does not depend on the
/// inner detector's ordering.
#[derive(Debug, Clone)]
pub struct ResolveByScore<D, S> {
    inner: D,
    score: S,
}

impl<D, S> ResolveByScore<D, S> {
    pub fn new(inner: D, score: S) -> Self {
        Self { inner, score }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    pub fn score(&self) -> &S {
        &self.score
    }
}

impl<D: Detector, S: MweScore> Detector for ResolveByScore<D, S> {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        let candidates = self.inner.detect(sentence)?;
        let before = candidates.len();

        let mut ranked: Vec<(f64, Mwe)> = candidates
            .into_iter()
            .map(|mwe| (self.score.score(&mwe, sentence), mwe))
            .collect();
        ranked.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .total_cmp(score_a)
                .then_with(|| a.start().cmp(&b.start()))
                .then_with(|| a.entry().cmp(b.entry()))
                .then_with(|| a.positions().cmp(&b.positions()))
        });

        let mut kept: Vec<Mwe> = Vec::new();
        for (_, candidate) in ranked {
            if kept.iter().all(|winner| overlap(winner, &candidate) == 0.0) {
                kept.push(candidate);
            }
        }
        sort_mwes(&mut kept);
        trace!(
            score = self.score.name(),
            before,
            after = kept.len(),
            "resolved by score"
        );
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{Consecutive, DetectorExt, Exhaustive};
    use crate::score::{Inverted, Length, StartIndex};
    use crate::test_utils::{ids, open_index, tok};

    fn sentence() -> Vec<Token> {
        vec![
            tok("world", "NN", &[]),
            tok("record", "NN", &[]),
            tok("player", "NN", &[]),
            tok("manual", "NN", &[]),
        ]
    }

    const INDEX: &str = "world_record_N 0,0,0,0,0\n\
                         record_player_N 0,0,0,0,0\n\
                         record_player_manual_N 0,0,0,0,0";

    #[test]
    fn longest_wins() {
        let found = Consecutive::new(open_index(INDEX))
            .resolve_by_score(Length)
            .detect(&sentence())
            .unwrap();
        assert_eq!(
            ids(&found),
            vec!["record_player_manual_N[1:record 2:player 3:manual]"]
        );
    }

    #[test]
    fn ties_go_to_the_earlier_start() {
        let index = open_index("world_record_N 0,0,0,0,0\nrecord_player_N 0,0,0,0,0");
        let found = Exhaustive::new(index)
            .resolve_by_score(Length)
            .detect(&sentence())
            .unwrap();
        assert_eq!(ids(&found), vec!["world_record_N[0:world 1:record]"]);
    }

    #[test]
    fn inverted_scores_prefer_small_values() {
        let found = Consecutive::new(open_index(INDEX))
            .resolve_by_score(Inverted(StartIndex))
            .detect(&sentence())
            .unwrap();
        assert_eq!(ids(&found), vec!["world_record_N[0:world 1:record]"]);
    }

    #[test]
    fn disjoint_results_all_survive() {
        let index = open_index("world_record_N 0,0,0,0,0\nplayer_manual_N 0,0,0,0,0");
        let found = Exhaustive::new(index)
            .resolve_by_score(Length)
            .detect(&sentence())
            .unwrap();
        assert_eq!(
            ids(&found),
            vec![
                "world_record_N[0:world 1:record]",
                "player_manual_N[2:player 3:manual]"
            ]
        );
    }
}
