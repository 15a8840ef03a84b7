//! Scoring functions over detected MWEs.
//!
//! Scores are pure: they depend only on the MWE, the sentence it was found
//! in, and for [`GlossOverlap`] a read-only glossary. Higher is better
//! wherever a resolver or threshold filter consumes them; wrap a score in
//! [`Inverted`] to prefer low values.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::entry::{EntryId, MweDescription};
use crate::mwe::Mwe;
use crate::stop_words::StopWords;
use crate::token::Token;

/// A numeric score for a detected MWE.
pub trait MweScore: Send + Sync {
    fn score(&self, mwe: &Mwe, sentence: &[Token]) -> f64;

    /// Short name used in trace output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> MweScore for F
where
    F: Fn(&Mwe, &[Token]) -> f64 + Send + Sync,
{
    fn score(&self, mwe: &Mwe, sentence: &[Token]) -> f64 {
        self(mwe, sentence)
    }
}

/// Number of tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Length;

impl MweScore for Length {
    fn score(&self, mwe: &Mwe, _sentence: &[Token]) -> f64 {
        mwe.len() as f64
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

/// Position of the first token.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartIndex;

impl MweScore for StartIndex {
    fn score(&self, mwe: &Mwe, _sentence: &[Token]) -> f64 {
        mwe.start() as f64
    }

    fn name(&self) -> &'static str {
        "start-index"
    }
}

/// Population variance of the distances between consecutive member
/// positions. Zero for any evenly spaced MWE, including continuous ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapVariance;

impl MweScore for GapVariance {
    fn score(&self, mwe: &Mwe, _sentence: &[Token]) -> f64 {
        let gaps: Vec<f64> = mwe
            .members()
            .windows(2)
            .map(|w| (w[1].position - w[0].position) as f64)
            .collect();
        if gaps.is_empty() {
            return 0.0;
        }
        let n = gaps.len() as f64;
        let mean = gaps.iter().sum::<f64>() / n;
        gaps.iter().map(|gap| (gap - mean).powi(2)).sum::<f64>() / n
    }

    fn name(&self) -> &'static str {
        "gap-variance"
    }
}

/// Fraction of the root entry's recorded occurrences that were marked as an
/// MWE.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkedRatio;

impl MweScore for MarkedRatio {
    fn score(&self, mwe: &Mwe, _sentence: &[Token]) -> f64 {
        mwe.entry().root().marked_ratio()
    }

    fn name(&self) -> &'static str {
        "marked-ratio"
    }
}

/// Negates another score.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inverted<S>(pub S);

impl<S: MweScore> MweScore for Inverted<S> {
    fn score(&self, mwe: &Mwe, sentence: &[Token]) -> f64 {
        -self.0.score(mwe, sentence)
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }
}

/// Source of definitions for entries.
pub trait Glossary {
    fn gloss(&self, id: &EntryId) -> Option<&str>;
}

impl Glossary for HashMap<EntryId, String> {
    fn gloss(&self, id: &EntryId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl Glossary for BTreeMap<EntryId, String> {
    fn gloss(&self, id: &EntryId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

/// Lexical overlap between an entry's gloss and the rest of the sentence.
///
/// The score is the fraction of distinct content words of the gloss found
/// among the forms and stems of the sentence's non-member tokens. An
/// inflected entry without its own gloss falls back to its root's. MWEs
/// without a gloss score zero.
#[derive(Debug, Clone)]
pub struct GlossOverlap<G> {
    glossary: G,
}

impl<G: Glossary> GlossOverlap<G> {
    pub fn new(glossary: G) -> Self {
        Self { glossary }
    }

    pub fn glossary(&self) -> &G {
        &self.glossary
    }

    fn gloss_of(&self, mwe: &Mwe) -> Option<&str> {
        self.glossary
            .gloss(&mwe.id())
            .or_else(|| self.glossary.gloss(&mwe.entry().root().id()))
    }
}

impl<G: Glossary + Send + Sync> MweScore for GlossOverlap<G> {
    fn score(&self, mwe: &Mwe, sentence: &[Token]) -> f64 {
        let gloss = match self.gloss_of(mwe) {
            Some(gloss) => gloss,
            None => return 0.0,
        };
        let stop_words = StopWords::english();
        let words: HashSet<String> = gloss
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .filter(|word| !stop_words.contains(word))
            .collect();
        if words.is_empty() {
            return 0.0;
        }

        let mut context: HashSet<String> = HashSet::new();
        for (position, token) in sentence.iter().enumerate() {
            if mwe.contains_position(position) {
                continue;
            }
            context.insert(token.form().to_lowercase());
            context.extend(token.stems().into_iter().flatten().cloned());
        }
        let shared = words.iter().filter(|word| context.contains(*word)).count();
        shared as f64 / words.len() as f64
    }

    fn name(&self) -> &'static str {
        "gloss-overlap"
    }
}

/// Token overlap between two MWEs: shared tokens over the union of their
/// tokens, in `[0, 1]`.
///
/// A token is shared when both MWEs hold an equal token at the same
/// sentence position, so MWEs from different sentences do not overlap.
pub fn overlap(a: &Mwe, b: &Mwe) -> f64 {
    let shared = a
        .members()
        .iter()
        .filter(|member| {
            b.members()
                .iter()
                .any(|other| other.position == member.position && other.token == member.token)
        })
        .count();
    let positions: HashSet<usize> = a
        .members()
        .iter()
        .chain(b.members())
        .map(|member| member.position)
        .collect();
    if positions.is_empty() {
        return 0.0;
    }
    shared as f64 / positions.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{Detector, Exhaustive};
    use crate::pos::Pos;
    use crate::test_utils::{open_index, tok};

    fn detect(index: &str, sentence: &[Token]) -> Vec<Mwe> {
        Exhaustive::new(open_index(index)).detect(sentence).unwrap()
    }

    #[test]
    fn positional_scores() {
        let sentence = vec![
            tok("take", "VB", &[]),
            tok("it", "PRP", &[]),
            tok("into", "IN", &[]),
            tok("account", "NN", &[]),
        ];
        let found = detect("take_into_account_V 0,0,0,0,0", &sentence);
        assert_eq!(found.len(), 1);
        let mwe = &found[0];
        assert_eq!(Length.score(mwe, &sentence), 3.0);
        assert_eq!(StartIndex.score(mwe, &sentence), 0.0);
        // gaps 2 and 1
        assert_eq!(GapVariance.score(mwe, &sentence), 0.25);
        assert_eq!(Inverted(Length).score(mwe, &sentence), -3.0);
    }

    #[test]
    fn marked_ratio_uses_root_counts() {
        let sentence = vec![tok("world", "NN", &[]), tok("record", "NN", &[])];
        let found = detect("world_record_N 2,1,1,2,0", &sentence);
        assert_eq!(MarkedRatio.score(&found[0], &sentence), 0.5);
    }

    #[test]
    fn overlap_is_symmetric() {
        let sentence = vec![
            tok("world", "NN", &[]),
            tok("record", "NN", &[]),
            tok("player", "NN", &[]),
        ];
        let found = detect("world_record_N 0,0,0,0,0\nrecord_player_N 0,0,0,0,0", &sentence);
        let (a, b) = (&found[0], &found[1]);
        assert_eq!(overlap(a, b), 1.0 / 3.0);
        assert_eq!(overlap(a, b), overlap(b, a));
        assert_eq!(overlap(a, a), 1.0);
    }

    #[test]
    fn different_sentences_do_not_overlap() {
        let first = vec![tok("world", "NN", &[]), tok("record", "NN", &[])];
        let second = vec![
            tok("vinyl", "NN", &[]).with_offset(20),
            tok("record", "NN", &[]).with_offset(26),
        ];
        let a = &detect("world_record_N 0,0,0,0,0", &first)[0];
        let b = &detect("vinyl_record_N 0,0,0,0,0", &second)[0];
        assert_eq!(overlap(a, b), 0.0);
    }

    #[test]
    fn gloss_overlap_counts_context_words() {
        let mut glossary = HashMap::new();
        glossary.insert(
            EntryId::root("world_record", Pos::Noun),
            "the best performance ever recorded in a sport".to_string(),
        );
        let sentence = vec![
            tok("sport", "NN", &[]),
            tok("world", "NN", &[]),
            tok("record", "NN", &[]),
            tok("performances", "NNS", &["performance"]),
        ];
        let found = detect("world_record_N 0,0,0,0,0", &sentence);
        let score = GlossOverlap::new(glossary).score(&found[0], &sentence);
        // content words: best, performance, ever, recorded, sport
        assert_eq!(score, 2.0 / 5.0);
    }

    #[test]
    fn missing_gloss_scores_zero() {
        let sentence = vec![tok("world", "NN", &[]), tok("record", "NN", &[])];
        let found = detect("world_record_N 0,0,0,0,0", &sentence);
        let glossary: HashMap<EntryId, String> = HashMap::new();
        assert_eq!(GlossOverlap::new(glossary).score(&found[0], &sentence), 0.0);
    }

    #[test]
    fn closures_are_scores() {
        let sentence = vec![tok("world", "NN", &[]), tok("record", "NN", &[])];
        let found = detect("world_record_N 0,0,0,0,0", &sentence);
        let score = |mwe: &Mwe, _: &[Token]| mwe.end() as f64 * 10.0;
        assert_eq!(score.score(&found[0], &sentence), 10.0);
    }
}
