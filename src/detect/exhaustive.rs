use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::trace;

use crate::builder::MweBuilder;
use crate::detect::{candidate_entries, check_sentence, dedup_and_sort, Detector};
use crate::entry::{Entry, MweDescription, RootEntry};
use crate::errors::MweResult;
use crate::index::MweIndex;
use crate::mwe::Mwe;
use crate::stop_words::StopWords;
use crate::token::Token;

/// Detects continuous, discontinuous and out-of-order MWEs.
///
/// Runs in two phases. Content tokens are pushed through every candidate
/// record with [`MweBuilder::fill`], keeping each record's prior state
/// alongside its successors. Stop-word tokens are held back; once the
/// content phase is over, records whose content slots are all filled are
/// offered the held-back tokens in sentence order.
#[derive(Debug, Clone)]
pub struct Exhaustive {
    index: Arc<MweIndex>,
    stop_words: StopWords,
}

type Records = BTreeMap<Entry, Vec<MweBuilder>>;

impl Exhaustive {
    /// Exhaustive detection with the default English stop words.
    pub fn new(index: Arc<MweIndex>) -> Self {
        Self::with_stop_words(index, StopWords::default())
    }

    pub fn with_stop_words(index: Arc<MweIndex>, stop_words: StopWords) -> Self {
        Self { index, stop_words }
    }

    pub fn index(&self) -> &Arc<MweIndex> {
        &self.index
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    fn all_stop_words(&self, root: &RootEntry) -> bool {
        root.parts()
            .iter()
            .all(|part| self.stop_words.contains(part.form()))
    }
}

/// Offer one token to every record of an entry. Each record is kept as it
/// was, and its filled version and clones are added; identical records are
/// collapsed.
fn advance(records: Vec<MweBuilder>, position: usize, token: &Token) -> Vec<MweBuilder> {
    let mut next = Vec::with_capacity(records.len() * 2);
    for record in records {
        let mut filled = record.clone();
        let clones = filled.fill(position, token);
        if filled != record {
            next.push(record);
        }
        next.push(filled);
        next.extend(clones);
    }
    let mut seen = HashSet::new();
    next.retain(|record| seen.insert(record.slots().to_vec()));
    next
}

/// The records of `root`, starting from a single empty one.
fn seed(records: &mut Records, root: Arc<RootEntry>) -> &mut Vec<MweBuilder> {
    let entry = Entry::Root(root);
    records
        .entry(entry.clone())
        .or_insert_with(|| vec![MweBuilder::new(entry)])
}

impl Detector for Exhaustive {
    fn detect(&self, sentence: &[Token]) -> MweResult<Vec<Mwe>> {
        check_sentence(sentence)?;

        // Content phase.
        let mut records = Records::new();
        let mut deferred: Vec<(usize, &Token)> = Vec::new();
        for (position, token) in sentence.iter().enumerate() {
            if self.stop_words.is_stop_token(token) {
                deferred.push((position, token));
                continue;
            }
            for root in candidate_entries(&self.index, token)? {
                let list = seed(&mut records, root);
                let current = std::mem::take(list);
                *list = advance(current, position, token);
            }
        }

        let mut complete: Vec<MweBuilder> = Vec::new();
        let mut retry = Records::new();
        for (entry, list) in records {
            for record in list {
                if record.is_full() {
                    complete.push(record);
                } else if !record.is_empty() && record.is_content_full_for(&self.stop_words) {
                    retry.entry(entry.clone()).or_default().push(record);
                }
            }
        }
        trace!(
            tokens = sentence.len(),
            deferred = deferred.len(),
            complete = complete.len(),
            retry = retry.values().map(Vec::len).sum::<usize>(),
            "exhaustive content phase"
        );

        // Stop-word phase.
        for &(position, token) in &deferred {
            for root in candidate_entries(&self.index, token)? {
                let entry = Entry::Root(Arc::clone(&root));
                if !retry.contains_key(&entry) && !self.all_stop_words(&root) {
                    continue;
                }
                let list = seed(&mut retry, root);
                let current = std::mem::take(list);
                *list = advance(current, position, token);
            }
        }
        complete.extend(retry.into_values().flatten().filter(MweBuilder::is_full));

        let mwes = complete
            .iter()
            .map(|record| record.build(sentence))
            .collect::<MweResult<Vec<_>>>()?;
        let mwes = dedup_and_sort(mwes);
        trace!(found = mwes.len(), "exhaustive detection");
        Ok(mwes)
    }
}
