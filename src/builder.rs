//! Partial-match records ("builders").
//!
//! An [`MweBuilder`] tracks which sentence position fills each part of one
//! candidate entry. Builders are plain values: cloning copies the slot
//! vector and shares the entry.

use crate::entry::{Entry, MweDescription, Part};
use crate::errors::{MweError, MweResult};
use crate::mwe::{Member, Mwe};
use crate::stop_words::StopWords;
use crate::token::Token;

/// Mutable partial-match state for one candidate MWE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MweBuilder {
    entry: Entry,
    /// Sentence position filling each part, in part order.
    slots: Vec<Option<usize>>,
}

impl MweBuilder {
    /// An empty record for `entry`.
    pub fn new(entry: Entry) -> Self {
        let slots = vec![None; entry.parts().len()];
        Self { entry, slots }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Filled positions in part order.
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Every slot whose part is not a stop word is occupied, using the
    /// precomputed stop-word flags of the parts.
    pub fn is_content_full(&self) -> bool {
        self.parts()
            .iter()
            .zip(&self.slots)
            .all(|(part, slot)| part.is_stop_word() || slot.is_some())
    }

    /// Like [`is_content_full`](Self::is_content_full) with a caller-supplied
    /// stop-word set.
    pub fn is_content_full_for(&self, stop_words: &StopWords) -> bool {
        self.parts()
            .iter()
            .zip(&self.slots)
            .all(|(part, slot)| stop_words.contains(part.form()) || slot.is_some())
    }

    /// Whether `position` already fills one of the slots.
    pub fn contains(&self, position: usize) -> bool {
        self.slots.contains(&Some(position))
    }

    fn parts(&self) -> &[Part] {
        self.entry.parts()
    }

    fn can_fill(&self, part: &Part, token: &Token) -> bool {
        part.matches(token, self.entry.is_root())
    }

    /// Consecutive filling: put the token in the first empty slot if it
    /// matches there. Returns false, leaving the record unchanged, when it
    /// does not.
    pub fn fill_next(&mut self, position: usize, token: &Token) -> bool {
        if self.contains(position) {
            return false;
        }
        let slot = match self.slots.iter().position(Option::is_none) {
            Some(slot) => slot,
            None => return false,
        };
        if !self.can_fill(&self.parts()[slot], token) {
            return false;
        }
        self.slots[slot] = Some(position);
        true
    }

    /// Exhaustive filling.
    ///
    /// The first empty slot the token can fill is filled in place. Every
    /// other slot the token can fill yields a clone of the record as it was
    /// before this call with that one slot assigned: later empty slots are
    /// assigned directly, occupied slots have their token replaced. An
    /// occupied slot is left alone when a later slot with the same lemma is
    /// still empty, so the token goes there instead of displacing an
    /// earlier repeat.
    ///
    /// Returns the clones. The caller decides whether to also keep the
    /// unmodified record.
    pub fn fill(&mut self, position: usize, token: &Token) -> Vec<MweBuilder> {
        let mut clones = Vec::new();
        if self.contains(position) {
            return clones;
        }

        let before = self.clone();
        let mut filled_in_place = false;
        for (idx, part) in before.parts().iter().enumerate() {
            if !before.can_fill(part, token) {
                continue;
            }
            match before.slots[idx] {
                None if !filled_in_place => {
                    self.slots[idx] = Some(position);
                    filled_in_place = true;
                }
                None => clones.push(before.with_slot(idx, position)),
                Some(_) => {
                    if before.has_empty_matching_slots(idx, part.form()) {
                        continue;
                    }
                    clones.push(before.with_slot(idx, position));
                }
            }
        }
        clones
    }

    fn with_slot(&self, idx: usize, position: usize) -> MweBuilder {
        let mut clone = self.clone();
        clone.slots[idx] = Some(position);
        clone
    }

    /// Whether any slot after `after` has lemma `form` and is still empty.
    pub fn has_empty_matching_slots(&self, after: usize, form: &str) -> bool {
        self.parts()
            .iter()
            .zip(&self.slots)
            .skip(after + 1)
            .any(|(part, slot)| slot.is_none() && part.form() == form)
    }

    /// Convert a full record into a result MWE.
    pub fn build(&self, sentence: &[Token]) -> MweResult<Mwe> {
        let mut members = Vec::with_capacity(self.slots.len());
        for (part, slot) in self.slots.iter().enumerate() {
            let position = slot.ok_or_else(|| {
                MweError::invariant(format!(
                    "record for {} built with empty slot {}",
                    self.entry.id(),
                    part
                ))
            })?;
            let token = sentence.get(position).ok_or_else(|| {
                MweError::invariant(format!(
                    "record for {} points past the sentence at {}",
                    self.entry.id(),
                    position
                ))
            })?;
            members.push(Member {
                position,
                token: token.clone(),
                part,
            });
        }
        Mwe::new(self.entry.clone(), members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RootEntry;
    use std::sync::Arc;

    fn entry(line: &str) -> Entry {
        Entry::Root(Arc::new(RootEntry::from_line(line).unwrap()))
    }

    fn tok(form: &str) -> Token {
        Token::new(form).unwrap()
    }

    #[test]
    fn fill_next_requires_order() {
        let mut record = MweBuilder::new(entry("world_record_N 0,0,0,0,0"));
        assert!(!record.fill_next(0, &tok("record")));
        assert!(record.is_empty());
        assert!(record.fill_next(0, &tok("World")));
        assert!(!record.fill_next(0, &tok("record")));
        assert!(record.fill_next(1, &tok("record")));
        assert!(record.is_full());
        assert!(!record.fill_next(2, &tok("record")));
    }

    #[test]
    fn stems_fill_root_slots_only() {
        let root = Arc::new(RootEntry::from_line("look_up_V 0,0,0,0,0 looked_up 0,0,0,0,0").unwrap());
        let looked = tok("looking").with_stems(["look", "looked"]);

        let mut on_root = MweBuilder::new(Entry::Root(Arc::clone(&root)));
        assert!(on_root.fill_next(0, &looked));

        let mut on_inflection = MweBuilder::new(root.inflected_entry("looked_up").unwrap());
        assert!(!on_inflection.fill_next(0, &looked));
        assert!(on_inflection.fill_next(0, &tok("looked")));
    }

    #[test]
    fn fill_in_place_without_clones() {
        let mut record = MweBuilder::new(entry("world_record_N 0,0,0,0,0"));
        assert!(record.fill(3, &tok("record")).is_empty());
        assert_eq!(record.slots(), &[None, Some(3)]);
        assert!(record.fill(1, &tok("world")).is_empty());
        assert!(record.is_full());
    }

    #[test]
    fn same_token_is_not_reused() {
        let mut record = MweBuilder::new(entry("face_to_face_R 0,0,0,0,0"));
        record.fill(0, &tok("face"));
        assert!(record.fill(0, &tok("face")).is_empty());
        assert_eq!(record.slots(), &[Some(0), None, None]);
    }

    #[test]
    fn later_fillable_slot_is_cloned() {
        let mut record = MweBuilder::new(entry("face_to_face_R 0,0,0,0,0"));
        let clones = record.fill(4, &tok("face"));
        assert_eq!(record.slots(), &[Some(4), None, None]);
        assert_eq!(clones.len(), 1);
        assert_eq!(clones[0].slots(), &[None, None, Some(4)]);
    }

    #[test]
    fn repeated_part_goes_to_open_later_slot() {
        let mut record = MweBuilder::new(entry("face_to_face_R 0,0,0,0,0"));
        record.fill(0, &tok("face"));
        let clones = record.fill(2, &tok("face"));
        assert!(clones.is_empty(), "earlier face slot must not be displaced");
        assert_eq!(record.slots(), &[Some(0), None, Some(2)]);
    }

    #[test]
    fn occupied_slots_are_replaced_in_clones() {
        let mut record = MweBuilder::new(entry("face_to_face_R 0,0,0,0,0"));
        record.fill(0, &tok("face"));
        record.fill(2, &tok("face"));
        let clones = record.fill(5, &tok("face"));
        assert_eq!(record.slots(), &[Some(0), None, Some(2)]);
        let slots: Vec<&[Option<usize>]> = clones.iter().map(|c| c.slots()).collect();
        assert_eq!(
            slots,
            vec![&[Some(5), None, Some(2)][..], &[Some(0), None, Some(5)][..]]
        );
    }

    #[test]
    fn replacement_when_no_later_repeat() {
        let mut record = MweBuilder::new(entry("look_up_V 0,0,0,0,0"));
        record.fill(0, &tok("look"));
        let clones = record.fill(1, &tok("look"));
        assert_eq!(record.slots(), &[Some(0), None]);
        assert_eq!(clones.len(), 1);
        assert_eq!(clones[0].slots(), &[Some(1), None]);
    }

    #[test]
    fn content_fullness() {
        let mut record = MweBuilder::new(entry("of_course_R 0,0,0,0,0"));
        assert!(!record.is_content_full());
        record.fill(1, &tok("course"));
        assert!(record.is_content_full());
        assert!(!record.is_full());
        assert!(!record.is_content_full_for(&StopWords::new(["course"])));
    }

    #[test]
    fn build_full_record() {
        let sentence = vec![tok("the"), tok("world"), tok("record")];
        let mut record = MweBuilder::new(entry("world_record_N 0,0,0,0,0"));
        record.fill(1, &sentence[1]);
        assert!(matches!(record.build(&sentence), Err(MweError::Invariant { .. })));
        record.fill(2, &sentence[2]);
        let mwe = record.build(&sentence).unwrap();
        assert_eq!(mwe.positions(), vec![1, 2]);
    }
}
