//! Coarse part of speech carried by dictionary entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Part of speech of an MWE as a whole.
///
/// The single-character tags are the ones used by the index text format.
/// Variants are declared in tag order so the derived `Ord` sorts the same
/// way the tags do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pos {
    /// `J`
    Adjective,
    /// `N`
    Noun,
    /// `O`
    Other,
    /// `P`
    Preposition,
    /// `R`
    Adverb,
    /// `V`
    Verb,
}

impl Pos {
    pub const ALL: [Pos; 6] = [
        Pos::Adjective,
        Pos::Noun,
        Pos::Other,
        Pos::Preposition,
        Pos::Adverb,
        Pos::Verb,
    ];

    /// The index-format tag for this part of speech.
    pub fn tag(self) -> char {
        match self {
            Pos::Adjective => 'J',
            Pos::Noun => 'N',
            Pos::Other => 'O',
            Pos::Preposition => 'P',
            Pos::Adverb => 'R',
            Pos::Verb => 'V',
        }
    }

    pub fn from_tag(tag: char) -> Option<Pos> {
        Pos::ALL.iter().copied().find(|pos| pos.tag() == tag)
    }

    /// Returns a human-readable description of the part of speech.
    pub fn description(&self) -> &'static str {
        match self {
            Pos::Adjective => "adjective",
            Pos::Noun => "noun",
            Pos::Other => "other",
            Pos::Preposition => "preposition",
            Pos::Adverb => "adverb",
            Pos::Verb => "verb",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for pos in Pos::ALL {
            assert_eq!(Pos::from_tag(pos.tag()), Some(pos));
        }
        assert_eq!(Pos::from_tag('X'), None);
        assert_eq!(Pos::from_tag('n'), None);
    }

    #[test]
    fn ordering_follows_tags() {
        let mut sorted = Pos::ALL;
        sorted.sort_by_key(|pos| pos.tag());
        assert_eq!(sorted, Pos::ALL);
    }
}
