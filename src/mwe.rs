//! Detected multi-word expressions.

use std::fmt;

use crate::entry::{Entry, EntryId, MweDescription};
use crate::errors::{MweError, MweResult};
use crate::pos::Pos;
use crate::token::Token;

/// One token of a detected MWE together with the part it fills.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    /// Position of the token in the sentence.
    pub position: usize,
    pub token: Token,
    /// Index of the entry part the token fills.
    pub part: usize,
}

/// A detected MWE: an entry plus a bijection between tokens and its parts.
///
/// Members are ordered by sentence position, which need not be the
/// entry's part order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mwe {
    entry: Entry,
    members: Vec<Member>,
}

impl Mwe {
    /// Create an MWE, checking that every part is filled by exactly one
    /// token and no position is used twice.
    pub fn new(entry: Entry, mut members: Vec<Member>) -> MweResult<Self> {
        let arity = entry.parts().len();
        if members.len() != arity {
            return Err(MweError::invariant(format!(
                "{} has {} parts but {} members",
                entry.id(),
                arity,
                members.len()
            )));
        }
        let mut seen_parts = vec![false; arity];
        for member in &members {
            match seen_parts.get_mut(member.part) {
                Some(seen) if !*seen => *seen = true,
                _ => {
                    return Err(MweError::invariant(format!(
                        "{} part {} is filled twice or does not exist",
                        entry.id(),
                        member.part
                    )))
                }
            }
        }
        members.sort_by_key(|member| member.position);
        if members.windows(2).any(|w| w[0].position == w[1].position) {
            return Err(MweError::invariant(format!(
                "{} uses the same token twice",
                entry.id()
            )));
        }
        Ok(Self { entry, members })
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn id(&self) -> EntryId {
        self.entry.id()
    }

    pub fn pos(&self) -> Pos {
        self.entry.pos()
    }

    /// Members in sentence order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.members.iter().map(|member| &member.token)
    }

    /// Sentence positions of the members, ascending.
    pub fn positions(&self) -> Vec<usize> {
        self.members.iter().map(|member| member.position).collect()
    }

    pub fn contains_position(&self, position: usize) -> bool {
        self.members.iter().any(|member| member.position == position)
    }

    /// Position of the first token.
    pub fn start(&self) -> usize {
        self.members.first().map_or(0, |member| member.position)
    }

    /// Position of the last token.
    pub fn end(&self) -> usize {
        self.members.last().map_or(0, |member| member.position)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The member filling part `part`.
    pub fn member_for_part(&self, part: usize) -> Option<&Member> {
        self.members.iter().find(|member| member.part == part)
    }

    /// Members in the entry's part order.
    pub fn members_by_part(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.members.iter().collect();
        members.sort_by_key(|member| member.part);
        members
    }

    /// Lowercase token forms in part order, joined with `_`.
    pub fn surface_form(&self) -> String {
        self.members_by_part()
            .iter()
            .map(|member| member.token.form().to_lowercase())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Parts whose token form differs from the part's lemma.
    pub fn inflected_parts(&self) -> Vec<usize> {
        let parts = self.entry.parts();
        self.members_by_part()
            .iter()
            .filter(|member| member.token.form().to_lowercase() != parts[member.part].form())
            .map(|member| member.part)
            .collect()
    }

    /// True if any token's form differs from the lemma of its part.
    pub fn is_inflected(&self) -> bool {
        !self.inflected_parts().is_empty()
    }

    /// Members occupy a contiguous run of positions.
    pub fn is_continuous(&self) -> bool {
        self.members
            .windows(2)
            .all(|w| w[1].position == w[0].position + 1)
    }

    /// Members appear in the sentence in the entry's part order.
    pub fn is_in_order(&self) -> bool {
        self.members.windows(2).all(|w| w[0].part < w[1].part)
    }

    /// Deduplication identity: token positions and POS.
    pub fn key(&self) -> (Vec<usize>, Pos) {
        (self.positions(), self.pos())
    }
}

impl fmt::Display for Mwe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.id())?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", member.position, member.token.form())?;
        }
        f.write_str("]")
    }
}
