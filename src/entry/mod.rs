//! MWE dictionary entry model.
//!
//! Entries are immutable once built. A [`RootEntry`] owns its inflected
//! variants; an [`Entry`] handle is the tagged union over the two kinds and
//! carries the root alongside an inflection, so the root always outlives
//! the inflections that refer to it.

mod counts;
mod part;
mod root;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{MweError, MweResult};
use crate::pos::Pos;

pub use counts::{Count, Counts, COUNT_FIELDS};
pub use part::Part;
pub use root::{InflectedEntry, RootEntry};

/// Common surface of root and inflected entries.
pub trait MweDescription {
    /// Underscore-joined lowercase parts.
    fn form(&self) -> &str;

    fn parts(&self) -> &[Part];

    fn pos(&self) -> Pos;

    fn counts(&self) -> &Counts;

    fn id(&self) -> EntryId;
}

/// Identity of an entry: root lemma, POS, and the inflected form if any.
///
/// Renders as `world_record_N` for a root and `world_record_N/world_records`
/// for an inflection. Ordering is lexicographic over the three fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId {
    root: String,
    pos: Pos,
    inflection: Option<String>,
}

impl EntryId {
    pub fn root(lemma: &str, pos: Pos) -> Self {
        Self {
            root: lemma.to_lowercase(),
            pos,
            inflection: None,
        }
    }

    pub fn inflected(lemma: &str, pos: Pos, inflection: &str) -> Self {
        Self {
            root: lemma.to_lowercase(),
            pos,
            inflection: Some(inflection.to_lowercase()),
        }
    }

    pub fn lemma(&self) -> &str {
        &self.root
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn inflection(&self) -> Option<&str> {
        self.inflection.as_deref()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.root, self.pos)?;
        if let Some(inflection) = &self.inflection {
            write!(f, "/{}", inflection)?;
        }
        Ok(())
    }
}

impl FromStr for EntryId {
    type Err = MweError;

    fn from_str(text: &str) -> MweResult<Self> {
        let invalid = || MweError::invalid_argument("id", format!("{:?} is not an entry id", text));
        let (head, inflection) = match text.split_once('/') {
            Some((head, inflection)) if !inflection.is_empty() => (head, Some(inflection)),
            Some(_) => return Err(invalid()),
            None => (text, None),
        };
        let (lemma, tag) = head.rsplit_once('_').ok_or_else(invalid)?;
        if lemma.is_empty() {
            return Err(invalid());
        }
        let mut tag_chars = tag.chars();
        let pos = match (tag_chars.next(), tag_chars.next()) {
            (Some(c), None) => Pos::from_tag(c).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        Ok(match inflection {
            Some(inflection) => EntryId::inflected(lemma, pos, inflection),
            None => EntryId::root(lemma, pos),
        })
    }
}

/// Handle to either a root entry or one of its inflections.
#[derive(Debug, Clone)]
pub enum Entry {
    Root(Arc<RootEntry>),
    Inflected {
        root: Arc<RootEntry>,
        inflection: Arc<InflectedEntry>,
    },
}

impl Entry {
    /// The root entry, for both variants.
    pub fn root(&self) -> &Arc<RootEntry> {
        match self {
            Entry::Root(root) | Entry::Inflected { root, .. } => root,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Entry::Root(_))
    }

    pub fn inflection(&self) -> Option<&Arc<InflectedEntry>> {
        match self {
            Entry::Root(_) => None,
            Entry::Inflected { inflection, .. } => Some(inflection),
        }
    }

    /// Identity tuple without allocating an [`EntryId`].
    fn key(&self) -> (&str, Pos, Option<&str>) {
        let root = self.root();
        (
            root.form(),
            root.pos(),
            self.inflection().map(|inflection| inflection.form()),
        )
    }
}

impl From<Arc<RootEntry>> for Entry {
    fn from(root: Arc<RootEntry>) -> Self {
        Entry::Root(root)
    }
}

impl MweDescription for Entry {
    fn form(&self) -> &str {
        match self {
            Entry::Root(root) => root.form(),
            Entry::Inflected { inflection, .. } => inflection.form(),
        }
    }

    fn parts(&self) -> &[Part] {
        match self {
            Entry::Root(root) => root.parts(),
            Entry::Inflected { inflection, .. } => inflection.parts(),
        }
    }

    fn pos(&self) -> Pos {
        self.root().pos()
    }

    fn counts(&self) -> &Counts {
        match self {
            Entry::Root(root) => root.counts(),
            Entry::Inflected { inflection, .. } => inflection.counts(),
        }
    }

    fn id(&self) -> EntryId {
        let (root, pos, inflection) = self.key();
        match inflection {
            Some(inflection) => EntryId::inflected(root, pos, inflection),
            None => EntryId::root(root, pos),
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl RootEntry {
    /// Handle to a registered inflection of this root.
    pub fn inflected_entry(self: &Arc<Self>, form: &str) -> Option<Entry> {
        self.inflection(form).map(|inflection| Entry::Inflected {
            root: Arc::clone(self),
            inflection: Arc::clone(inflection),
        })
    }
}
