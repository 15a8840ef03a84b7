//! Root and inflected dictionary entries, and their index-line format.
//!
//! A root line looks like
//!
//! ```text
//! world_record_N 5,0,3,1,0 world_records 2,0,1,0,0
//! ```
//!
//! i.e. the underscore-joined root lemma with its POS tag, the root's five
//! counts, then zero or more inflected forms each followed by its counts.

use std::sync::Arc;

use crate::entry::counts::Counts;
use crate::entry::part::{build_parts, Part};
use crate::entry::{EntryId, MweDescription};
use crate::errors::{MweError, MweResult};
use crate::pos::Pos;

/// Base (uninflected) dictionary description of an MWE.
#[derive(Debug, Clone)]
pub struct RootEntry {
    form: String,
    parts: Vec<Part>,
    pos: Pos,
    counts: Counts,
    inflections: Vec<Arc<InflectedEntry>>,
}

/// A registered surface variant of a root entry.
///
/// The entry itself holds no pointer to its root; [`crate::Entry::Inflected`]
/// pairs the two.
#[derive(Debug, Clone)]
pub struct InflectedEntry {
    form: String,
    parts: Vec<Part>,
    counts: Counts,
}

impl RootEntry {
    /// Create a root entry from an underscore-joined lemma such as
    /// `"world_record"`.
    pub fn new(lemma: &str, pos: Pos, counts: Counts) -> MweResult<Self> {
        let words: Vec<&str> = lemma.split('_').collect();
        Self::from_parts(&words, pos, counts)
    }

    /// Create a root entry from its individual part lemmas.
    pub fn from_parts<S: AsRef<str>>(parts: &[S], pos: Pos, counts: Counts) -> MweResult<Self> {
        let parts = build_parts(parts)?;
        let form = join_parts(&parts);
        Ok(Self {
            form,
            parts,
            pos,
            counts,
            inflections: Vec::new(),
        })
    }

    /// Register an inflected surface form, e.g. `"world_records"`.
    ///
    /// The form must have as many parts as the root, differ from the root,
    /// and not already be registered.
    pub fn with_inflection(mut self, form: &str, counts: Counts) -> MweResult<Self> {
        let words: Vec<&str> = form.split('_').collect();
        let parts = build_parts(&words)?;
        if parts.len() != self.parts.len() {
            return Err(MweError::invalid_argument(
                "inflection",
                format!(
                    "{:?} has {} parts but root {:?} has {}",
                    form,
                    parts.len(),
                    self.form,
                    self.parts.len()
                ),
            ));
        }
        let form = join_parts(&parts);
        if form == self.form {
            return Err(MweError::invalid_argument(
                "inflection",
                format!("{:?} is identical to its root", form),
            ));
        }
        if self.inflection(&form).is_some() {
            return Err(MweError::invalid_argument(
                "inflection",
                format!("{:?} is already registered on {:?}", form, self.form),
            ));
        }
        self.inflections
            .push(Arc::new(InflectedEntry { form, parts, counts }));
        Ok(self)
    }

    /// Registered inflections, in the order they were added.
    pub fn inflections(&self) -> &[Arc<InflectedEntry>] {
        &self.inflections
    }

    /// Look up a registered inflection by its (case-insensitive) form.
    pub fn inflection(&self, form: &str) -> Option<&Arc<InflectedEntry>> {
        let form = form.to_lowercase();
        self.inflections.iter().find(|inf| inf.form == form)
    }

    /// Fraction of all recorded occurrences that were marked as an MWE.
    ///
    /// Returns `0.0` when nothing was recorded.
    pub fn marked_ratio(&self) -> f64 {
        use crate::entry::counts::Count::*;
        let marked = u64::from(self.counts.get(MarkedContinuous))
            + u64::from(self.counts.get(MarkedSplit));
        let total = self.counts.total();
        if total == 0 {
            0.0
        } else {
            marked as f64 / total as f64
        }
    }

    /// Parse one root line of the index text format.
    pub fn from_line(line: &str) -> MweResult<Self> {
        let mut fields = line.split_whitespace();
        let head = fields
            .next()
            .ok_or_else(|| MweError::parse(line, "empty line"))?;
        let (lemma, tag) = head
            .rsplit_once('_')
            .ok_or_else(|| MweError::parse(line, "missing part-of-speech suffix"))?;
        let mut tag_chars = tag.chars();
        let pos = match (tag_chars.next(), tag_chars.next()) {
            (Some(c), None) => Pos::from_tag(c)
                .ok_or_else(|| MweError::parse(line, format!("unknown part of speech {:?}", c)))?,
            _ => {
                return Err(MweError::parse(
                    line,
                    format!("part of speech {:?} is not a single tag", tag),
                ))
            }
        };
        let counts = fields
            .next()
            .ok_or_else(|| MweError::parse(line, "missing root counts"))?;
        let counts = Counts::parse(counts).map_err(|message| MweError::parse(line, message))?;
        let mut entry =
            RootEntry::new(lemma, pos, counts).map_err(|e| MweError::parse(line, e.to_string()))?;

        while let Some(form) = fields.next() {
            let counts = fields.next().ok_or_else(|| {
                MweError::parse(line, format!("missing counts for inflection {:?}", form))
            })?;
            let counts = Counts::parse(counts).map_err(|message| MweError::parse(line, message))?;
            entry = entry
                .with_inflection(form, counts)
                .map_err(|e| MweError::parse(line, e.to_string()))?;
        }

        Ok(entry)
    }

    /// Serialize back to one line of the index text format.
    pub fn to_line(&self) -> String {
        let mut line = format!("{}_{} {}", self.form, self.pos.tag(), self.counts);
        for inflection in &self.inflections {
            line.push(' ');
            line.push_str(&inflection.form);
            line.push(' ');
            line.push_str(&inflection.counts.to_string());
        }
        line
    }
}

impl MweDescription for RootEntry {
    fn form(&self) -> &str {
        &self.form
    }

    fn parts(&self) -> &[Part] {
        &self.parts
    }

    fn pos(&self) -> Pos {
        self.pos
    }

    fn counts(&self) -> &Counts {
        &self.counts
    }

    fn id(&self) -> EntryId {
        EntryId::root(&self.form, self.pos)
    }
}

impl InflectedEntry {
    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }
}

fn join_parts(parts: &[Part]) -> String {
    parts
        .iter()
        .map(Part::form)
        .collect::<Vec<_>>()
        .join("_")
}
