//! The MWE index: lowercase word form to the root entries containing it.
//!
//! An index remembers where its entries come from and builds its lookup
//! table on [`MweIndex::open`]. Once open, the table is immutable and shared
//! by reference between readers; the lock only guards the open/close
//! transition and the handoff of the table.
//!
//! # Example
//!
//! ```
//! use layered_mwe::{MweIndex, Pos};
//!
//! let index = MweIndex::from_text("world_record_N 5,0,3,1,0\nlook_up_V 4,2,0,0,1");
//! index.open().unwrap();
//! assert_eq!(index.get("record").unwrap().len(), 1);
//! assert!(index.get_root("look_up", Pos::Verb).unwrap().is_some());
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::entry::{Entry, EntryId, MweDescription, RootEntry};
use crate::errors::{MweError, MweResult};
use crate::pos::Pos;
use crate::token::validate_word;

/// Where an index reads its entries from.
#[derive(Debug, Clone)]
pub enum IndexSource {
    /// Index text, one root entry per line.
    Text(String),
    /// A UTF-8 file in the index text format.
    Path(PathBuf),
    /// Prebuilt entries.
    Entries(Vec<RootEntry>),
}

/// Lookup table built by [`MweIndex::open`].
#[derive(Debug, Default)]
struct IndexTable {
    roots: BTreeMap<EntryId, Arc<RootEntry>>,
    by_lemma: HashMap<String, Vec<Arc<RootEntry>>>,
}

/// Dictionary of known MWEs keyed by the word forms of their parts.
#[derive(Debug)]
pub struct MweIndex {
    source: IndexSource,
    table: RwLock<Option<Arc<IndexTable>>>,
}

impl MweIndex {
    /// Create a closed index over `source`.
    pub fn new(source: IndexSource) -> Self {
        Self {
            source,
            table: RwLock::new(None),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(IndexSource::Text(text.into()))
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(IndexSource::Path(path.into()))
    }

    pub fn from_entries(entries: Vec<RootEntry>) -> Self {
        Self::new(IndexSource::Entries(entries))
    }

    pub fn source(&self) -> &IndexSource {
        &self.source
    }

    /// Build the lookup table from the source. Opening an open index does
    /// nothing; reopening a closed index rebuilds from scratch.
    pub fn open(&self) -> MweResult<()> {
        let mut guard = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if guard.is_some() {
            return Ok(());
        }
        let roots = match &self.source {
            IndexSource::Text(text) => parse_index(text)?,
            IndexSource::Path(path) => {
                let text = fs::read_to_string(path).map_err(|source| MweError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                parse_index(&text)?
            }
            IndexSource::Entries(entries) => entries.clone(),
        };
        let table = build_table(roots)?;
        debug!(
            entries = table.roots.len(),
            lemmas = table.by_lemma.len(),
            "opened MWE index"
        );
        *guard = Some(Arc::new(table));
        Ok(())
    }

    /// Drop the lookup table. Lookups fail until the index is reopened.
    pub fn close(&self) {
        let mut guard = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            debug!("closed MWE index");
        }
    }

    pub fn is_open(&self) -> bool {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn table(&self) -> MweResult<Arc<IndexTable>> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(MweError::IndexClosed)
    }

    /// Root entries having a part (root or inflected) whose form is
    /// `lemma`, case-insensitively. Sorted by entry id.
    pub fn get(&self, lemma: &str) -> MweResult<Vec<Arc<RootEntry>>> {
        validate_word("lemma", lemma)?;
        let table = self.table()?;
        Ok(table
            .by_lemma
            .get(&lemma.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    /// Look up a root or inflected entry by id.
    pub fn get_by_id(&self, id: &EntryId) -> MweResult<Option<Entry>> {
        let table = self.table()?;
        let root = match table.roots.get(&EntryId::root(id.lemma(), id.pos())) {
            Some(root) => root,
            None => return Ok(None),
        };
        Ok(match id.inflection() {
            Some(form) => root.inflected_entry(form),
            None => Some(Entry::Root(Arc::clone(root))),
        })
    }

    /// Look up an entry by the text form of its id, e.g. `"look_up_V"`.
    pub fn get_by_id_str(&self, id: &str) -> MweResult<Option<Entry>> {
        self.get_by_id(&id.parse()?)
    }

    pub fn get_root(&self, lemma: &str, pos: Pos) -> MweResult<Option<Arc<RootEntry>>> {
        let table = self.table()?;
        Ok(table.roots.get(&EntryId::root(lemma, pos)).cloned())
    }

    pub fn get_inflected(&self, lemma: &str, pos: Pos, form: &str) -> MweResult<Option<Entry>> {
        Ok(self
            .get_root(lemma, pos)?
            .and_then(|root| root.inflected_entry(form)))
    }

    /// All root entries, sorted by id.
    pub fn roots(&self) -> MweResult<Vec<Arc<RootEntry>>> {
        Ok(self.table()?.roots.values().cloned().collect())
    }

    /// Number of root entries.
    pub fn len(&self) -> MweResult<usize> {
        Ok(self.table()?.roots.len())
    }

    pub fn is_empty(&self) -> MweResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Number of distinct word forms in the lookup table.
    pub fn lemma_count(&self) -> MweResult<usize> {
        Ok(self.table()?.by_lemma.len())
    }
}

/// Parse index text into root entries. Comment (`//`, `;;`) and blank lines
/// are skipped; errors, including a repeated root, carry the 1-based line
/// number.
pub fn parse_index(text: &str) -> MweResult<Vec<RootEntry>> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    for (line_idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with(";;") {
            continue;
        }
        let entry = RootEntry::from_line(trimmed).map_err(|e| e.at_line(line_idx + 1))?;
        if !seen.insert(entry.id()) {
            return Err(
                MweError::parse(trimmed, format!("duplicate entry {}", entry.id()))
                    .at_line(line_idx + 1),
            );
        }
        entries.push(entry);
    }
    Ok(entries)
}

fn build_table(entries: Vec<RootEntry>) -> MweResult<IndexTable> {
    let mut table = IndexTable::default();
    for entry in entries {
        let id = entry.id();
        if table.roots.contains_key(&id) {
            return Err(MweError::invalid_argument(
                "entries",
                format!("duplicate entry {}", id),
            ));
        }
        table.roots.insert(id, Arc::new(entry));
    }

    for root in table.roots.values() {
        let forms = root
            .parts()
            .iter()
            .chain(root.inflections().iter().flat_map(|inf| inf.parts()))
            .map(|part| part.form());
        for form in forms {
            let bucket = table.by_lemma.entry(form.to_string()).or_default();
            // Roots are visited in id order, so each bucket stays sorted.
            if !bucket.last().map_or(false, |last| Arc::ptr_eq(last, root)) {
                bucket.push(Arc::clone(root));
            }
        }
    }

    Ok(table)
}
