//! Word slots of a dictionary entry.

use crate::errors::{MweError, MweResult};
use crate::stop_words::StopWords;
use crate::token::{validate_word, Token};

/// One word-slot of a dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Part {
    form: String,
    index: usize,
    stop_word: bool,
}

impl Part {
    fn new(form: &str, index: usize) -> MweResult<Self> {
        validate_word("part", form)?;
        let form = form.to_lowercase();
        let stop_word = StopWords::english().contains(&form);
        Ok(Self {
            form,
            index,
            stop_word,
        })
    }

    /// Lowercase lemma of this slot.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Zero-based position of this slot within its entry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the lemma is in the default English stop-word set.
    pub fn is_stop_word(&self) -> bool {
        self.stop_word
    }

    /// Whether `token` can fill this slot. Stems are only consulted when
    /// `use_stems` is set, which is the case for slots of root entries.
    pub fn matches(&self, token: &Token, use_stems: bool) -> bool {
        token.has_lemma(&self.form, use_stems)
    }
}

/// Build the part list of an entry, enforcing at least two valid words.
pub(crate) fn build_parts<S: AsRef<str>>(forms: &[S]) -> MweResult<Vec<Part>> {
    if forms.len() < 2 {
        return Err(MweError::invalid_argument(
            "parts",
            format!("an MWE needs at least two parts, found {}", forms.len()),
        ));
    }
    forms
        .iter()
        .enumerate()
        .map(|(index, form)| Part::new(form.as_ref(), index))
        .collect()
}
