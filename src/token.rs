//! Tagged, stemmed input tokens.
//!
//! Tokens are produced upstream by a tagger and stemmer; this crate only
//! consumes them. A token's identity within a sentence is its position.

use serde::{Deserialize, Serialize};

use crate::errors::{MweError, MweResult};

/// One token of a tagged sentence.
///
/// `stems` distinguishes "not yet stemmed" (`None`) from "unstemmable"
/// (`Some(vec![])`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawToken")]
pub struct Token {
    form: String,
    tag: Option<String>,
    stems: Option<Vec<String>>,
    offset: usize,
}

#[derive(Deserialize)]
struct RawToken {
    form: String,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    stems: Option<Vec<String>>,
    #[serde(default)]
    offset: usize,
}

impl TryFrom<RawToken> for Token {
    type Error = MweError;

    fn try_from(raw: RawToken) -> MweResult<Self> {
        let mut token = Token::new(raw.form)?.with_offset(raw.offset);
        if let Some(tag) = raw.tag {
            token = token.with_tag(tag);
        }
        if let Some(stems) = raw.stems {
            token = token.with_stems(stems);
        }
        Ok(token)
    }
}

impl Token {
    /// Create an untagged, unstemmed token.
    ///
    /// The form must be non-empty and contain neither whitespace nor `_`.
    pub fn new(form: impl Into<String>) -> MweResult<Self> {
        let form = form.into();
        validate_word("form", &form)?;
        Ok(Self {
            form,
            tag: None,
            stems: None,
            offset: 0,
        })
    }

    /// Shorthand for a token carrying a tag.
    pub fn tagged(form: impl Into<String>, tag: impl Into<String>) -> MweResult<Self> {
        Ok(Self::new(form)?.with_tag(tag))
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach stems. Stems are lowercased; duplicates are dropped.
    pub fn with_stems<I, S>(mut self, stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lowered: Vec<String> = Vec::new();
        for stem in stems {
            let stem = stem.as_ref().to_lowercase();
            if !lowered.contains(&stem) {
                lowered.push(stem);
            }
        }
        self.stems = Some(lowered);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn stems(&self) -> Option<&[String]> {
        self.stems.as_deref()
    }

    /// Character offset of the token in its source text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if `lemma` equals the form (case-insensitively) or, when
    /// `use_stems` is set, one of the stems.
    pub fn has_lemma(&self, lemma: &str, use_stems: bool) -> bool {
        if self.form.to_lowercase() == lemma {
            return true;
        }
        use_stems
            && self
                .stems
                .as_ref()
                .map_or(false, |stems| stems.iter().any(|stem| stem == lemma))
    }

    /// Lowercase keys under which this token is looked up in an index: the
    /// form followed by every stem. Stems that are not valid lookup keys are
    /// skipped.
    pub fn lookup_keys(&self) -> Vec<String> {
        let mut keys = vec![self.form.to_lowercase()];
        for stem in self.stems.iter().flatten() {
            if validate_word("stem", stem).is_ok() && !keys.contains(stem) {
                keys.push(stem.clone());
            }
        }
        keys
    }
}

/// Reject empty words and words containing whitespace or `_`.
pub(crate) fn validate_word(name: &'static str, word: &str) -> MweResult<()> {
    if word.is_empty() {
        return Err(MweError::invalid_argument(name, "must not be empty"));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(MweError::invalid_argument(
            name,
            format!("{:?} contains whitespace", word),
        ));
    }
    if word.contains('_') {
        return Err(MweError::invalid_argument(
            name,
            format!("{:?} contains an underscore", word),
        ));
    }
    Ok(())
}
