//! Shared helpers for unit and scenario tests.

use std::sync::Arc;

use crate::index::MweIndex;
use crate::mwe::Mwe;
use crate::token::Token;

/// An opened index over `text`.
pub(crate) fn open_index(text: &str) -> Arc<MweIndex> {
    let index = Arc::new(MweIndex::from_text(text));
    index.open().unwrap();
    index
}

/// A tagged token. An empty `stems` slice leaves the token unstemmed.
pub(crate) fn tok(form: &str, tag: &str, stems: &[&str]) -> Token {
    let token = Token::tagged(form, tag).unwrap();
    if stems.is_empty() {
        token
    } else {
        token.with_stems(stems.iter().copied())
    }
}

/// Results rendered as `id[position:form ...]`.
pub(crate) fn ids(mwes: &[Mwe]) -> Vec<String> {
    mwes.iter().map(|mwe| mwe.to_string()).collect()
}
