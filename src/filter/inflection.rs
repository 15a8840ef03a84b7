use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{MweError, MweResult};
use crate::filter::MweFilter;
use crate::mwe::Mwe;
use crate::token::Token;

/// A part position named relative to the length of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RulePosition {
    First,
    Last,
    At(usize),
}

impl RulePosition {
    fn resolve(self, len: usize) -> Option<usize> {
        match self {
            RulePosition::First => (len > 0).then_some(0),
            RulePosition::Last => len.checked_sub(1),
            RulePosition::At(index) => (index < len).then_some(index),
        }
    }
}

/// Allows inflection of certain parts of MWEs whose tag sequence matches a
/// pattern.
///
/// The pattern is matched against the POS tags of the MWE's tokens in part
/// order, joined with single spaces, e.g. `"VBD RP"`.
#[derive(Debug, Clone)]
pub struct InflectionRule {
    pattern: Regex,
    inflectable: Vec<RulePosition>,
}

impl InflectionRule {
    pub fn new(pattern: &str, inflectable: Vec<RulePosition>) -> MweResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|err| MweError::invalid_argument("pattern", err.to_string()))?;
        Ok(Self {
            pattern,
            inflectable,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn inflectable(&self) -> &[RulePosition] {
        &self.inflectable
    }

    /// Whether the MWE's tags match and only inflectable parts are inflected.
    /// An untagged member never matches.
    pub fn allows(&self, mwe: &Mwe) -> bool {
        let tags: Option<Vec<&str>> = mwe
            .members_by_part()
            .iter()
            .map(|member| member.token.tag())
            .collect();
        let tags = match tags {
            Some(tags) => tags.join(" "),
            None => return false,
        };
        if !self.pattern.is_match(&tags) {
            return false;
        }
        let len = mwe.len();
        let allowed: Vec<usize> = self
            .inflectable
            .iter()
            .filter_map(|position| position.resolve(len))
            .collect();
        mwe.inflected_parts()
            .iter()
            .all(|part| allowed.contains(part))
    }
}

// Plural nouns inflect their head; verbs inflect their first word.
static DEFAULT_RULES: Lazy<Vec<InflectionRule>> = Lazy::new(|| {
    vec![
        InflectionRule {
            pattern: Regex::new(r"^(?:\S+ )+NNP?S$").expect("Invalid plural noun rule"),
            inflectable: vec![RulePosition::Last],
        },
        InflectionRule {
            pattern: Regex::new(r"^VB[DGNPZ]?(?: \S+)+$").expect("Invalid verb rule"),
            inflectable: vec![RulePosition::First],
        },
    ]
});

/// Drops inflected MWEs whose surface form is neither a registered
/// inflection of the root nor allowed by a rule.
#[derive(Debug, Clone)]
pub struct Inflection {
    rules: Vec<InflectionRule>,
}

impl Default for Inflection {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl Inflection {
    /// Only registered inflections are accepted, plus whatever `rules` allow.
    pub fn new(rules: Vec<InflectionRule>) -> Self {
        Self { rules }
    }

    /// Plural nouns may inflect their last part; verbs their first.
    pub fn with_default_rules() -> Self {
        Self::new(DEFAULT_RULES.clone())
    }

    pub fn rules(&self) -> &[InflectionRule] {
        &self.rules
    }
}

impl MweFilter for Inflection {
    fn keep(&self, mwe: &Mwe, _sentence: &[Token]) -> bool {
        if !mwe.is_inflected() {
            return true;
        }
        if mwe.entry().root().inflection(&mwe.surface_form()).is_some() {
            return true;
        }
        self.rules.iter().any(|rule| rule.allows(mwe))
    }

    fn name(&self) -> &'static str {
        "inflection"
    }
}
