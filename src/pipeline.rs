//! Pipeline presets and configuration for building detector chains.
//!
//! A [`PipelineConfig`] names a detection strategy and the filters and
//! resolvers to wrap around it, in order. Configurations are plain serde
//! data and can be read from TOML:
//!
//! ```
//! use std::sync::Arc;
//! use layered_mwe::{Detector, MweIndex, PipelineConfig, Token};
//!
//! let config = PipelineConfig::from_toml_str(r#"
//!     strategy = "exhaustive"
//!
//!     [[stages]]
//!     kind = "continuity"
//!
//!     [[stages]]
//!     kind = "resolve-by-score"
//!     score = "length"
//! "#).unwrap();
//!
//! let index = Arc::new(MweIndex::from_text("world_record_N 5,0,3,1,0"));
//! index.open().unwrap();
//! let detector = config.build(index).unwrap();
//!
//! let sentence = vec![
//!     Token::tagged("world", "NN").unwrap(),
//!     Token::tagged("record", "NN").unwrap(),
//! ];
//! assert_eq!(detector.detect(&sentence).unwrap().len(), 1);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::detect::{Composite, Consecutive, Detector, DetectorExt, Exhaustive, ProperNouns};
use crate::errors::{MweError, MweResult};
use crate::filter::{
    Continuity, FenceFilter, Inflection, InflectionRule, Order, RulePosition, ScoreFilter,
};
use crate::index::MweIndex;
use crate::score::{GapVariance, Inverted, Length, MarkedRatio, MweScore, StartIndex};
use crate::stop_words::StopWords;

/// How raw candidates are assembled from the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Parts must be adjacent and in order.
    Consecutive,
    /// Discontinuous and out-of-order matches are found too.
    #[default]
    Exhaustive,
}

/// Scores a resolver stage can rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreKind {
    Length,
    StartIndex,
    GapVariance,
    MarkedRatio,
}

/// A user-supplied inflection rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub pattern: String,
    pub inflectable: Vec<RulePosition>,
}

/// One filter or resolver wrapped around the detector built so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Stage {
    Continuity,
    Order,
    Inflection {
        #[serde(default = "default_true")]
        default_rules: bool,
        #[serde(default)]
        rules: Vec<RuleConfig>,
    },
    Fence {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tags: Option<Vec<String>>,
    },
    Length {
        #[serde(default = "default_min_length")]
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    MarkedRatio {
        min: f64,
    },
    ResolveByScore {
        score: ScoreKind,
        #[serde(default)]
        invert: bool,
    },
    LongestMatch,
}

fn default_true() -> bool {
    true
}

fn default_min_length() -> usize {
    2
}

/// Describes a complete detector chain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub strategy: Strategy,
    /// Replaces the default English stop words of the exhaustive strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_words: Option<Vec<String>>,
    /// Also report runs of proper nouns.
    pub proper_nouns: bool,
    /// Filters and resolvers, innermost first.
    pub stages: Vec<Stage>,
}

impl PipelineConfig {
    /// Strict adjacency, no filtering.
    pub fn consecutive() -> Self {
        Self {
            strategy: Strategy::Consecutive,
            ..Self::default()
        }
    }

    /// All raw candidates, unfiltered and possibly overlapping.
    pub fn exhaustive() -> Self {
        Self {
            strategy: Strategy::Exhaustive,
            ..Self::default()
        }
    }

    /// Exhaustive detection, then:
    /// 1. Inflection - drop unlicensed inflected forms
    /// 2. Fence - drop MWEs spanning punctuation
    /// 3. ResolveByScore(length) - longest non-overlapping MWEs win
    pub fn standard() -> Self {
        Self {
            strategy: Strategy::Exhaustive,
            stages: vec![
                Stage::Inflection {
                    default_rules: true,
                    rules: Vec::new(),
                },
                Stage::Fence { tags: None },
                Stage::ResolveByScore {
                    score: ScoreKind::Length,
                    invert: false,
                },
            ],
            ..Self::default()
        }
    }

    /// Append a stage.
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn from_toml_str(text: &str) -> MweResult<Self> {
        toml::from_str(text).map_err(|err| config_error(err.to_string()))
    }

    pub fn to_toml_string(&self) -> MweResult<String> {
        toml::to_string(self).map_err(|err| config_error(err.to_string()))
    }

    /// Build the detector chain over `index`.
    pub fn build(&self, index: Arc<MweIndex>) -> MweResult<Box<dyn Detector>> {
        let mut detector: Box<dyn Detector> = match (self.strategy, &self.stop_words) {
            (Strategy::Consecutive, None) => Consecutive::new(index).boxed(),
            (Strategy::Consecutive, Some(_)) => {
                return Err(config_error(
                    "stop words only apply to the exhaustive strategy",
                ))
            }
            (Strategy::Exhaustive, None) => Exhaustive::new(index).boxed(),
            (Strategy::Exhaustive, Some(words)) => {
                Exhaustive::with_stop_words(index, StopWords::new(words)).boxed()
            }
        };
        if self.proper_nouns {
            detector = Composite::new(vec![detector, ProperNouns::default().boxed()]).boxed();
        }
        for stage in &self.stages {
            detector = stage.wrap(detector)?;
        }
        debug!(
            strategy = ?self.strategy,
            stages = self.stages.len(),
            proper_nouns = self.proper_nouns,
            "built MWE pipeline"
        );
        Ok(detector)
    }
}

impl Stage {
    fn wrap(&self, inner: Box<dyn Detector>) -> MweResult<Box<dyn Detector>> {
        Ok(match self {
            Stage::Continuity => inner.filtered(Continuity).boxed(),
            Stage::Order => inner.filtered(Order).boxed(),
            Stage::Inflection {
                default_rules,
                rules,
            } => {
                let mut all = if *default_rules {
                    Inflection::with_default_rules().rules().to_vec()
                } else {
                    Vec::new()
                };
                for rule in rules {
                    let rule = InflectionRule::new(&rule.pattern, rule.inflectable.clone())
                        .map_err(|err| config_error(err.to_string()))?;
                    all.push(rule);
                }
                inner.filtered(Inflection::new(all)).boxed()
            }
            Stage::Fence { tags: None } => inner.filtered(FenceFilter::default()).boxed(),
            Stage::Fence { tags: Some(tags) } => inner
                .filtered(FenceFilter::with_tags(tags.iter().cloned()))
                .boxed(),
            Stage::Length { min, max } => {
                let max = max.map_or(f64::INFINITY, |max| max as f64);
                let filter = ScoreFilter::new(Length, *min as f64, max)
                    .map_err(|err| config_error(err.to_string()))?;
                inner.filtered(filter).boxed()
            }
            Stage::MarkedRatio { min } => {
                let filter = ScoreFilter::marked_ratio(*min)
                    .map_err(|err| config_error(err.to_string()))?;
                inner.filtered(filter).boxed()
            }
            Stage::ResolveByScore { score, invert } => match score {
                ScoreKind::Length => resolve(inner, Length, *invert),
                ScoreKind::StartIndex => resolve(inner, StartIndex, *invert),
                ScoreKind::GapVariance => resolve(inner, GapVariance, *invert),
                ScoreKind::MarkedRatio => resolve(inner, MarkedRatio, *invert),
            },
            Stage::LongestMatch => inner.longest_match().boxed(),
        })
    }
}

fn resolve<S: MweScore + 'static>(
    inner: Box<dyn Detector>,
    score: S,
    invert: bool,
) -> Box<dyn Detector> {
    if invert {
        inner.resolve_by_score(Inverted(score)).boxed()
    } else {
        inner.resolve_by_score(score).boxed()
    }
}

fn config_error(message: impl Into<String>) -> MweError {
    let message = message.into();
    warn!(%message, "invalid MWE pipeline configuration");
    MweError::Config { message }
}
