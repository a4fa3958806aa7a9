use super::criteria::{CriterionKey, CriterionKind, ScoringConfiguration};
use serde::Serialize;

/// Caller-facing signal that a scoring request carried nothing to score on.
///
/// Not a failure: callers fall back to the unscored (signal-only) listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no active scoring criteria")]
    #[serde(rename = "NO_ACTIVE_CRITERIA")]
    NoActiveCriteria,
}

impl ConfigurationError {
    pub const fn code(self) -> &'static str {
        match self {
            Self::NoActiveCriteria => "NO_ACTIVE_CRITERIA",
        }
    }
}

/// A criterion that survived normalization: non-blank target, weight > 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCriterion {
    pub key: CriterionKey,
    pub kind: CriterionKind,
    pub weight: f64,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCriteria {
    pub criteria: Vec<ActiveCriterion>,
    /// Informational only; normalization always uses the computed ceiling.
    pub total_active_weight: f64,
    pub minimum_score_threshold: u8,
}

impl NormalizedCriteria {
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn notice(&self) -> Option<ConfigurationError> {
        self.is_empty().then_some(ConfigurationError::NoActiveCriteria)
    }

    pub fn get(&self, key: CriterionKey) -> Option<&ActiveCriterion> {
        self.criteria.iter().find(|criterion| criterion.key == key)
    }
}

pub struct CriteriaNormalizer;

impl CriteriaNormalizer {
    /// Reduces a raw configuration to its active criteria.
    ///
    /// Weights are clamped to the key's slider maximum. When a key appears
    /// more than once the last occurrence wins, keeping the slot of the first.
    pub fn normalize(config: &ScoringConfiguration) -> NormalizedCriteria {
        let mut slots: Vec<(CriterionKey, Option<ActiveCriterion>)> = Vec::new();

        for criterion in &config.criteria {
            let spec = criterion.key.spec();
            let weight = spec.clamp_weight(criterion.weight);
            let target = criterion
                .target
                .as_deref()
                .map(str::trim)
                .filter(|target| !target.is_empty());

            let active = match target {
                Some(target) if weight > 0.0 => Some(ActiveCriterion {
                    key: criterion.key,
                    kind: spec.kind,
                    weight,
                    target: target.to_string(),
                }),
                _ => None,
            };

            match slots.iter_mut().find(|(key, _)| *key == criterion.key) {
                Some(slot) => slot.1 = active,
                None => slots.push((criterion.key, active)),
            }
        }

        let criteria: Vec<ActiveCriterion> =
            slots.into_iter().filter_map(|(_, active)| active).collect();
        let total_active_weight = criteria.iter().map(|criterion| criterion.weight).sum();

        NormalizedCriteria {
            criteria,
            total_active_weight,
            minimum_score_threshold: config.minimum_score_threshold.min(100),
        }
    }

    /// Like [`normalize`](Self::normalize) but reports an empty result as
    /// [`ConfigurationError::NoActiveCriteria`].
    pub fn require_active(
        config: &ScoringConfiguration,
    ) -> Result<NormalizedCriteria, ConfigurationError> {
        let normalized = Self::normalize(config);
        match normalized.notice() {
            Some(error) => Err(error),
            None => Ok(normalized),
        }
    }
}
