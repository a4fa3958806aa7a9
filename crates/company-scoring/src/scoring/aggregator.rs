use super::criteria::CriterionKey;
use super::domain::CompanyRecord;
use super::matcher::AttributeMatcher;
use super::normalizer::NormalizedCriteria;
use super::signals::{SignalAdjustment, SignalEvaluator, SignalPolicy};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionContribution {
    pub matched: bool,
    pub weight: f64,
    /// Equal to `weight` when matched, otherwise exactly zero.
    pub contribution: f64,
}

/// Auditable per-company score: which criteria matched, which signals
/// applied, and how the total maps onto the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub criterion_contributions: BTreeMap<CriterionKey, CriterionContribution>,
    pub signal_adjustments: Vec<SignalAdjustment>,
    pub raw_score: f64,
    pub max_possible_score: f64,
    pub normalized_score: u8,
}

impl ScoreBreakdown {
    pub fn matched(&self, key: CriterionKey) -> bool {
        self.criterion_contributions
            .get(&key)
            .is_some_and(|contribution| contribution.matched)
    }

    pub fn signal_total(&self) -> i32 {
        self.signal_adjustments
            .iter()
            .map(|adjustment| adjustment.adjustment)
            .sum()
    }
}

/// Combines criterion matches with the injected [`SignalPolicy`].
#[derive(Debug, Clone, Default)]
pub struct ScoreAggregator {
    policy: SignalPolicy,
}

impl ScoreAggregator {
    pub fn new(policy: SignalPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SignalPolicy {
        &self.policy
    }

    /// Ceiling for a configuration: every active weight plus the best
    /// attainable signal total. Penalties never lower it.
    pub fn max_possible_score(&self, criteria: &NormalizedCriteria) -> f64 {
        criteria.total_active_weight + f64::from(self.policy.max_attainable())
    }

    pub fn score(
        &self,
        record: &CompanyRecord,
        criteria: &NormalizedCriteria,
        as_of: DateTime<Utc>,
    ) -> ScoreBreakdown {
        let mut criterion_contributions = BTreeMap::new();
        let mut matched_weight = 0.0;

        for criterion in &criteria.criteria {
            let matched = AttributeMatcher::matches(record, criterion);
            let contribution = if matched { criterion.weight } else { 0.0 };
            matched_weight += contribution;
            criterion_contributions.insert(
                criterion.key,
                CriterionContribution {
                    matched,
                    weight: criterion.weight,
                    contribution,
                },
            );
        }

        let signal_adjustments = SignalEvaluator::new(&self.policy, as_of).evaluate(record);
        let signal_total: i32 = signal_adjustments
            .iter()
            .map(|adjustment| adjustment.adjustment)
            .sum();

        let raw_score = matched_weight + f64::from(signal_total);
        let max_possible_score = self.max_possible_score(criteria);

        ScoreBreakdown {
            criterion_contributions,
            signal_adjustments,
            raw_score,
            max_possible_score,
            normalized_score: normalize_score(raw_score, max_possible_score),
        }
    }
}

/// `round(100 * clamp(raw, 0, max) / max)`, or 0 when there is no ceiling.
pub fn normalize_score(raw_score: f64, max_possible_score: f64) -> u8 {
    if !(max_possible_score.is_finite() && max_possible_score > 0.0) {
        return 0;
    }
    let raw = if raw_score.is_finite() { raw_score } else { 0.0 };
    let scaled = 100.0 * raw.clamp(0.0, max_possible_score) / max_possible_score;
    scaled.round().clamp(0.0, 100.0) as u8
}
