use super::aggregator::{ScoreAggregator, ScoreBreakdown};
use super::criteria::ScoringConfiguration;
use super::domain::CompanyRecord;
use super::normalizer::{ConfigurationError, CriteriaNormalizer, NormalizedCriteria};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Batches of this size or larger are scored on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry<'a> {
    /// 1-based position after filtering and sorting.
    pub rank: usize,
    pub company: &'a CompanyRecord,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<ConfigurationError>,
    pub criteria: NormalizedCriteria,
    pub max_possible_score: f64,
    /// Records scored before the threshold was applied.
    pub scored: usize,
    pub entries: Vec<RankedEntry<'a>>,
}

impl RankedResult<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filtered_out(&self) -> usize {
        self.scored - self.entries.len()
    }
}

/// Scores, threshold-filters and deterministically orders a batch.
#[derive(Debug, Clone)]
pub struct RankedResultBuilder {
    aggregator: ScoreAggregator,
    parallel_threshold: usize,
}

impl Default for RankedResultBuilder {
    fn default() -> Self {
        Self::new(ScoreAggregator::default())
    }
}

impl RankedResultBuilder {
    pub fn new(aggregator: ScoreAggregator) -> Self {
        Self {
            aggregator,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn aggregator(&self) -> &ScoreAggregator {
        &self.aggregator
    }

    pub fn build<'a>(
        &self,
        companies: &'a [CompanyRecord],
        config: &ScoringConfiguration,
        as_of: DateTime<Utc>,
    ) -> RankedResult<'a> {
        let criteria = CriteriaNormalizer::normalize(config);
        let notice = criteria.notice();
        if notice.is_some() {
            warn!(
                companies = companies.len(),
                "scoring without active criteria; ranking by record signals only"
            );
        }

        let parallel = companies.len() >= self.parallel_threshold;
        let breakdowns: Vec<ScoreBreakdown> = if parallel {
            companies
                .par_iter()
                .map(|company| self.aggregator.score(company, &criteria, as_of))
                .collect()
        } else {
            companies
                .iter()
                .map(|company| self.aggregator.score(company, &criteria, as_of))
                .collect()
        };

        let threshold = criteria.minimum_score_threshold;
        let mut entries: Vec<RankedEntry<'a>> = companies
            .iter()
            .zip(breakdowns)
            .filter(|(_, breakdown)| breakdown.normalized_score >= threshold)
            .map(|(company, breakdown)| RankedEntry {
                rank: 0,
                company,
                breakdown,
            })
            .collect();

        entries.sort_by(compare_entries);
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = index + 1;
        }

        debug!(
            companies = companies.len(),
            retained = entries.len(),
            threshold,
            parallel,
            "ranked company batch"
        );

        RankedResult {
            notice,
            max_possible_score: self.aggregator.max_possible_score(&criteria),
            criteria,
            scored: companies.len(),
            entries,
        }
    }
}

/// Normalized score desc, raw score desc, then name ascending. Name ties fall
/// back to the exact name and the company id so the order is total.
pub(crate) fn compare_entries(left: &RankedEntry<'_>, right: &RankedEntry<'_>) -> Ordering {
    right
        .breakdown
        .normalized_score
        .cmp(&left.breakdown.normalized_score)
        .then_with(|| {
            right
                .breakdown
                .raw_score
                .total_cmp(&left.breakdown.raw_score)
        })
        .then_with(|| {
            left.company
                .name
                .to_lowercase()
                .cmp(&right.company.name.to_lowercase())
        })
        .then_with(|| left.company.name.cmp(&right.company.name))
        .then_with(|| left.company.id.cmp(&right.company.id))
}
