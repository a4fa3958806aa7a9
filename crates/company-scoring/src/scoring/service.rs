use super::criteria::{ScoringConfiguration, ScoringCriterionSpec};
use super::domain::CompanyRecord;
use super::normalizer::{ConfigurationError, CriteriaNormalizer, NormalizedCriteria};
use super::ranking::{RankedResult, RankedResultBuilder};
use super::{ScoreAggregator, SignalPolicy};
use crate::config::ScoringSettings;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Request/response facade over the ranking engine used by the HTTP router
/// and the command line.
pub struct ScoringService {
    builder: RankedResultBuilder,
    max_batch: usize,
}

/// What the filter panel shows before a ranking pass is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaPreview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<ConfigurationError>,
    #[serde(flatten)]
    pub criteria: NormalizedCriteria,
    pub max_possible_score: f64,
}

impl ScoringService {
    pub fn new(builder: RankedResultBuilder, max_batch: usize) -> Self {
        Self { builder, max_batch }
    }

    pub fn from_settings(settings: &ScoringSettings) -> Self {
        let builder = RankedResultBuilder::new(ScoreAggregator::new(SignalPolicy::default()))
            .with_parallel_threshold(settings.parallel_threshold);
        Self::new(builder, settings.max_batch)
    }

    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    pub fn rank<'a>(
        &self,
        companies: &'a [CompanyRecord],
        config: &ScoringConfiguration,
        as_of: DateTime<Utc>,
    ) -> Result<RankedResult<'a>, ScoringServiceError> {
        if companies.len() > self.max_batch {
            return Err(ScoringServiceError::BatchTooLarge {
                limit: self.max_batch,
                received: companies.len(),
            });
        }

        Ok(self.builder.build(companies, config, as_of))
    }

    pub fn preview(&self, config: &ScoringConfiguration) -> CriteriaPreview {
        let criteria = CriteriaNormalizer::normalize(config);
        CriteriaPreview {
            notice: criteria.notice(),
            max_possible_score: self.builder.aggregator().max_possible_score(&criteria),
            criteria,
        }
    }

    pub fn specs(&self) -> &'static [ScoringCriterionSpec] {
        ScoringCriterionSpec::table()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error("batch of {received} companies exceeds the limit of {limit}")]
    BatchTooLarge { limit: usize, received: usize },
}
