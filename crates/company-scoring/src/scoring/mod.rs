//! Weighted lead scoring and smart filtering for company records.
//!
//! A [`ScoringConfiguration`] is reduced to its active criteria by the
//! [`CriteriaNormalizer`]; every record is then matched ([`AttributeMatcher`]),
//! adjusted by the fixed [`SignalPolicy`] and scored by the [`ScoreAggregator`];
//! the [`RankedResultBuilder`] filters and orders the batch. Everything here is
//! pure: the only clock is the `as_of` instant the caller passes in.

mod aggregator;
pub mod criteria;
pub mod domain;
mod matcher;
mod normalizer;
mod ranking;
pub mod router;
pub mod service;
mod signals;

#[cfg(test)]
mod tests;

pub use aggregator::{normalize_score, CriterionContribution, ScoreAggregator, ScoreBreakdown};
pub use criteria::{
    CriterionKey, CriterionKind, ScoringConfiguration, ScoringCriterion, ScoringCriterionSpec,
    ScoringOptions, CRITERION_SPECS,
};
pub use domain::{CompanyId, CompanyRecord, CompanySize, VerificationStatus};
pub use matcher::AttributeMatcher;
pub use normalizer::{ActiveCriterion, ConfigurationError, CriteriaNormalizer, NormalizedCriteria};
pub use ranking::{RankedEntry, RankedResult, RankedResultBuilder, DEFAULT_PARALLEL_THRESHOLD};
pub use router::{scoring_router, RankRequest};
pub use service::{CriteriaPreview, ScoringService, ScoringServiceError};
pub use signals::{SignalAdjustment, SignalEvaluator, SignalKind, SignalPolicy};
