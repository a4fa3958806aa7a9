use super::domain::CompanyRecord;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    PhonePresent,
    EmailPresent,
    DecisionMakerPresent,
    Freshness,
    Staleness,
    CompletenessPenalty,
    CompletenessBonus,
}

impl SignalKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PhonePresent => "Phone present",
            Self::EmailPresent => "Email present",
            Self::DecisionMakerPresent => "Decision-maker present",
            Self::Freshness => "Recently updated",
            Self::Staleness => "Stale record",
            Self::CompletenessPenalty => "Incomplete profile",
            Self::CompletenessBonus => "Profile completeness",
        }
    }
}

/// Query-independent adjustment applied to one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalAdjustment {
    pub signal: SignalKind,
    pub adjustment: i32,
    pub notes: String,
}

/// Fixed bonuses and penalties for record quality.
///
/// Penalties are stored as negative adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalPolicy {
    pub phone_bonus: i32,
    pub email_bonus: i32,
    pub decision_maker_bonus: i32,
    pub freshness_bonus: i32,
    pub freshness_max_age_days: i64,
    pub staleness_penalty: i32,
    pub staleness_after_days: i64,
    pub completeness_penalty: i32,
    pub completeness_penalty_below: u8,
    pub completeness_bonus_divisor: u8,
}

impl Default for SignalPolicy {
    fn default() -> Self {
        Self {
            phone_bonus: 8,
            email_bonus: 6,
            decision_maker_bonus: 10,
            freshness_bonus: 6,
            freshness_max_age_days: 90,
            staleness_penalty: -10,
            staleness_after_days: 180,
            completeness_penalty: -8,
            completeness_penalty_below: 50,
            completeness_bonus_divisor: 10,
        }
    }
}

impl SignalPolicy {
    /// Highest total a single record can earn from signals alone.
    pub fn max_attainable(&self) -> i32 {
        [
            self.phone_bonus,
            self.email_bonus,
            self.decision_maker_bonus,
            self.freshness_bonus,
            self.completeness_bonus(100),
        ]
        .into_iter()
        .map(|bonus| bonus.max(0))
        .sum()
    }

    fn completeness_bonus(&self, percent: u8) -> i32 {
        match self.completeness_bonus_divisor {
            0 => 0,
            divisor => i32::from(percent.min(100) / divisor),
        }
    }
}

pub struct SignalEvaluator<'a> {
    policy: &'a SignalPolicy,
    as_of: DateTime<Utc>,
}

impl<'a> SignalEvaluator<'a> {
    pub fn new(policy: &'a SignalPolicy, as_of: DateTime<Utc>) -> Self {
        Self { policy, as_of }
    }

    pub fn evaluate(&self, record: &CompanyRecord) -> Vec<SignalAdjustment> {
        let policy = self.policy;
        let mut adjustments = Vec::new();

        if record.has_phone {
            adjustments.push(SignalAdjustment {
                signal: SignalKind::PhonePresent,
                adjustment: policy.phone_bonus,
                notes: "reachable by phone".to_string(),
            });
        }

        if record.has_email {
            adjustments.push(SignalAdjustment {
                signal: SignalKind::EmailPresent,
                adjustment: policy.email_bonus,
                notes: "reachable by email".to_string(),
            });
        }

        if record.has_decision_maker {
            adjustments.push(SignalAdjustment {
                signal: SignalKind::DecisionMakerPresent,
                adjustment: policy.decision_maker_bonus,
                notes: "decision-maker contact on file".to_string(),
            });
        }

        if let Some(updated_at) = record.last_updated_at {
            let age = self.as_of - updated_at;
            let age_days = age.num_days();
            if age <= days(policy.freshness_max_age_days) {
                adjustments.push(SignalAdjustment {
                    signal: SignalKind::Freshness,
                    adjustment: policy.freshness_bonus,
                    notes: format!("updated {} day(s) ago", age_days.max(0)),
                });
            } else if age > days(policy.staleness_after_days) {
                adjustments.push(SignalAdjustment {
                    signal: SignalKind::Staleness,
                    adjustment: policy.staleness_penalty,
                    notes: format!(
                        "not updated for more than {} days",
                        policy.staleness_after_days
                    ),
                });
            }
        }

        let completeness = record.data_completeness_percent.min(100);
        if completeness < policy.completeness_penalty_below {
            adjustments.push(SignalAdjustment {
                signal: SignalKind::CompletenessPenalty,
                adjustment: policy.completeness_penalty,
                notes: format!(
                    "{completeness}% complete, below {}%",
                    policy.completeness_penalty_below
                ),
            });
        }

        adjustments.push(SignalAdjustment {
            signal: SignalKind::CompletenessBonus,
            adjustment: policy.completeness_bonus(completeness),
            notes: format!("{completeness}% complete"),
        });

        adjustments
    }

    pub fn total(&self, record: &CompanyRecord) -> i32 {
        self.evaluate(record)
            .iter()
            .map(|adjustment| adjustment.adjustment)
            .sum()
    }
}

/// Whole-day cutoff as a duration; out-of-range policies saturate.
fn days(count: i64) -> Duration {
    Duration::try_days(count).unwrap_or(if count < 0 { Duration::MIN } else { Duration::MAX })
}
