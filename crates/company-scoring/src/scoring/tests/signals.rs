use super::common::*;
use crate::scoring::{CompanyRecord, SignalEvaluator, SignalKind, SignalPolicy};
use chrono::Duration;

fn adjustments_for(record: &CompanyRecord) -> Vec<(SignalKind, i32)> {
    let policy = SignalPolicy::default();
    SignalEvaluator::new(&policy, as_of())
        .evaluate(record)
        .into_iter()
        .map(|adjustment| (adjustment.signal, adjustment.adjustment))
        .collect()
}

#[test]
fn default_policy_ceiling_is_forty() {
    assert_eq!(SignalPolicy::default().max_attainable(), 40);
}

#[test]
fn fully_contactable_fresh_record_earns_every_bonus() {
    let adjustments = adjustments_for(&logistics_company());

    assert_eq!(
        adjustments,
        vec![
            (SignalKind::PhonePresent, 8),
            (SignalKind::EmailPresent, 6),
            (SignalKind::DecisionMakerPresent, 10),
            (SignalKind::Freshness, 6),
            (SignalKind::CompletenessBonus, 8),
        ]
    );
}

#[test]
fn freshness_boundary_is_inclusive_at_ninety_days() {
    let mut record = CompanyRecord::named("c-020", "Boundary Co");
    record.data_completeness_percent = 60;

    record.last_updated_at = Some(days_ago(90));
    assert!(adjustments_for(&record).contains(&(SignalKind::Freshness, 6)));

    record.last_updated_at = Some(days_ago(91));
    let adjustments = adjustments_for(&record);
    assert!(!adjustments.iter().any(|(signal, _)| *signal == SignalKind::Freshness));
    assert!(!adjustments.iter().any(|(signal, _)| *signal == SignalKind::Staleness));
}

#[test]
fn staleness_applies_only_beyond_one_hundred_eighty_days() {
    let mut record = CompanyRecord::named("c-021", "Dormant Co");
    record.data_completeness_percent = 60;

    record.last_updated_at = Some(days_ago(180));
    assert!(!adjustments_for(&record)
        .iter()
        .any(|(signal, _)| *signal == SignalKind::Staleness));

    record.last_updated_at = Some(days_ago(181));
    assert!(adjustments_for(&record).contains(&(SignalKind::Staleness, -10)));
}

#[test]
fn future_timestamps_count_as_fresh() {
    let mut record = CompanyRecord::named("c-022", "Clock Skew Ltd");
    record.last_updated_at = Some(days_ago(-3));
    assert!(adjustments_for(&record).contains(&(SignalKind::Freshness, 6)));
}

#[test]
fn missing_timestamp_is_neither_fresh_nor_stale() {
    let record = CompanyRecord::named("c-023", "Never Touched");
    let adjustments = adjustments_for(&record);
    assert!(!adjustments
        .iter()
        .any(|(signal, _)| matches!(signal, SignalKind::Freshness | SignalKind::Staleness)));
}

#[test]
fn low_completeness_earns_penalty_and_bonus_together() {
    let record = signal_only_company("c-024", "Sparse Data Co", 40);
    let adjustments = adjustments_for(&record);

    assert!(adjustments.contains(&(SignalKind::CompletenessPenalty, -8)));
    assert!(adjustments.contains(&(SignalKind::CompletenessBonus, 4)));
}

#[test]
fn completeness_is_clamped_before_scoring() {
    let record = signal_only_company("c-025", "Overflow Co", 250);
    assert!(adjustments_for(&record).contains(&(SignalKind::CompletenessBonus, 10)));
}

#[test]
fn total_sums_every_adjustment() {
    let policy = SignalPolicy::default();
    let evaluator = SignalEvaluator::new(&policy, as_of());

    assert_eq!(evaluator.total(&logistics_company()), 38);
    assert_eq!(
        evaluator.total(&signal_only_company("c-026", "Half Done", 40)),
        8 + 6 - 8 + 4
    );
}

#[test]
fn custom_policy_ceiling_ignores_negative_bonuses() {
    let policy = SignalPolicy {
        phone_bonus: -2,
        completeness_bonus_divisor: 0,
        ..SignalPolicy::default()
    };
    assert_eq!(policy.max_attainable(), 6 + 10 + 6);
}

#[test]
fn age_cutoffs_compare_partial_days() {
    let mut record = CompanyRecord::named("c-027", "Late Evening Ltd");
    record.data_completeness_percent = 60;

    record.last_updated_at = Some(days_ago(90) - Duration::hours(23));
    let adjustments = adjustments_for(&record);
    assert!(!adjustments.iter().any(|(signal, _)| *signal == SignalKind::Freshness));
    assert!(!adjustments.iter().any(|(signal, _)| *signal == SignalKind::Staleness));

    record.last_updated_at = Some(days_ago(180) - Duration::hours(23));
    assert!(adjustments_for(&record).contains(&(SignalKind::Staleness, -10)));

    record.last_updated_at = Some(days_ago(180) - Duration::seconds(1));
    assert!(adjustments_for(&record).contains(&(SignalKind::Staleness, -10)));
}
