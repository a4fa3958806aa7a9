use super::common::*;
use crate::scoring::{
    CompanyId, CompanyRecord, ConfigurationError, CriterionKey, RankedResult,
    RankedResultBuilder, ScoringConfiguration, VerificationStatus,
};

fn names(result: &RankedResult<'_>) -> Vec<String> {
    result
        .entries
        .iter()
        .map(|entry| entry.company.name.clone())
        .collect()
}

#[test]
fn completeness_decides_order_without_criteria() {
    let companies = vec![
        signal_only_company("c-b", "Sparse Trading", 40),
        signal_only_company("c-a", "Thorough Trading", 95),
    ];

    let result = RankedResultBuilder::default().build(
        &companies,
        &ScoringConfiguration::intrinsic_only(),
        as_of(),
    );

    assert_eq!(result.notice, Some(ConfigurationError::NoActiveCriteria));
    assert_eq!(names(&result), vec!["Thorough Trading", "Sparse Trading"]);
    let top = &result.entries[0].breakdown;
    let bottom = &result.entries[1].breakdown;
    assert!(top.normalized_score > bottom.normalized_score);
    assert_eq!(top.raw_score, 8.0 + 6.0 + 9.0);
    assert_eq!(bottom.raw_score, 8.0 + 6.0 + 4.0 - 8.0);
}

#[test]
fn ranks_are_one_based_and_contiguous() {
    let mut invalid = logistics_company();
    invalid.id = CompanyId("c-002".to_string());
    invalid.name = "Siam Freight (duplicate)".to_string();
    invalid.verification_status = Some(VerificationStatus::Invalid);
    let companies = vec![
        invalid,
        logistics_company(),
        signal_only_company("c-003", "Elsewhere Co", 70),
    ];

    let result = RankedResultBuilder::default().build(&companies, &logistics_configuration(), as_of());

    assert!(result.notice.is_none());
    let ranks: Vec<_> = result.entries.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert_eq!(result.entries[0].company.id.0, "c-001");
    assert_eq!(result.entries[0].breakdown.normalized_score, 98);
    assert_eq!(result.entries[1].breakdown.normalized_score, 90);
}

#[test]
fn threshold_is_inclusive_at_the_boundary() {
    let mut invalid = logistics_company();
    invalid.id = CompanyId("c-002".to_string());
    invalid.verification_status = Some(VerificationStatus::Invalid);
    let companies = vec![logistics_company(), invalid];

    let at_boundary = RankedResultBuilder::default().build(
        &companies,
        &logistics_configuration().with_threshold(90),
        as_of(),
    );
    assert_eq!(at_boundary.len(), 2);

    let above_boundary = RankedResultBuilder::default().build(
        &companies,
        &logistics_configuration().with_threshold(91),
        as_of(),
    );
    assert_eq!(above_boundary.len(), 1);
    assert_eq!(above_boundary.scored, 2);
    assert_eq!(above_boundary.filtered_out(), 1);
    assert_eq!(above_boundary.entries[0].rank, 1);
}

#[test]
fn threshold_of_one_hundred_can_empty_the_result() {
    let companies = vec![logistics_company()];
    let result = RankedResultBuilder::default().build(
        &companies,
        &logistics_configuration().with_threshold(100),
        as_of(),
    );
    assert!(result.is_empty());
    assert_eq!(result.scored, 1);
}

#[test]
fn ties_fall_back_to_raw_score_then_name() {
    let companies = vec![
        signal_only_company("c-3", "beta Partners", 70),
        signal_only_company("c-1", "Gamma Partners", 70),
        signal_only_company("c-2", "Alpha Partners", 70),
        signal_only_company("c-4", "Zulu Partners", 80),
    ];
    // Nothing matches, so the 240 point ceiling squeezes a one point raw
    // difference into the same normalized score.
    let config = ScoringConfiguration::default()
        .with_criterion(CriterionKey::Keyword, 50.0, "no such keyword")
        .with_criterion(CriterionKey::Industrial, 50.0, "Mining")
        .with_criterion(CriterionKey::Province, 50.0, "Nan")
        .with_criterion(CriterionKey::CompanySize, 30.0, "L")
        .with_criterion(CriterionKey::VerificationStatus, 20.0, "Active");

    let result = RankedResultBuilder::default().build(&companies, &config, as_of());

    assert_eq!(result.max_possible_score, 240.0);
    assert!(result
        .entries
        .iter()
        .all(|entry| entry.breakdown.normalized_score == 9));
    assert_eq!(
        names(&result),
        vec![
            "Zulu Partners",
            "Alpha Partners",
            "beta Partners",
            "Gamma Partners"
        ]
    );
}

#[test]
fn identical_names_are_ordered_by_id() {
    let companies = vec![
        signal_only_company("c-9", "Twin Holdings", 60),
        signal_only_company("c-1", "Twin Holdings", 60),
    ];

    let result = RankedResultBuilder::default().build(
        &companies,
        &ScoringConfiguration::intrinsic_only(),
        as_of(),
    );

    let ids: Vec<_> = result
        .entries
        .iter()
        .map(|entry| entry.company.id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["c-1", "c-9"]);
}

#[test]
fn repeated_runs_reproduce_identical_order() {
    let companies: Vec<CompanyRecord> = (0..40)
        .map(|index| {
            signal_only_company(
                &format!("c-{index:03}"),
                &format!("Company {}", index % 7),
                (index * 13 % 101) as u8,
            )
        })
        .collect();
    let builder = RankedResultBuilder::default();
    let config = ScoringConfiguration::intrinsic_only();

    let first = builder.build(&companies, &config, as_of());
    let second = builder.build(&companies, &config, as_of());

    assert_eq!(first, second);
}

#[test]
fn parallel_and_sequential_paths_agree() {
    let companies: Vec<CompanyRecord> = (0..250)
        .map(|index| {
            let mut company = signal_only_company(
                &format!("c-{index:04}"),
                &format!("Company {:03}", index % 50),
                (index * 7 % 101) as u8,
            );
            company.province = Some(if index % 3 == 0 { "Bangkok" } else { "Phuket" }.to_string());
            company.has_decision_maker = index % 4 == 0;
            company
        })
        .collect();
    let config = ScoringConfiguration::default()
        .with_criterion(CriterionKey::Province, 30.0, "bangkok")
        .with_threshold(20);

    let sequential = RankedResultBuilder::default()
        .with_parallel_threshold(usize::MAX)
        .build(&companies, &config, as_of());
    let parallel = RankedResultBuilder::default()
        .with_parallel_threshold(16)
        .build(&companies, &config, as_of());

    assert_eq!(sequential, parallel);
}

#[test]
fn empty_batch_yields_empty_result() {
    let companies: Vec<CompanyRecord> = Vec::new();
    let result = RankedResultBuilder::default().build(&companies, &logistics_configuration(), as_of());
    assert!(result.is_empty());
    assert_eq!(result.max_possible_score, 120.0);
}
