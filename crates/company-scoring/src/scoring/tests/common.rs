use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::scoring::{
    ActiveCriterion, CompanyRecord, CompanySize, CriterionKey, ScoringConfiguration,
    VerificationStatus,
};

pub(super) fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn days_ago(days: i64) -> DateTime<Utc> {
    as_of() - Duration::days(days)
}

/// Fully contactable, recently updated logistics firm in Bangkok.
pub(super) fn logistics_company() -> CompanyRecord {
    CompanyRecord {
        registration_number: Some("0105558012345".to_string()),
        industries: vec!["Logistics".to_string()],
        province: Some("Bangkok".to_string()),
        company_size: Some(CompanySize::Medium),
        verification_status: Some(VerificationStatus::Active),
        has_phone: true,
        has_email: true,
        has_decision_maker: true,
        data_completeness_percent: 88,
        last_updated_at: Some(days_ago(5)),
        ..CompanyRecord::named("c-001", "Siam Freight Forwarding")
    }
}

pub(super) fn logistics_configuration() -> ScoringConfiguration {
    ScoringConfiguration::default()
        .with_criterion(CriterionKey::Industrial, 35.0, "Logistics")
        .with_criterion(CriterionKey::Province, 25.0, "Bangkok")
        .with_criterion(CriterionKey::CompanySize, 10.0, "M")
        .with_criterion(CriterionKey::VerificationStatus, 10.0, "Active")
}

/// Record with identical signals but chosen completeness.
pub(super) fn signal_only_company(id: &str, name: &str, completeness: u8) -> CompanyRecord {
    CompanyRecord {
        has_phone: true,
        has_email: false,
        has_decision_maker: false,
        data_completeness_percent: completeness,
        last_updated_at: Some(days_ago(30)),
        ..CompanyRecord::named(id, name)
    }
}

pub(super) fn active(key: CriterionKey, weight: f64, target: &str) -> ActiveCriterion {
    ActiveCriterion {
        key,
        kind: key.kind(),
        weight,
        target: target.to_string(),
    }
}
