use super::criteria::CriterionKey;
use super::domain::{CompanyRecord, CompanySize, VerificationStatus};
use super::normalizer::ActiveCriterion;

/// Binary per-criterion matching. No partial credit, no errors: anything the
/// record lacks is simply a non-match.
pub struct AttributeMatcher;

impl AttributeMatcher {
    pub fn matches(record: &CompanyRecord, criterion: &ActiveCriterion) -> bool {
        let target = criterion.target.as_str();
        match criterion.key {
            CriterionKey::Keyword => contains_keyword(record, target),
            CriterionKey::Industrial => record
                .industries
                .iter()
                .any(|industry| equals_ignore_case(industry, target)),
            CriterionKey::Province => record
                .province
                .as_deref()
                .is_some_and(|province| equals_ignore_case(province, target)),
            CriterionKey::CompanySize => match (record.company_size, CompanySize::parse(target)) {
                (Some(actual), Some(expected)) => actual == expected,
                _ => false,
            },
            CriterionKey::VerificationStatus => {
                match (
                    record.verification_status,
                    VerificationStatus::parse(target),
                ) {
                    (Some(actual), Some(expected)) => actual == expected,
                    _ => false,
                }
            }
        }
    }
}

fn equals_ignore_case(value: &str, target: &str) -> bool {
    let value = value.trim();
    let target = target.trim();
    !target.is_empty() && value.to_lowercase() == target.to_lowercase()
}

fn contains_keyword(record: &CompanyRecord, keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    record.searchable_text().to_lowercase().contains(&needle)
}
