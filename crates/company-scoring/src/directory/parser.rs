use super::normalizer::{normalize_header, parse_flag, split_tags};
use crate::scoring::{CompanyId, CompanyRecord, CompanySize, VerificationStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::debug;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CompanyRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    csv_reader.set_headers(headers);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<CompanyRow>().enumerate() {
        let row = row?;
        if row.name.trim().is_empty() {
            debug!(row = index + 1, "skipping directory row without a company name");
            continue;
        }
        records.push(row.into_record(index));
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CompanyRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    registration_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    industry: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    province: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company_size: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    verification_status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_decision_maker: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    data_completeness: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    last_updated_at: Option<String>,
}

impl CompanyRow {
    fn into_record(self, index: usize) -> CompanyRecord {
        let flag = |value: &Option<String>| value.as_deref().and_then(parse_flag).unwrap_or(false);

        CompanyRecord {
            id: CompanyId(self.id.unwrap_or_else(|| format!("row-{:05}", index + 1))),
            registration_number: self.registration_number,
            industries: self.industry.as_deref().map(split_tags).unwrap_or_default(),
            province: self.province,
            company_size: self.company_size.as_deref().and_then(CompanySize::parse),
            verification_status: self
                .verification_status
                .as_deref()
                .and_then(VerificationStatus::parse),
            has_phone: flag(&self.has_phone),
            has_email: flag(&self.has_email),
            has_decision_maker: flag(&self.has_decision_maker),
            data_completeness_percent: self
                .data_completeness
                .as_deref()
                .and_then(parse_percent)
                .unwrap_or(0),
            last_updated_at: self.last_updated_at.as_deref().and_then(parse_timestamp),
            name: self.name,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts `88`, `88%` and `88.4`, clamped to 0-100.
fn parse_percent(value: &str) -> Option<u8> {
    let trimmed = value.trim().trim_end_matches('%').trim();
    let parsed = trimmed.parse::<f64>().ok().filter(|value| value.is_finite())?;
    Some(parsed.clamp(0.0, 100.0).floor() as u8)
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn percent_parsing_clamps_and_strips_suffix() {
        assert_eq!(parse_percent("88%"), Some(88));
        assert_eq!(parse_percent("140"), Some(100));
        assert_eq!(parse_percent("49.9"), Some(49));
        assert_eq!(parse_percent("n/a"), None);
    }

    #[test]
    fn timestamps_accept_rfc3339_and_plain_dates() {
        assert_eq!(
            parse_timestamp("2026-10-13T08:30:00+07:00"),
            Some(Utc.with_ymd_and_hms(2026, 10, 13, 1, 30, 0).unwrap())
        );
        assert_eq!(
            parse_timestamp("2026-01-02"),
            Some(Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("last week"), None);
    }
}
