use chrono::{DateTime, NaiveDate, Utc};
use company_scoring::error::AppError;
use company_scoring::scoring::{ScoringConfiguration, ScoringOptions};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Accepts RFC 3339 instants or a plain `YYYY-MM-DD` (midnight UTC).
pub(crate) fn parse_as_of(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("failed to parse '{raw}' as RFC 3339 or YYYY-MM-DD"))
}

/// Reads filter-panel options from a JSON file; no file means no criteria.
pub(crate) fn load_configuration(path: Option<&Path>) -> Result<ScoringConfiguration, AppError> {
    let Some(path) = path else {
        return Ok(ScoringConfiguration::intrinsic_only());
    };

    let raw = std::fs::read_to_string(path)?;
    let options: ScoringOptions = serde_json::from_str(&raw)?;
    Ok(ScoringConfiguration::from(options))
}
