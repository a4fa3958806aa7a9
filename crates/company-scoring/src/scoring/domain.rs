use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identifier assigned by the company directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub String);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "S", alias = "s", alias = "small")]
    Small,
    #[serde(rename = "M", alias = "m", alias = "medium")]
    Medium,
    #[serde(rename = "L", alias = "l", alias = "large")]
    Large,
}

impl CompanySize {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Accepts the size code (`S`) or the spelled-out label (`small`).
    pub fn parse(value: &str) -> Option<Self> {
        match fold_token(value).as_str() {
            "s" | "small" => Some(Self::Small),
            "m" | "medium" => Some(Self::Medium),
            "l" | "large" => Some(Self::Large),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[serde(alias = "New")]
    New,
    #[serde(alias = "NeedsVerification")]
    NeedsVerification,
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Invalid")]
    Invalid,
    #[serde(alias = "Archived")]
    Archived,
}

impl VerificationStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::New,
            Self::NeedsVerification,
            Self::Active,
            Self::Invalid,
            Self::Archived,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::NeedsVerification => "needs_verification",
            Self::Active => "active",
            Self::Invalid => "invalid",
            Self::Archived => "archived",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::NeedsVerification => "Needs Verification",
            Self::Active => "Active",
            Self::Invalid => "Invalid",
            Self::Archived => "Archived",
        }
    }

    /// Accepts snake_case codes, PascalCase variants and spaced labels.
    pub fn parse(value: &str) -> Option<Self> {
        let folded = fold_token(value);
        Self::ordered()
            .into_iter()
            .find(|status| fold_token(status.code()) == folded)
    }
}

/// Lowercases and drops separators so `NeedsVerification`, `needs_verification`
/// and `Needs Verification` compare equal.
fn fold_token(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only company snapshot supplied by the directory.
///
/// Every attribute apart from the display name may be missing; the scoring
/// engine treats a missing attribute as a non-match rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    #[serde(default)]
    pub id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default, alias = "industry", deserialize_with = "one_or_many")]
    pub industries: Vec<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub company_size: Option<CompanySize>,
    #[serde(default)]
    pub verification_status: Option<VerificationStatus>,
    #[serde(default)]
    pub has_phone: bool,
    #[serde(default)]
    pub has_email: bool,
    #[serde(default)]
    pub has_decision_maker: bool,
    #[serde(default, alias = "dataCompleteness", deserialize_with = "lenient_percent")]
    pub data_completeness_percent: u8,
    #[serde(default)]
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl CompanyRecord {
    /// Bare record with only an id and name; every signal starts absent.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CompanyId(id.into()),
            name: name.into(),
            registration_number: None,
            industries: Vec::new(),
            province: None,
            company_size: None,
            verification_status: None,
            has_phone: false,
            has_email: false,
            has_decision_maker: false,
            data_completeness_percent: 0,
            last_updated_at: None,
        }
    }

    /// Text the keyword criterion searches: name plus registration number.
    pub fn searchable_text(&self) -> String {
        match self.registration_number.as_deref() {
            Some(number) if !number.trim().is_empty() => format!("{} {}", self.name, number),
            _ => self.name.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    };

    Ok(values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PercentValue {
    Number(f64),
    Text(String),
}

/// Accepts numbers or numeric strings (`"88%"`), clamped to 0-100.
/// Anything unreadable counts as 0 rather than failing the batch.
fn lenient_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<PercentValue>::deserialize(deserializer)? {
        Some(PercentValue::Number(value)) => Some(value),
        Some(PercentValue::Text(text)) => text.trim().trim_end_matches('%').trim().parse().ok(),
        None => None,
    };

    Ok(value
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0).floor() as u8)
        .unwrap_or(0))
}
