use serde::{Deserialize, Serialize};

/// Identifies one weighted rule in a scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKey {
    Keyword,
    Industrial,
    Province,
    CompanySize,
    VerificationStatus,
}

impl CriterionKey {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Keyword,
            Self::Industrial,
            Self::Province,
            Self::CompanySize,
            Self::VerificationStatus,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Industrial => "industrial",
            Self::Province => "province",
            Self::CompanySize => "company_size",
            Self::VerificationStatus => "verification_status",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::Industrial => "Industry",
            Self::Province => "Province",
            Self::CompanySize => "Company Size",
            Self::VerificationStatus => "Verification Status",
        }
    }

    pub const fn kind(self) -> CriterionKind {
        self.spec().kind
    }

    pub const fn spec(self) -> ScoringCriterionSpec {
        match self {
            Self::Keyword => CRITERION_SPECS[0],
            Self::Industrial => CRITERION_SPECS[1],
            Self::Province => CRITERION_SPECS[2],
            Self::CompanySize => CRITERION_SPECS[3],
            Self::VerificationStatus => CRITERION_SPECS[4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    /// Exact, case-insensitive equality against a record attribute.
    Match,
    /// Case-insensitive substring search over name and registration number.
    Keyword,
}

/// Slider bounds shared by every caller that edits a criterion weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriterionSpec {
    pub key: CriterionKey,
    pub kind: CriterionKind,
    pub max_weight: f64,
    pub step: f64,
}

pub const CRITERION_SPECS: [ScoringCriterionSpec; 5] = [
    ScoringCriterionSpec {
        key: CriterionKey::Keyword,
        kind: CriterionKind::Keyword,
        max_weight: 50.0,
        step: 5.0,
    },
    ScoringCriterionSpec {
        key: CriterionKey::Industrial,
        kind: CriterionKind::Match,
        max_weight: 50.0,
        step: 5.0,
    },
    ScoringCriterionSpec {
        key: CriterionKey::Province,
        kind: CriterionKind::Match,
        max_weight: 50.0,
        step: 5.0,
    },
    ScoringCriterionSpec {
        key: CriterionKey::CompanySize,
        kind: CriterionKind::Match,
        max_weight: 30.0,
        step: 5.0,
    },
    ScoringCriterionSpec {
        key: CriterionKey::VerificationStatus,
        kind: CriterionKind::Match,
        max_weight: 20.0,
        step: 5.0,
    },
];

impl ScoringCriterionSpec {
    pub fn table() -> &'static [ScoringCriterionSpec] {
        &CRITERION_SPECS
    }

    /// Clamps into `[0, max_weight]`; NaN and infinities collapse to zero.
    pub fn clamp_weight(&self, weight: f64) -> f64 {
        if weight.is_finite() {
            weight.clamp(0.0, self.max_weight)
        } else {
            0.0
        }
    }
}

/// One weighted rule as authored in the UI, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriterion {
    pub key: CriterionKey,
    #[serde(default)]
    pub weight: f64,
    /// Attribute value to match, or the keyword text for the keyword kind.
    #[serde(default)]
    pub target: Option<String>,
}

impl ScoringCriterion {
    pub fn new(key: CriterionKey, weight: f64, target: impl Into<String>) -> Self {
        Self {
            key,
            weight,
            target: Some(target.into()),
        }
    }

    pub fn kind(&self) -> CriterionKind {
        self.key.kind()
    }
}

/// Ordered criteria plus the inclusive minimum normalized score to keep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfiguration {
    #[serde(default)]
    pub criteria: Vec<ScoringCriterion>,
    #[serde(default)]
    pub minimum_score_threshold: u8,
}

impl ScoringConfiguration {
    pub fn with_criterion(
        mut self,
        key: CriterionKey,
        weight: f64,
        target: impl Into<String>,
    ) -> Self {
        self.criteria.push(ScoringCriterion::new(key, weight, target));
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.minimum_score_threshold = threshold;
        self
    }

    /// No criteria at all: records are ordered by intrinsic signal quality.
    pub fn intrinsic_only() -> Self {
        Self::default()
    }

    /// Four fixed attribute criteria used by the quick filter panel.
    pub fn quick_filter(
        industry: impl Into<String>,
        province: impl Into<String>,
        company_size: impl Into<String>,
        verification_status: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_criterion(CriterionKey::Industrial, 35.0, industry)
            .with_criterion(CriterionKey::Province, 25.0, province)
            .with_criterion(CriterionKey::CompanySize, 10.0, company_size)
            .with_criterion(CriterionKey::VerificationStatus, 10.0, verification_status)
    }
}

/// Flat option set posted by the smart-filter panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringOptions {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub keyword_weight: Option<f64>,
    #[serde(default)]
    pub industrial: Option<String>,
    #[serde(default)]
    pub industrial_weight: Option<f64>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub province_weight: Option<f64>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub company_size_weight: Option<f64>,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub verification_status_weight: Option<f64>,
    #[serde(default)]
    pub minimum_score_threshold: Option<f64>,
}

impl From<ScoringOptions> for ScoringConfiguration {
    fn from(options: ScoringOptions) -> Self {
        let pairs = [
            (CriterionKey::Keyword, options.keyword, options.keyword_weight),
            (
                CriterionKey::Industrial,
                options.industrial,
                options.industrial_weight,
            ),
            (
                CriterionKey::Province,
                options.province,
                options.province_weight,
            ),
            (
                CriterionKey::CompanySize,
                options.company_size,
                options.company_size_weight,
            ),
            (
                CriterionKey::VerificationStatus,
                options.verification_status,
                options.verification_status_weight,
            ),
        ];

        let criteria = pairs
            .into_iter()
            .filter(|(_, target, weight)| target.is_some() || weight.is_some())
            .map(|(key, target, weight)| ScoringCriterion {
                key,
                weight: weight.unwrap_or(0.0),
                target,
            })
            .collect();

        Self {
            criteria,
            minimum_score_threshold: threshold_from(options.minimum_score_threshold),
        }
    }
}

pub(crate) fn threshold_from(raw: Option<f64>) -> u8 {
    match raw {
        Some(value) if value.is_finite() => value.clamp(0.0, 100.0).round() as u8,
        _ => 0,
    }
}
