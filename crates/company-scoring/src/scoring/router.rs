use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::criteria::{ScoringConfiguration, ScoringOptions};
use super::domain::CompanyRecord;
use super::service::{ScoringService, ScoringServiceError};

/// Body of a ranking request. A full `configuration` takes precedence over
/// the flat filter-panel `options`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    #[serde(default)]
    pub options: ScoringOptions,
    #[serde(default)]
    pub configuration: Option<ScoringConfiguration>,
    pub companies: Vec<CompanyRecord>,
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

impl RankRequest {
    fn resolved_configuration(&mut self) -> ScoringConfiguration {
        match self.configuration.take() {
            Some(configuration) => configuration,
            None => ScoringConfiguration::from(std::mem::take(&mut self.options)),
        }
    }
}

/// Ranking requests carry whole result pages, well past axum's 2 MiB default.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Router builder exposing the ranking and criteria preview endpoints.
pub fn scoring_router(service: Arc<ScoringService>) -> Router {
    Router::new()
        .route("/api/v1/scoring/rank", post(rank_handler))
        .route("/api/v1/scoring/criteria", post(criteria_handler))
        .route("/api/v1/scoring/criteria/specs", get(specs_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(service)
}

pub(crate) async fn rank_handler(
    State(service): State<Arc<ScoringService>>,
    axum::Json(mut request): axum::Json<RankRequest>,
) -> Response {
    let configuration = request.resolved_configuration();
    let as_of = request.as_of.unwrap_or_else(Utc::now);

    match service.rank(&request.companies, &configuration, as_of) {
        Ok(result) => (StatusCode::OK, axum::Json(&result)).into_response(),
        Err(error @ ScoringServiceError::BatchTooLarge { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::PAYLOAD_TOO_LARGE, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn criteria_handler(
    State(service): State<Arc<ScoringService>>,
    axum::Json(options): axum::Json<ScoringOptions>,
) -> Response {
    let preview = service.preview(&ScoringConfiguration::from(options));
    (StatusCode::OK, axum::Json(preview)).into_response()
}

pub(crate) async fn specs_handler(State(service): State<Arc<ScoringService>>) -> Response {
    (StatusCode::OK, axum::Json(service.specs())).into_response()
}
