use axum::{Json, http::StatusCode, response::IntoResponse};
use libaisle::scoring;
use tracing::instrument;

use crate::api::{dto::ScorePayload, errors::AppError, middlewares::json_rejection::TypedJson};

#[instrument(skip_all)]
pub async fn score_vendor(TypedJson(body): TypedJson<ScorePayload>) -> Result<(StatusCode, impl IntoResponse), AppError> {
  let score = scoring::calculate_vendor_match_score(&body.vendor, &body.preferences, body.couple_location.as_ref());

  Ok((StatusCode::OK, Json(score)))
}
