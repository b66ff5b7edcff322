use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::{Query, QueryRejection, WithRejection};
use libaisle::scoring;
use tracing::instrument;

use crate::api::{
  AppState,
  dto::{RankParams, RecommendPayload, RecommendResponse},
  errors::AppError,
  middlewares::json_rejection::TypedJson,
};

#[instrument(skip_all)]
pub async fn recommend(
  State(state): State<AppState>,
  WithRejection(Query(query), _): WithRejection<Query<RankParams>, QueryRejection>,
  TypedJson(body): TypedJson<RecommendPayload>,
) -> Result<(StatusCode, impl IntoResponse), AppError> {
  let limit = query.limit.min(state.config.max_limit);
  let results = scoring::get_top_recommendations(&body.vendors, &body.preferences, body.couple_location.as_ref(), limit);

  Ok((StatusCode::OK, Json(RecommendResponse { limit, results })))
}
