use libaisle::prelude::*;
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use validator::Validate;

#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
pub struct RankParams {
  #[serde_inline_default(10)]
  pub limit: usize,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct RecommendPayload {
  #[serde(default)]
  pub preferences: WeddingPreferences,

  #[validate(length(min = 1, message = "at least one vendor must be provided"))]
  pub vendors: Vec<Vendor>,

  #[serde(default)]
  pub couple_location: Option<GeoPoint>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct ScorePayload {
  #[serde(default)]
  pub preferences: WeddingPreferences,

  pub vendor: Vendor,

  #[serde(default)]
  pub couple_location: Option<GeoPoint>,
}

#[derive(Serialize)]
pub(super) struct RecommendResponse {
  pub limit: usize,
  pub results: Vec<RecommendationScore>,
}
