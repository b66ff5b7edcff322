use std::time::Instant;

use itertools::Itertools;
use metrics::histogram;
use tracing::instrument;

use crate::{
  matching::{
    Factor, Subscores, confidence, explain,
    factors::{
      availability::Responsiveness, budget::BudgetFit, location::LocationProximity, popularity::TierPopularity, rating::ReviewedRating,
      style::StyleOverlap,
    },
    weights::FactorWeights,
  },
  model::{GeoPoint, RecommendationScore, Vendor, WeddingPreferences},
};

fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

fn score_with<F: Factor>(factor: &F, vendor: &Vendor, preferences: &WeddingPreferences, couple: Option<&GeoPoint>) -> f64 {
  let value = factor.score_factor(vendor, preferences, couple);

  tracing::trace!(factor = factor.name(), value, "computed factor score");

  round2(value)
}

/// Scores one vendor against the couple's preferences.
///
/// Pure and deterministic: identical inputs always produce an identical
/// [`RecommendationScore`]. Missing vendor data degrades the affected factor
/// to its neutral 50, never to an error.
#[instrument(name = "score_vendor", skip_all, fields(vendor_id = vendor.id))]
pub fn calculate_vendor_match_score(vendor: &Vendor, preferences: &WeddingPreferences, couple: Option<&GeoPoint>) -> RecommendationScore {
  let started = Instant::now();

  let subscores = Subscores {
    budget: score_with(&BudgetFit, vendor, preferences, couple),
    style: score_with(&StyleOverlap, vendor, preferences, couple),
    location: score_with(&LocationProximity, vendor, preferences, couple),
    rating: score_with(&ReviewedRating, vendor, preferences, couple),
    availability: score_with(&Responsiveness, vendor, preferences, couple),
    popularity: score_with(&TierPopularity, vendor, preferences, couple),
  };

  let weights = FactorWeights::for_category(preferences, &vendor.category);

  // The priority-adjusted weights can sum above 1, so the blend must be
  // capped to keep the overall score within [0, 100]
  let match_score = round2(
    subscores.budget * weights.budget
      + subscores.style * weights.style
      + subscores.location * weights.location
      + subscores.rating * weights.rating
      + subscores.availability * weights.availability
      + subscores.popularity * weights.popularity,
  )
  .min(100.0);

  let confidence_level = confidence::grade(vendor, match_score);
  let explanation = explain::annotate(vendor, preferences, &subscores, match_score);

  histogram!("aisle_scoring_scores").record(match_score);
  histogram!("aisle_scoring_latency_seconds").record(started.elapsed().as_secs_f64());

  RecommendationScore {
    vendor_id: vendor.id.clone(),
    match_score,
    confidence_level,
    budget_match_score: subscores.budget,
    style_match_score: subscores.style,
    location_match_score: subscores.location,
    rating_score: subscores.rating,
    availability_score: subscores.availability,
    popularity_score: subscores.popularity,
    reason: explanation.reason,
    match_highlights: explanation.highlights,
    potential_concerns: explanation.concerns,
  }
}

/// Scores every candidate and returns the best `limit` matches, highest
/// first. Ties on the overall score fall back to ascending vendor id so
/// repeated calls return a stable ordering.
#[instrument(name = "rank_vendors", skip_all, fields(candidates = vendors.len(), limit))]
pub fn get_top_recommendations(vendors: &[Vendor], preferences: &WeddingPreferences, couple: Option<&GeoPoint>, limit: usize) -> Vec<RecommendationScore> {
  vendors
    .iter()
    .map(|vendor| calculate_vendor_match_score(vendor, preferences, couple))
    .sorted_by(|a, b| b.match_score.total_cmp(&a.match_score).then_with(|| a.vendor_id.cmp(&b.vendor_id)))
    .take(limit)
    .collect()
}
