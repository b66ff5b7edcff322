pub(crate) mod confidence;
pub(crate) mod explain;
pub(crate) mod factors;
pub(crate) mod geo;
pub(crate) mod weights;

use crate::model::{GeoPoint, Vendor, WeddingPreferences};

/// One of the six factor scorers composing the overall match score.
///
/// Factors are pure: a vendor/preferences pair (plus the optional geocoded
/// couple location) always maps to the same 0-100 sub-score, with 50 as the
/// neutral fallback when the inputs carry too little data to judge.
pub trait Factor {
  fn name(&self) -> &'static str;
  fn score_factor(&self, vendor: &Vendor, preferences: &WeddingPreferences, couple: Option<&GeoPoint>) -> f64;
}

/// The six named sub-scores, already rounded to two decimal places.
pub(crate) struct Subscores {
  pub budget: f64,
  pub style: f64,
  pub location: f64,
  pub rating: f64,
  pub availability: f64,
  pub popularity: f64,
}
