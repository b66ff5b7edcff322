use libaisle_macros::scoring_factor;

use crate::{
  matching::Factor,
  model::{GeoPoint, Vendor, WeddingPreferences},
};

#[scoring_factor(ReviewedRating, name = "rating")]
fn score_factor(&self, vendor: &Vendor, _preferences: &WeddingPreferences, _couple: Option<&GeoPoint>) -> f64 {
  let Some(rating) = vendor.average_rating else {
    return 50.0;
  };

  let base = (rating.clamp(0.0, 5.0) / 5.0) * 100.0;

  // Review volume either reinforces the rating or discounts it
  match vendor.review_count.unwrap_or(0) {
    count if count >= 50 => (base + 10.0).min(100.0),
    count if count >= 20 => (base + 5.0).min(100.0),
    count if count < 5 => (base - 15.0).max(0.0),
    _ => base,
  }
}
