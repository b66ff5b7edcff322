use libaisle_macros::scoring_factor;

use crate::{
  matching::Factor,
  model::{GeoPoint, Vendor, WeddingPreferences},
};

#[scoring_factor(StyleOverlap, name = "style_match")]
fn score_factor(&self, vendor: &Vendor, preferences: &WeddingPreferences, _couple: Option<&GeoPoint>) -> f64 {
  if preferences.wedding_style.is_empty() || vendor.style_tags.is_empty() {
    return 50.0;
  }

  let matched = preferences
    .wedding_style
    .iter()
    .filter(|style| vendor.style_tags.iter().any(|tag| tag.eq_ignore_ascii_case(style)))
    .count();

  let fraction = matched as f64 / preferences.wedding_style.len() as f64;

  if fraction >= 1.0 {
    100.0
  } else if fraction >= 0.5 {
    80.0 + (fraction - 0.5) * 40.0
  } else if fraction > 0.0 {
    60.0 + fraction * 40.0
  } else {
    30.0
  }
}
