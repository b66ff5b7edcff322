use crate::model::{Confidence, Vendor};

/// Grades how much supporting data stands behind a match score. High scores
/// computed from thin vendor records are deliberately held back a tier.
pub(crate) fn grade(vendor: &Vendor, match_score: f64) -> Confidence {
  let has_good_data = vendor.review_count.unwrap_or(0) >= 10 && vendor.average_rating.is_some() && !vendor.style_tags.is_empty();

  if match_score >= 85.0 && has_good_data {
    Confidence::VeryHigh
  } else if match_score >= 75.0 && has_good_data {
    Confidence::High
  } else if match_score >= 60.0 {
    Confidence::Medium
  } else {
    Confidence::Low
  }
}
