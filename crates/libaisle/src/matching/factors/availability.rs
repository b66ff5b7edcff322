use libaisle_macros::scoring_factor;

use crate::{
  matching::Factor,
  model::{GeoPoint, Vendor, WeddingPreferences},
};

#[scoring_factor(Responsiveness, name = "availability")]
fn score_factor(&self, vendor: &Vendor, _preferences: &WeddingPreferences, _couple: Option<&GeoPoint>) -> f64 {
  let base = vendor.response_rate.map(|rate| rate.clamp(0.0, 100.0)).unwrap_or(50.0);

  let Some(hours) = vendor.response_time_hours else {
    return base;
  };

  if hours <= 2.0 {
    (base + 20.0).min(100.0)
  } else if hours <= 6.0 {
    (base + 10.0).min(100.0)
  } else if hours <= 24.0 {
    (base + 5.0).min(100.0)
  } else {
    (base - 10.0).max(0.0)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    matching::Factor,
    model::{Vendor, WeddingPreferences},
  };

  fn responsive_vendor(rate: Option<f64>, hours: Option<f64>) -> Vendor {
    let mut vendor = Vendor::builder().id("v1").category("Venues").build();
    vendor.response_rate = rate;
    vendor.response_time_hours = hours;
    vendor
  }

  #[test]
  fn neutral_without_responsiveness_data() {
    let vendor = responsive_vendor(None, None);

    assert_eq!(super::Responsiveness.score_factor(&vendor, &WeddingPreferences::default(), None), 50.0);
  }

  #[test]
  fn response_time_adjustments() {
    for (hours, expected) in [(1.0, 100.0), (4.0, 90.0), (12.0, 85.0), (48.0, 70.0)] {
      let vendor = responsive_vendor(Some(80.0), Some(hours));

      assert_eq!(super::Responsiveness.score_factor(&vendor, &WeddingPreferences::default(), None), expected);
    }
  }

  #[test]
  fn missing_rate_still_gets_time_adjustment() {
    let vendor = responsive_vendor(None, Some(1.0));

    assert_eq!(super::Responsiveness.score_factor(&vendor, &WeddingPreferences::default(), None), 70.0);
  }

  #[test]
  fn score_stays_within_bounds() {
    let vendor = responsive_vendor(Some(95.0), Some(1.0));

    assert_eq!(super::Responsiveness.score_factor(&vendor, &WeddingPreferences::default(), None), 100.0);

    let vendor = responsive_vendor(Some(5.0), Some(72.0));

    assert_eq!(super::Responsiveness.score_factor(&vendor, &WeddingPreferences::default(), None), 0.0);
  }

  #[test]
  fn out_of_range_rate_is_clamped() {
    let vendor = responsive_vendor(Some(140.0), None);

    assert_eq!(super::Responsiveness.score_factor(&vendor, &WeddingPreferences::default(), None), 100.0);
  }
}
