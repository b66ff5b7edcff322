use libaisle_macros::scoring_factor;

use crate::{
  matching::Factor,
  model::{GeoPoint, Vendor, VendorTier, WeddingPreferences},
};

#[scoring_factor(TierPopularity, name = "popularity")]
fn score_factor(&self, vendor: &Vendor, _preferences: &WeddingPreferences, _couple: Option<&GeoPoint>) -> f64 {
  let tier_bonus = match vendor.tier {
    VendorTier::Premium => 30.0,
    VendorTier::Pro => 20.0,
    VendorTier::Basic => 10.0,
    VendorTier::Free => 0.0,
  };

  let verified_bonus = if vendor.is_verified { 15.0 } else { 0.0 };
  let badge_bonus = (vendor.badges.len() as f64 * 5.0).min(20.0);

  (50.0 + tier_bonus + verified_bonus + badge_bonus).min(100.0)
}
