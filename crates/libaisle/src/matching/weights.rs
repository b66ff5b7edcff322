use crate::model::WeddingPreferences;

/// Fraction of the total wedding budget conventionally spent on each vendor
/// category. Categories absent from this table fall back to
/// [`DEFAULT_BUDGET_SHARE`].
pub(crate) const CATEGORY_BUDGET_SHARES: &[(&str, f64)] = &[
  ("Venues", 0.40),
  ("Photographers", 0.10),
  ("Videographers", 0.10),
  ("Caterers", 0.25),
  ("Florists", 0.08),
  ("Bakers/Cakes", 0.03),
  ("DJs/Bands", 0.08),
  ("Hair & Makeup", 0.04),
  ("Transportation", 0.03),
  ("Planners", 0.12),
  ("Officiants", 0.02),
  ("Rentals", 0.05),
];

pub(crate) const DEFAULT_BUDGET_SHARE: f64 = 0.05;

const DEFAULT_PRIORITY: u8 = 3;

pub(crate) fn budget_share(category: &str) -> f64 {
  CATEGORY_BUDGET_SHARES.iter().find(|(name, _)| *name == category).map(|(_, share)| *share).unwrap_or(DEFAULT_BUDGET_SHARE)
}

/// The couple's 1-5 priority for a vendor category. Only the five categories
/// with a dedicated preference field participate; everything else sits at the
/// default of 3. Out-of-range stored values are clamped.
pub(crate) fn category_priority(preferences: &WeddingPreferences, category: &str) -> u8 {
  let priority = match category {
    "Venues" => preferences.venue_priority,
    "Photographers" => preferences.photographer_priority,
    "Caterers" => preferences.caterer_priority,
    "Florists" => preferences.florist_priority,
    "DJs/Bands" => preferences.dj_priority,
    _ => DEFAULT_PRIORITY,
  };

  priority.clamp(1, 5)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FactorWeights {
  pub budget: f64,
  pub style: f64,
  pub location: f64,
  pub rating: f64,
  pub availability: f64,
  pub popularity: f64,
}

impl FactorWeights {
  /// Priority-adjusted blend weights for one vendor category.
  ///
  /// Higher category priority shifts emphasis from popularity toward rating
  /// and availability. The sum intentionally drifts above 1.0 across the
  /// priority range (1.02 at priority 1, 1.10 at priority 5); the overall
  /// score is the direct weighted sum, never renormalized, capped at 100
  /// after blending.
  pub(crate) fn for_category(preferences: &WeddingPreferences, category: &str) -> FactorWeights {
    let priority_weight = f64::from(category_priority(preferences, category)) / 5.0;

    FactorWeights {
      budget: 0.25,
      style: 0.20,
      location: 0.15,
      rating: 0.15 + 0.10 * priority_weight,
      availability: 0.10 + 0.05 * priority_weight,
      popularity: 0.15 - 0.05 * priority_weight,
    }
  }
}

#[cfg(test)]
mod tests {
  use float_cmp::approx_eq;

  use super::FactorWeights;
  use crate::model::WeddingPreferences;

  #[test]
  fn budget_share_lookup() {
    assert_eq!(super::budget_share("Venues"), 0.40);
    assert_eq!(super::budget_share("Photographers"), 0.10);
    assert_eq!(super::budget_share("Officiants"), 0.02);
    assert_eq!(super::budget_share("Fireworks"), super::DEFAULT_BUDGET_SHARE);
  }

  #[test]
  fn priority_lookup_and_clamping() {
    let preferences = WeddingPreferences::builder().venue_priority(5).dj_priority(9).build();

    assert_eq!(super::category_priority(&preferences, "Venues"), 5);
    assert_eq!(super::category_priority(&preferences, "DJs/Bands"), 5);
    assert_eq!(super::category_priority(&preferences, "Photographers"), 3);
    assert_eq!(super::category_priority(&preferences, "Transportation"), 3);
  }

  #[test]
  fn priority_adjusted_weight_ranges() {
    let lowest = WeddingPreferences::builder().photographer_priority(1).build();
    let highest = WeddingPreferences::builder().photographer_priority(5).build();

    let low = FactorWeights::for_category(&lowest, "Photographers");
    let high = FactorWeights::for_category(&highest, "Photographers");

    assert!(approx_eq!(f64, low.rating, 0.17, epsilon = 1e-9));
    assert!(approx_eq!(f64, high.rating, 0.25, epsilon = 1e-9));
    assert!(approx_eq!(f64, low.availability, 0.11, epsilon = 1e-9));
    assert!(approx_eq!(f64, high.availability, 0.15, epsilon = 1e-9));
    assert!(approx_eq!(f64, low.popularity, 0.14, epsilon = 1e-9));
    assert!(approx_eq!(f64, high.popularity, 0.10, epsilon = 1e-9));

    // Fixed weights are unaffected by priority
    assert_eq!(low.budget, high.budget);
    assert_eq!(low.style, high.style);
    assert_eq!(low.location, high.location);
  }
}
