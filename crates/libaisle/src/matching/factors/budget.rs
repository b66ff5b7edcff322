use libaisle_macros::scoring_factor;

use crate::{
  matching::{Factor, weights},
  model::{BudgetFlexibility, GeoPoint, Vendor, WeddingPreferences},
};

// Estimated cost interval per price band, expressed as multiples of the
// category budget: $ through $$$$.
const PRICE_BANDS: [(f64, f64); 4] = [(0.0, 0.5), (0.4, 1.0), (0.8, 1.5), (1.2, 3.0)];

#[scoring_factor(BudgetFit, name = "budget_match")]
fn score_factor(&self, vendor: &Vendor, preferences: &WeddingPreferences, _couple: Option<&GeoPoint>) -> f64 {
  let (Some(total_budget), Some(price_range)) = (preferences.total_budget, vendor.price_range) else {
    return 50.0;
  };

  let category_budget = total_budget * weights::budget_share(&vendor.category);
  let (band_min, band_max) = PRICE_BANDS[(price_range.clamp(1, 4) - 1) as usize];
  let estimated_min = band_min * category_budget;
  let estimated_max = band_max * category_budget;

  if estimated_min <= category_budget && estimated_max <= category_budget {
    return 100.0;
  }

  let flexibility = preferences.budget_flexibility.unwrap_or_default();

  // Band straddles the budget line
  if estimated_min <= category_budget && estimated_min <= category_budget * 1.1 {
    return match flexibility {
      BudgetFlexibility::VeryFlexible => 90.0,
      BudgetFlexibility::Flexible => 75.0,
      BudgetFlexibility::Strict => 50.0,
    };
  }

  // The whole band sits above the budget
  match flexibility {
    BudgetFlexibility::VeryFlexible => 60.0,
    BudgetFlexibility::Flexible => 40.0,
    BudgetFlexibility::Strict => 20.0,
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    matching::Factor,
    model::{BudgetFlexibility, Vendor, WeddingPreferences},
  };

  #[test]
  fn neutral_without_budget_or_price_range() {
    let vendor = Vendor::builder().id("v1").category("Venues").price_range(2).build();
    let preferences = WeddingPreferences::builder().build();

    assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), 50.0);

    let vendor = Vendor::builder().id("v1").category("Venues").build();
    let preferences = WeddingPreferences::builder().total_budget(20000.0).build();

    assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), 50.0);
  }

  #[test]
  fn comfortably_affordable_band() {
    // Photographers share 0.10 of 20000 -> 2000; band 1 is [0, 1000]
    let vendor = Vendor::builder().id("v1").category("Photographers").price_range(1).build();
    let preferences = WeddingPreferences::builder().total_budget(20000.0).build();

    assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), 100.0);
  }

  #[test]
  fn band_two_stays_affordable() {
    // Band 2 is [0.4, 1.0] of the category budget, both ends within it
    let vendor = Vendor::builder().id("v1").category("Venues").price_range(2).build();
    let preferences = WeddingPreferences::builder().total_budget(30000.0).build();

    assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), 100.0);
  }

  #[test]
  fn straddling_band_depends_on_flexibility() {
    // Band 3 is [0.8, 1.5]: the minimum fits, the maximum exceeds the budget
    let vendor = Vendor::builder().id("v1").category("Caterers").price_range(3).build();

    for (flexibility, expected) in [
      (BudgetFlexibility::VeryFlexible, 90.0),
      (BudgetFlexibility::Flexible, 75.0),
      (BudgetFlexibility::Strict, 50.0),
    ] {
      let preferences = WeddingPreferences::builder().total_budget(20000.0).budget_flexibility(flexibility).build();

      assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), expected);
    }
  }

  #[test]
  fn over_budget_band_depends_on_flexibility() {
    // Band 4 is [1.2, 3.0]: entirely above the category budget
    let vendor = Vendor::builder().id("v1").category("Florists").price_range(4).build();

    for (flexibility, expected) in [
      (BudgetFlexibility::VeryFlexible, 60.0),
      (BudgetFlexibility::Flexible, 40.0),
      (BudgetFlexibility::Strict, 20.0),
    ] {
      let preferences = WeddingPreferences::builder().total_budget(20000.0).budget_flexibility(flexibility).build();

      assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), expected);
    }
  }

  #[test]
  fn unset_flexibility_is_treated_as_strict() {
    let vendor = Vendor::builder().id("v1").category("Venues").price_range(4).build();
    let preferences = WeddingPreferences::builder().total_budget(20000.0).build();

    assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), 20.0);
  }

  #[test]
  fn unknown_category_uses_default_share() {
    // Default share 0.05 of 40000 -> 2000; band 1 is [0, 1000]
    let vendor = Vendor::builder().id("v1").category("Fireworks").price_range(1).build();
    let preferences = WeddingPreferences::builder().total_budget(40000.0).build();

    assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), 100.0);
  }

  #[test]
  fn out_of_range_price_band_is_clamped() {
    let vendor = Vendor::builder().id("v1").category("Venues").price_range(9).build();
    let preferences = WeddingPreferences::builder().total_budget(20000.0).build();

    // Clamped to band 4, entirely above budget, strict by default
    assert_eq!(super::BudgetFit.score_factor(&vendor, &preferences, None), 20.0);
  }
}
