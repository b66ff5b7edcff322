mod matching;
mod model;

pub mod scoring;

pub mod prelude {
  pub use crate::model::{Badge, BudgetFlexibility, Confidence, GeoPoint, RecommendationScore, Vendor, VendorTier, WeddingPreferences};
  pub use crate::scoring::{calculate_vendor_match_score, get_top_recommendations};
}
