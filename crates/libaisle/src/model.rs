use bon::Builder;
use serde::{Deserialize, Serialize};

/// A geocoded point, in decimal degrees.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct GeoPoint {
  pub latitude: f64,
  pub longitude: f64,
}

/// How willing the couple is to consider vendors priced above their budget.
///
/// An unset flexibility is treated as [`BudgetFlexibility::Strict`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetFlexibility {
  #[default]
  Strict,
  Flexible,
  VeryFlexible,
}

/// A vendor's subscription tier on the platform.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorTier {
  #[default]
  Free,
  Basic,
  Pro,
  Premium,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Badge {
  pub badge_type: String,
}

impl Badge {
  pub fn new(badge_type: &str) -> Badge {
    Badge { badge_type: badge_type.to_string() }
  }
}

/// A candidate wedding vendor, as provided by the vendor directory.
///
/// Every commercial, reputation and geographic attribute is optional: vendors
/// self-report unevenly, and the scorers fall back to neutral sub-scores when
/// a field is missing rather than rejecting the record.
#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
#[builder(on(String, into))]
pub struct Vendor {
  pub id: String,
  #[builder(default)]
  pub business_name: String,
  pub category: String,

  // Commercial
  pub price_range: Option<u8>,
  #[builder(default)]
  pub tier: VendorTier,

  // Reputation
  pub average_rating: Option<f64>,
  pub review_count: Option<u32>,
  #[builder(default)]
  pub is_verified: bool,
  #[builder(default)]
  pub badges: Vec<Badge>,

  // Responsiveness
  pub response_rate: Option<f64>,
  pub response_time_hours: Option<f64>,

  // Geography
  pub city: Option<String>,
  pub state: Option<String>,
  pub latitude: Option<f64>,
  pub longitude: Option<f64>,

  // Style and descriptive attributes
  #[builder(default)]
  pub style_tags: Vec<String>,
  pub capacity: Option<u32>,
  #[builder(default)]
  pub specialties: Vec<String>,
  #[builder(default)]
  pub ideal_for: Vec<String>,
  pub description: Option<String>,
}

/// The couple's stated preferences for their wedding.
///
/// Per-category priorities range over 1 to 5 and default to 3; they shift the
/// blend weights toward quality and reliability factors for the categories the
/// couple cares most about.
#[derive(Builder, Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
#[builder(on(String, into))]
pub struct WeddingPreferences {
  pub total_budget: Option<f64>,
  pub budget_flexibility: Option<BudgetFlexibility>,

  #[builder(default)]
  pub wedding_style: Vec<String>,
  pub formality_level: Option<String>,
  pub color_scheme: Option<String>,
  #[builder(default)]
  pub dietary_restrictions: Vec<String>,
  #[builder(default)]
  pub must_haves: Vec<String>,
  #[builder(default)]
  pub deal_breakers: Vec<String>,

  #[builder(default)]
  pub preferred_cities: Vec<String>,
  pub max_distance_miles: Option<f64>,

  pub outdoor_indoor: Option<String>,
  pub guest_count: Option<u32>,
  pub special_requirements: Option<String>,

  #[builder(default = 3)]
  pub venue_priority: u8,
  #[builder(default = 3)]
  pub photographer_priority: u8,
  #[builder(default = 3)]
  pub caterer_priority: u8,
  #[builder(default = 3)]
  pub florist_priority: u8,
  #[builder(default = 3)]
  pub dj_priority: u8,
}

impl Default for WeddingPreferences {
  fn default() -> Self {
    WeddingPreferences {
      total_budget: None,
      budget_flexibility: None,
      wedding_style: Vec::new(),
      formality_level: None,
      color_scheme: None,
      dietary_restrictions: Vec::new(),
      must_haves: Vec::new(),
      deal_breakers: Vec::new(),
      preferred_cities: Vec::new(),
      max_distance_miles: None,
      outdoor_indoor: None,
      guest_count: None,
      special_requirements: None,
      venue_priority: 3,
      photographer_priority: 3,
      caterer_priority: 3,
      florist_priority: 3,
      dj_priority: 3,
    }
  }
}

/// How much supporting data backs a given match score.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
  Low,
  Medium,
  High,
  VeryHigh,
}

/// The ranked output for a single vendor. Never persisted; serialized
/// directly into the HTTP response by the caller.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RecommendationScore {
  pub vendor_id: String,
  pub match_score: f64,
  pub confidence_level: Confidence,

  pub budget_match_score: f64,
  pub style_match_score: f64,
  pub location_match_score: f64,
  pub rating_score: f64,
  pub availability_score: f64,
  pub popularity_score: f64,

  pub reason: String,
  pub match_highlights: Vec<String>,
  pub potential_concerns: Vec<String>,
}
