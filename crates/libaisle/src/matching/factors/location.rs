use libaisle_macros::scoring_factor;

use crate::{
  matching::{Factor, geo},
  model::{GeoPoint, Vendor, WeddingPreferences},
};

const DEFAULT_MAX_DISTANCE_MILES: f64 = 50.0;

#[scoring_factor(LocationProximity, name = "location_match")]
fn score_factor(&self, vendor: &Vendor, preferences: &WeddingPreferences, couple: Option<&GeoPoint>) -> f64 {
  // A vendor in one of the couple's preferred cities matches outright,
  // regardless of coordinates.
  if let Some(city) = &vendor.city
    && preferences.preferred_cities.iter().any(|preferred| preferred.eq_ignore_ascii_case(city))
  {
    return 100.0;
  }

  let (Some(couple), Some(latitude), Some(longitude)) = (couple, vendor.latitude, vendor.longitude) else {
    return 50.0;
  };

  let radius = preferences.max_distance_miles.unwrap_or(DEFAULT_MAX_DISTANCE_MILES);
  let distance = geo::haversine_miles(couple, &GeoPoint { latitude, longitude });

  if distance <= radius * 0.25 {
    100.0
  } else if distance <= radius * 0.5 {
    90.0
  } else if distance <= radius * 0.75 {
    75.0
  } else if distance <= radius {
    60.0
  } else if distance <= radius * 1.5 {
    40.0
  } else {
    20.0
  }
}
