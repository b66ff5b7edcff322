use crate::model::GeoPoint;

const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two points, in miles, via the haversine
/// formula. Assumes valid decimal degrees; callers check for missing
/// coordinates before invoking.
pub(crate) fn haversine_miles(from: &GeoPoint, to: &GeoPoint) -> f64 {
  let delta_latitude = (to.latitude - from.latitude).to_radians();
  let delta_longitude = (to.longitude - from.longitude).to_radians();

  let a = (delta_latitude / 2.0).sin().powi(2) + from.latitude.to_radians().cos() * to.latitude.to_radians().cos() * (delta_longitude / 2.0).sin().powi(2);
  let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

  EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
  use float_cmp::approx_eq;

  use crate::model::GeoPoint;

  const AUSTIN: GeoPoint = GeoPoint { latitude: 30.2672, longitude: -97.7431 };
  const DALLAS: GeoPoint = GeoPoint { latitude: 32.7767, longitude: -96.7970 };

  #[test]
  fn zero_distance_for_identical_points() {
    assert!(approx_eq!(f64, super::haversine_miles(&AUSTIN, &AUSTIN), 0.0, epsilon = 1e-9));
  }

  #[test]
  fn known_city_pair() {
    let distance = super::haversine_miles(&AUSTIN, &DALLAS);

    // Austin to Dallas is roughly 182 miles as the crow flies
    assert!(distance > 175.0 && distance < 190.0, "unexpected distance: {distance}");
  }

  #[test]
  fn symmetric() {
    assert!(approx_eq!(f64, super::haversine_miles(&AUSTIN, &DALLAS), super::haversine_miles(&DALLAS, &AUSTIN), epsilon = 1e-9));
  }
}
