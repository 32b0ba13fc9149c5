use crate::models::School;

/// Earth's radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculate the great-circle (haversine) distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1.0 for antipodal points
    2.0 * EARTH_RADIUS_MILES * a.sqrt().min(1.0).asin()
}

/// Distance in miles between two schools
#[inline]
pub fn distance_between(a: &School, b: &School) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Crescent Valley (Corvallis) to Pendleton, roughly 230 miles
        let distance = haversine_distance(44.5846, -123.2420, 45.6721, -118.7886);
        assert!((distance - 230.0).abs() < 2.0, "Distance should be ~230mi, got {}", distance);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(haversine_distance(45.4914, -122.7837, 45.4914, -122.7837), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let there = haversine_distance(42.3165, -122.8756, 46.1823, -123.5940);
        let back = haversine_distance(46.1823, -123.5940, 42.3165, -122.8756);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points_do_not_nan() {
        let distance = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert!(distance.is_finite());
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_MILES).abs() < 1.0);
    }

    #[test]
    fn test_distance_between_schools() {
        let ontario = School::new("Ontario", "Ontario", 44.0265, -116.9629);
        let philomath = School::new("Philomath", "Philomath", 44.5401, -123.3651);

        let distance = distance_between(&ontario, &philomath);
        assert!(distance > 300.0 && distance < 330.0, "got {}", distance);
    }
}
