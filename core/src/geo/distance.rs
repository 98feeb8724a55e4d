const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance between two WGS-84 points, in metres.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * lat1_rad.cos() * lat2_rad.cos();
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        assert_eq!(haversine_m(56.95, 24.1, 56.95, 24.1), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_m(56.0, 24.0, 57.0, 24.0);
        assert!((d - 111_195.0).abs() < 100.0, "got {}", d);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_m(56.5164, 21.1581, 56.95, 24.1);
        let ba = haversine_m(56.95, 24.1, 56.5164, 21.1581);
        assert!((ab - ba).abs() < 1e-6);
    }
}
