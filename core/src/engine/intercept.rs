use crate::geo::projection::{velocity_components, LocalFrame};

/// Coefficient magnitude below which the quadratic degenerates to linear.
const DEGENERACY_EPS: f64 = 1e-9;

/// Earliest geometric intercept of a constant-velocity target by a
/// constant-speed interceptor launched from a fixed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptSolution {
    pub latitude: f64,
    pub longitude: f64,
    pub time_to_intercept_s: f64,
    /// Straight-line distance flown by the interceptor, `speed * t`.
    pub distance_m: f64,
}

/// Solves the pursuit geometry: the target moves from `(target_lat,
/// target_lon)` at `target_speed_ms` along `target_heading_deg`; the
/// interceptor flies straight from `(launch_lat, launch_lon)` at
/// `interceptor_speed_ms`. Returns the earliest intercept, or `None` when the
/// target cannot be caught at that speed.
///
/// With the target at `P(t) = P0 + V t` and launch point `L`, requiring
/// `|P(t) - L| = s t` and squaring gives
/// `(|V|² - s²) t² + 2 (P0 - L)·V t + |P0 - L|² = 0`; the smallest
/// non-negative root is the answer. `t = 0` (target directly over the launch
/// point) is a valid intercept at the launch point itself.
///
/// Envelope limits (interceptor range, altitude ceiling) are the selection
/// engine's concern, not the solver's.
pub fn solve(
    target_lat: f64,
    target_lon: f64,
    target_speed_ms: f64,
    target_heading_deg: f64,
    launch_lat: f64,
    launch_lon: f64,
    interceptor_speed_ms: f64,
) -> Option<InterceptSolution> {
    let frame = LocalFrame::at(target_lat);
    let (x0, y0) = frame.to_local((launch_lat, launch_lon), (target_lat, target_lon));
    let (v_east, v_north) = velocity_components(target_speed_ms, target_heading_deg);

    let a = (v_east * v_east + v_north * v_north)
        - interceptor_speed_ms * interceptor_speed_ms;
    let b = 2.0 * (x0 * v_east + y0 * v_north);
    let c = x0 * x0 + y0 * y0;

    let t = smallest_non_negative_root(a, b, c)?;

    let (x, y) = (x0 + v_east * t, y0 + v_north * t);
    let (latitude, longitude) = frame.from_local((launch_lat, launch_lon), (x, y));

    Some(InterceptSolution {
        latitude,
        longitude,
        time_to_intercept_s: t,
        distance_m: interceptor_speed_ms * t,
    })
}

/// Smallest t >= 0 solving `a t² + b t + c = 0`, treating |a| below the
/// degeneracy threshold as the linear equation `b t + c = 0`.
fn smallest_non_negative_root(a: f64, b: f64, c: f64) -> Option<f64> {
    if a.abs() < DEGENERACY_EPS {
        // Target and interceptor speeds match; the squared condition is linear.
        if b.abs() < DEGENERACY_EPS {
            return (c.abs() < DEGENERACY_EPS).then_some(0.0);
        }
        let t = -c / b;
        return (t >= 0.0).then_some(t);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);

    match (t1 >= 0.0, t2 >= 0.0) {
        (true, true) => Some(t1.min(t2)),
        (true, false) => Some(t1),
        (false, true) => Some(t2),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::haversine_m;

    #[test]
    fn stationary_target_time_is_distance_over_speed() {
        // Target ~1 km north of the launch point, not moving.
        let launch = (56.95, 24.1);
        let target = (56.95 + 1000.0 / 111_320.0, 24.1);
        let solution = solve(target.0, target.1, 0.0, 0.0, launch.0, launch.1, 100.0).unwrap();
        assert!((solution.time_to_intercept_s - 10.0).abs() < 1e-6);
        assert!((solution.distance_m - 1000.0).abs() < 1e-3);
        // Intercept point is the target's (fixed) position.
        assert!(haversine_m(solution.latitude, solution.longitude, target.0, target.1) < 1.0);
    }

    #[test]
    fn equal_speed_receding_target_is_uncatchable() {
        // Target 1 km north, flying due north at the interceptor's own speed.
        let target_lat = 56.95 + 1000.0 / 111_320.0;
        let result = solve(target_lat, 24.1, 300.0, 0.0, 56.95, 24.1, 300.0);
        assert!(result.is_none());
    }

    #[test]
    fn equal_speed_head_on_uses_linear_branch() {
        // Same speeds, target flying south back toward the launch point:
        // closure is 600 m/s over 1200 m, so t = 2 s exactly.
        let target_lat = 56.95 + 1200.0 / 111_320.0;
        let solution = solve(target_lat, 24.1, 300.0, 180.0, 56.95, 24.1, 300.0).unwrap();
        assert!((solution.time_to_intercept_s - 2.0).abs() < 1e-9);
        assert!((solution.distance_m - 600.0).abs() < 1e-6);
    }

    #[test]
    fn target_over_launch_point_intercepts_immediately() {
        let solution = solve(56.95, 24.1, 400.0, 45.0, 56.95, 24.1, 300.0).unwrap();
        assert_eq!(solution.time_to_intercept_s, 0.0);
        assert_eq!(solution.distance_m, 0.0);
        assert_eq!((solution.latitude, solution.longitude), (56.95, 24.1));
    }

    #[test]
    fn fast_receding_target_has_no_real_root() {
        // Target 1 km east flying east at 900 m/s; an 80 m/s interceptor
        // never closes.
        let frame_lon = 24.1 + 1000.0 / (111_320.0 * 56.95_f64.to_radians().cos());
        let result = solve(56.95, frame_lon, 900.0, 90.0, 56.95, 24.1, 80.0);
        assert!(result.is_none());
    }

    #[test]
    fn two_positive_roots_yield_the_earlier_meet() {
        // Approaching faster target: the quadratic has two positive roots
        // (meet head-on, or let it pass and be met again behind the
        // launcher); the solver must take the earlier one, t = 1000 / 580 s.
        let frame_lon = 24.1 + 1000.0 / (111_320.0 * 56.95_f64.to_radians().cos());
        let solution = solve(56.95, frame_lon, 500.0, 270.0, 56.95, 24.1, 80.0).unwrap();
        assert!((solution.time_to_intercept_s - 1000.0 / 580.0).abs() < 1e-3);
        assert!(solution.time_to_intercept_s < 2.0);
    }

    #[test]
    fn head_on_meet_from_three_km() {
        // Target 3 km out flying straight at the launcher at 60 m/s with an
        // 80 m/s interceptor: combined closure 140 m/s, t = 3000 / 140 s.
        let frame_lon = 24.1 - 3000.0 / (111_320.0 * 56.95_f64.to_radians().cos());
        let solution = solve(56.95, frame_lon, 60.0, 90.0, 56.95, 24.1, 80.0).unwrap();
        assert!((solution.time_to_intercept_s - 3000.0 / 140.0).abs() < 0.05);
    }
}
