/// Metres per degree of latitude, constant in the equirectangular model.
pub const M_PER_DEG_LAT: f64 = 111_320.0;

/// Local flat-earth frame anchored at a reference latitude.
///
/// All distances in this system are small against Earth's radius, so an
/// equirectangular projection (x east, y north, metres) is accurate enough
/// for intercept geometry.
#[derive(Debug, Clone, Copy)]
pub struct LocalFrame {
    m_per_deg_lat: f64,
    m_per_deg_lon: f64,
}

impl LocalFrame {
    /// Builds a frame scaled for the given reference latitude.
    pub fn at(latitude: f64) -> Self {
        let mut m_per_deg_lon = M_PER_DEG_LAT * latitude.to_radians().cos();
        // Degenerates at the poles; floor it so conversions stay finite.
        if m_per_deg_lon.abs() < 1.0 {
            m_per_deg_lon = 1.0;
        }
        Self {
            m_per_deg_lat: M_PER_DEG_LAT,
            m_per_deg_lon,
        }
    }

    /// Converts a lat/lon point to (east, north) metres relative to an origin.
    pub fn to_local(&self, origin: (f64, f64), point: (f64, f64)) -> (f64, f64) {
        let x = (point.1 - origin.1) * self.m_per_deg_lon;
        let y = (point.0 - origin.0) * self.m_per_deg_lat;
        (x, y)
    }

    /// Converts (east, north) metres relative to an origin back to lat/lon.
    pub fn from_local(&self, origin: (f64, f64), xy: (f64, f64)) -> (f64, f64) {
        let lat = origin.0 + xy.1 / self.m_per_deg_lat;
        let lon = origin.1 + xy.0 / self.m_per_deg_lon;
        (lat, lon)
    }
}

/// East/north velocity components for a heading measured clockwise from
/// geographic north.
pub fn velocity_components(speed_ms: f64, heading_deg: f64) -> (f64, f64) {
    let heading_rad = heading_deg.to_radians();
    (speed_ms * heading_rad.sin(), speed_ms * heading_rad.cos())
}

/// Position after moving at constant speed and heading for `time_s` seconds.
pub fn displace(lat: f64, lon: f64, heading_deg: f64, speed_ms: f64, time_s: f64) -> (f64, f64) {
    let (v_east, v_north) = velocity_components(speed_ms, heading_deg);
    let frame = LocalFrame::at(lat);
    frame.from_local((lat, lon), (v_east * time_s, v_north * time_s))
}
