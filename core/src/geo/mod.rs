pub mod distance;
pub mod projection;

pub use distance::haversine_m;
pub use projection::{displace, LocalFrame};
