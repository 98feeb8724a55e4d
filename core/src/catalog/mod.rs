pub mod snapshot;
pub mod types;

pub use snapshot::CatalogSnapshot;
pub use types::{AvailabilityEntry, Base, InterceptorType, PriceModel, ThreatReport};
