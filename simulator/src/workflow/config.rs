use aegiscore::catalog::{AvailabilityEntry, Base, CatalogSnapshot, InterceptorType, PriceModel};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// YAML description of the reference catalog: bases, interceptor types and
/// which types each base stocks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub bases: Vec<Base>,
    pub interceptors: Vec<InterceptorType>,
    pub availability: Vec<AvailabilityEntry>,
}

impl CatalogConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading catalog config {}", path_ref.display()))?;
        let config: CatalogConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing catalog config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn into_snapshot(self) -> CatalogSnapshot {
        CatalogSnapshot::new(self.bases, self.interceptors, self.availability)
    }
}

fn base(name: &str, latitude: f64, longitude: f64) -> Base {
    Base {
        name: name.to_string(),
        latitude,
        longitude,
    }
}

fn avail(base: &str, interceptor: &str) -> AvailabilityEntry {
    AvailabilityEntry {
        base: base.to_string(),
        interceptor: interceptor.to_string(),
    }
}

/// Built-in catalog: the three Latvian bases and their stocked interceptor
/// classes. Used whenever no catalog file is supplied.
pub fn default_catalog() -> CatalogConfig {
    CatalogConfig {
        bases: vec![
            base("Liepaja", 56.5164, 21.1581),
            base("Riga", 56.9500, 24.1000),
            base("Daugavpils", 55.8750, 26.5360),
        ],
        interceptors: vec![
            InterceptorType {
                name: "Interceptor drone".to_string(),
                speed_ms: 80.0,
                range_m: 3_000.0,
                max_altitude_m: 2_000.0,
                price_model: PriceModel::Flat,
                price_value_eur: 10_000.0,
            },
            InterceptorType {
                name: "50Cal".to_string(),
                speed_ms: 900.0,
                range_m: 2_000.0,
                max_altitude_m: 2_000.0,
                price_model: PriceModel::PerShot,
                price_value_eur: 1.0,
            },
            InterceptorType {
                name: "Rocket".to_string(),
                speed_ms: 2_000.0,
                range_m: 50_000.0,
                max_altitude_m: 20_000.0,
                price_model: PriceModel::Flat,
                price_value_eur: 25_000.0,
            },
            InterceptorType {
                name: "Fighter jet".to_string(),
                speed_ms: 600.0,
                range_m: 100_000.0,
                max_altitude_m: 18_000.0,
                price_model: PriceModel::PerMinute,
                price_value_eur: 1_500.0,
            },
        ],
        availability: vec![
            avail("Liepaja", "Interceptor drone"),
            avail("Liepaja", "50Cal"),
            avail("Riga", "Interceptor drone"),
            avail("Riga", "50Cal"),
            avail("Riga", "Rocket"),
            avail("Riga", "Fighter jet"),
            avail("Daugavpils", "Interceptor drone"),
            avail("Daugavpils", "50Cal"),
            avail("Daugavpils", "Rocket"),
        ],
    }
}
