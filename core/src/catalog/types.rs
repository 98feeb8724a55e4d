use crate::prelude::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Upper bounds on what a radar report may plausibly describe. Anything past
/// these is treated as sensor garbage rather than a classifiable track.
const MAX_SPEED_MS: f64 = 12_000.0;
const MAX_ALTITUDE_M: f64 = 100_000.0;

/// One observed kinematic state of an airborne object.
///
/// Reports are immutable; every new observation is an independent value and
/// no state carries over between decisions made from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreatReport {
    pub speed_ms: f64,
    pub altitude_m: f64,
    /// Clockwise from geographic north, degrees.
    pub heading_deg: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Seconds; the core only ever advances it, never interprets it.
    pub report_time: f64,
}

impl ThreatReport {
    /// Rejects reports the engine must not silently classify: non-finite
    /// numbers, coordinates off the globe, or speeds/altitudes beyond any
    /// physical airborne object. Negative finite speed or altitude is left
    /// to the classification rules.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("speed_ms", self.speed_ms),
            ("altitude_m", self.altitude_m),
            ("heading_deg", self.heading_deg),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("report_time", self.report_time),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(EngineError::InvalidInput(format!(
                    "{} is not finite: {}",
                    name, value
                )));
            }
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(EngineError::InvalidInput(format!(
                "latitude out of range: {}",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(EngineError::InvalidInput(format!(
                "longitude out of range: {}",
                self.longitude
            )));
        }
        if self.speed_ms.abs() > MAX_SPEED_MS {
            return Err(EngineError::InvalidInput(format!(
                "speed beyond sane envelope: {} m/s",
                self.speed_ms
            )));
        }
        if self.altitude_m > MAX_ALTITUDE_M {
            return Err(EngineError::InvalidInput(format!(
                "altitude beyond sane envelope: {} m",
                self.altitude_m
            )));
        }
        Ok(())
    }
}

/// A fixed defence base that can launch interceptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Billing rule applied to a feasible engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceModel {
    Flat,
    PerMinute,
    PerShot,
}

/// An interceptor class with its kinematic envelope and price tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterceptorType {
    pub name: String,
    pub speed_ms: f64,
    pub range_m: f64,
    pub max_altitude_m: f64,
    pub price_model: PriceModel,
    pub price_value_eur: f64,
}

/// By-name link between a base and an interceptor class it stocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub base: String,
    pub interceptor: String,
}
