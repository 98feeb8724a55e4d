//! Threat-evaluation and intercept-planning core for the air-defence platform.
//!
//! The modules cover the pure decision path — classify a radar report, solve
//! the pursuit-intercept geometry against every stocked interceptor, and pick
//! the cheapest feasible engagement — plus the synthetic radar track
//! generator that feeds the same path once per second.

pub mod catalog;
pub mod engine;
pub mod geo;
pub mod prelude;
pub mod radar;
pub mod telemetry;

pub use prelude::{EngineError, EngineResult};
