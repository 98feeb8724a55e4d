use aegiscore::catalog::ThreatReport;
use aegiscore::geo::LocalFrame;
use aegiscore::radar::TrackIterator;
use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial threat state for a simulated radar run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub initial_latitude: f64,
    pub initial_longitude: f64,
    pub speed_ms: f64,
    pub altitude_m: f64,
    pub heading_deg: f64,
    pub duration_seconds: u64,
    pub report_time_start: f64,
    /// Uniform per-report position jitter in metres; zero keeps the run
    /// fully deterministic.
    pub noise_m: f64,
    pub seed: u64,
    pub description: Option<String>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            initial_latitude: 56.516441,
            initial_longitude: 21.109256,
            speed_ms: 60.0,
            altitude_m: 500.0,
            heading_deg: 90.0,
            duration_seconds: 10,
            report_time_start: 0.0,
            noise_m: 0.0,
            seed: 0,
            description: None,
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn initial_report(&self) -> ThreatReport {
        ThreatReport {
            speed_ms: self.speed_ms,
            altitude_m: self.altitude_m,
            heading_deg: self.heading_deg,
            latitude: self.initial_latitude,
            longitude: self.initial_longitude,
            report_time: self.report_time_start,
        }
    }
}

/// Offline report sequence for the scenario: the exact constant-velocity
/// track, with optional seeded position jitter layered on top to imitate
/// measurement scatter.
pub fn build_report_sequence(config: &ScenarioConfig) -> Vec<ThreatReport> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let frame = LocalFrame::at(config.initial_latitude);

    TrackIterator::new(config.initial_report(), config.duration_seconds)
        .map(|report| {
            if config.noise_m <= 0.0 {
                return report;
            }
            let jitter_east = rng.gen_range(-config.noise_m..config.noise_m);
            let jitter_north = rng.gen_range(-config.noise_m..config.noise_m);
            let (latitude, longitude) = frame.from_local(
                (report.latitude, report.longitude),
                (jitter_east, jitter_north),
            );
            ThreatReport {
                latitude,
                longitude,
                ..report
            }
        })
        .collect()
}
