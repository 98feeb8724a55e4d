use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete danger classification of an observed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    NotThreat,
    Caution,
    Threat,
    PotentialThreat,
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThreatLevel::NotThreat => "NOT_THREAT",
            ThreatLevel::Caution => "CAUTION",
            ThreatLevel::Threat => "THREAT",
            ThreatLevel::PotentialThreat => "POTENTIAL_THREAT",
        };
        f.write_str(label)
    }
}

/// Classifies a track from speed and altitude thresholds.
///
/// Rule order matters and all comparisons are strict, so values exactly on a
/// boundary fall through to later rules: speed 15.0 at altitude 200.0 is
/// POTENTIAL_THREAT, not CAUTION.
pub fn classify(speed_ms: f64, altitude_m: f64) -> ThreatLevel {
    if speed_ms < 15.0 || altitude_m < 200.0 {
        return ThreatLevel::NotThreat;
    }
    if speed_ms > 50.0 {
        return ThreatLevel::Threat;
    }
    if speed_ms > 15.0 {
        return ThreatLevel::Caution;
    }
    ThreatLevel::PotentialThreat
}
