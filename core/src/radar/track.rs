use crate::catalog::types::ThreatReport;
use crate::geo;

/// Finite, lazy sequence of synthetic radar reports for a target flying at
/// constant speed and heading: one report per simulated second, starting at
/// the initial state, for `max_seconds` ticks.
///
/// The iterator owns its state; a fresh one built from the same initial
/// report replays the identical sequence.
#[derive(Debug, Clone)]
pub struct TrackIterator {
    current: ThreatReport,
    remaining: u64,
}

impl TrackIterator {
    pub fn new(initial: ThreatReport, max_seconds: u64) -> Self {
        Self {
            current: initial,
            remaining: max_seconds,
        }
    }
}

impl Iterator for TrackIterator {
    type Item = ThreatReport;

    fn next(&mut self) -> Option<ThreatReport> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let emitted = self.current;
        let (lat, lon) = geo::displace(
            emitted.latitude,
            emitted.longitude,
            emitted.heading_deg,
            emitted.speed_ms,
            1.0,
        );
        self.current = ThreatReport {
            latitude: lat,
            longitude: lon,
            report_time: emitted.report_time + 1.0,
            ..emitted
        };
        Some(emitted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}
