use crate::generator::scenario::{build_report_sequence, ScenarioConfig};
use aegiscore::catalog::{CatalogSnapshot, ThreatReport};
use aegiscore::engine::{select, Decision, SelectionResult};
use aegiscore::prelude::EngineError;
use aegiscore::telemetry::{DecisionLog, MetricsRecorder};
use serde::Serialize;

/// One evaluated report, ready for display or serialization. The map URL is
/// presentation plumbing and is built here, outside the decision core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionSummary {
    #[serde(flatten)]
    pub result: SelectionResult,
    pub note: String,
    pub map_url: Option<String>,
}

/// One second of an offline simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct TickSummary {
    pub second: u64,
    pub report: ThreatReport,
    pub decision: DecisionSummary,
}

/// Owns the catalog snapshot and drives reports through the decision engine,
/// recording telemetry along the way.
pub struct Runner {
    catalog: CatalogSnapshot,
    metrics: MetricsRecorder,
    log: DecisionLog,
}

impl Runner {
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self {
            catalog,
            metrics: MetricsRecorder::new(),
            log: DecisionLog::new(),
        }
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Evaluates a single radar report.
    pub fn execute(&self, report: &ThreatReport) -> anyhow::Result<DecisionSummary> {
        let result = select(report, &self.catalog).map_err(|err| {
            if matches!(err, EngineError::InvalidInput(_)) {
                self.metrics.record_rejected_input();
            }
            err
        })?;

        self.log.record(&result);

        let (note, map_url) = match &result.decision {
            Decision::Engage(candidate) => {
                self.metrics.record_engagement();
                let note = format!(
                    "Chosen cheapest feasible option; intercept point predicted \
                     from target heading and speeds ({} from {})",
                    candidate.interceptor_name, candidate.base_name
                );
                (note, Some(directions_url(report, candidate)))
            }
            Decision::NoFeasibleInterceptor => {
                self.metrics.record_no_feasible();
                (
                    "No interceptor found from available bases".to_string(),
                    None,
                )
            }
            Decision::NotEngaged => {
                self.metrics.record_not_engaged();
                (
                    format!("No interception: threat level {}", result.threat_level),
                    None,
                )
            }
        };

        Ok(DecisionSummary {
            result,
            note,
            map_url,
        })
    }

    /// Runs a whole scenario offline: every synthetic report in sequence,
    /// each evaluated independently against the same snapshot.
    pub fn run_offline(&self, scenario: &ScenarioConfig) -> anyhow::Result<Vec<TickSummary>> {
        let mut ticks = Vec::new();
        for (second, report) in build_report_sequence(scenario).into_iter().enumerate() {
            let decision = self.execute(&report)?;
            ticks.push(TickSummary {
                second: second as u64,
                report,
                decision,
            });
        }
        Ok(ticks)
    }
}

/// Directions triangle for a quick visual check: base, threat, predicted
/// intercept point.
fn directions_url(
    report: &ThreatReport,
    candidate: &aegiscore::engine::InterceptCandidate,
) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&waypoints={},{}&destination={},{}",
        candidate.base_latitude,
        candidate.base_longitude,
        report.latitude,
        report.longitude,
        candidate.intercept_latitude,
        candidate.intercept_longitude,
    )
}
