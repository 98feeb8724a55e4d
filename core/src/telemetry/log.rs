use crate::engine::selection::{Decision, SelectionResult};
use log::{info, warn};

/// Structured log lines for engagement decisions.
pub struct DecisionLog;

impl DecisionLog {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, result: &SelectionResult) {
        match &result.decision {
            Decision::Engage(candidate) => info!(
                "engage: {} from {} in {:.1}s for {:.2} EUR",
                candidate.interceptor_name,
                candidate.base_name,
                candidate.time_to_intercept_s,
                candidate.cost_eur
            ),
            Decision::NoFeasibleInterceptor => {
                warn!("no feasible interceptor for {} track", result.threat_level)
            }
            Decision::NotEngaged => {
                info!("not engaged: threat level {}", result.threat_level)
            }
        }
    }
}

impl Default for DecisionLog {
    fn default() -> Self {
        Self::new()
    }
}
