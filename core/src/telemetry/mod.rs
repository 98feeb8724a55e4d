pub mod log;
pub mod metrics;

pub use log::DecisionLog;
pub use metrics::MetricsRecorder;
