use std::sync::Mutex;

/// Counter snapshot for one run of the decision loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub selections: usize,
    pub engagements: usize,
    pub no_feasible: usize,
    pub rejected_inputs: usize,
}

/// Mutex-guarded decision counters, shareable across calling contexts.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_engagement(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.selections += 1;
            metrics.engagements += 1;
        }
    }

    pub fn record_no_feasible(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.selections += 1;
            metrics.no_feasible += 1;
        }
    }

    pub fn record_not_engaged(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.selections += 1;
        }
    }

    pub fn record_rejected_input(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected_inputs += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
