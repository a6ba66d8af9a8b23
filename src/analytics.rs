//! Fire-and-forget instrumentation hooks.

use std::sync::Mutex;

/// Receives form interaction events.
///
/// Implementations must never block or fail the caller; a submission outcome
/// is reported here but never depends on it.
pub trait Tracker: Send + Sync {
    /// Records one named event with its properties.
    fn track(&self, event: &str, properties: &[(&str, &str)]);
}

/// Default tracker: emits one `tracing` line per event.
#[derive(Debug, Default)]
pub struct LogTracker;

impl Tracker for LogTracker {
    fn track(&self, event: &str, properties: &[(&str, &str)]) {
        tracing::info!(target: "leadform::analytics", event, ?properties, "event tracked");
    }
}

/// Tracker that keeps events in memory, for hosts that batch-forward them and
/// for tests.
#[derive(Debug, Default)]
pub struct MemoryTracker {
    events: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl MemoryTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every event recorded so far, in order.
    pub fn events(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Returns just the event names, in order.
    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|(name, _)| name).collect()
    }
}

impl Tracker for MemoryTracker {
    fn track(&self, event: &str, properties: &[(&str, &str)]) {
        let properties = properties
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((event.to_string(), properties));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_tracker_records_in_order() {
        let tracker = MemoryTracker::new();
        tracker.track("form_field_focused", &[("field", "email")]);
        tracker.track("form_submitted_successfully", &[]);
        assert_eq!(
            tracker.names(),
            vec!["form_field_focused", "form_submitted_successfully"]
        );
        assert_eq!(
            tracker.events()[0].1,
            vec![("field".to_string(), "email".to_string())]
        );
    }

    #[test]
    fn log_tracker_never_fails() {
        LogTracker.track("form_submission_error", &[("error", "Bad lead")]);
    }
}
