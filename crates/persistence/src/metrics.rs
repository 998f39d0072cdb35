//! Query timing for the contact repository.

use metrics::histogram;
use std::time::Instant;

/// Histogram every repository operation reports into.
pub const QUERY_DURATION_METRIC: &str = "database_query_duration_seconds";

/// Record one operation's duration, labelled with its name and outcome.
pub fn record_query_duration(query_name: &str, outcome: &'static str, duration_secs: f64) {
    histogram!(
        QUERY_DURATION_METRIC,
        "query" => query_name.to_string(),
        "outcome" => outcome
    )
    .record(duration_secs);
}

/// Times one repository operation and records it when dropped.
///
/// Recording on drop means early returns through `?` are still measured;
/// they are labelled `outcome="error"` unless [`QueryTimer::succeed`] ran.
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
    succeeded: bool,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
            succeeded: false,
        }
    }

    /// Mark the operation as completed.
    pub fn succeed(&mut self) {
        self.succeeded = true;
    }
}

impl Drop for QueryTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        let outcome = if self.succeeded { "ok" } else { "error" };
        tracing::trace!(query = self.query_name, outcome, duration_secs = duration, "Query finished");
        record_query_duration(self.query_name, outcome, duration);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::CapturingRecorder;
    use super::*;

    #[test]
    fn test_dropped_timer_records_error_outcome() {
        let recorder = CapturingRecorder::default();
        metrics::with_local_recorder(&recorder, || {
            let _timer = QueryTimer::new("create_contact");
        });

        let samples = recorder.samples.lock().unwrap();
        assert_eq!(
            *samples,
            vec![(
                QUERY_DURATION_METRIC.to_string(),
                "create_contact".to_string(),
                "error".to_string()
            )]
        );
    }

    #[test]
    fn test_succeeded_timer_records_ok_outcome() {
        let recorder = CapturingRecorder::default();
        metrics::with_local_recorder(&recorder, || {
            let mut timer = QueryTimer::new("list_contacts");
            timer.succeed();
        });

        let samples = recorder.samples.lock().unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].1, "list_contacts");
        assert_eq!(samples[0].2, "ok");
    }

    #[test]
    fn test_timer_without_recorder_is_noop() {
        let mut timer = QueryTimer::new("count_contacts");
        timer.succeed();
    }
}
