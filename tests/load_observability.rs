use std::sync::{Arc, Mutex};

use cricket_analytics::ingestion::{
    load_deliveries_with, LoadContext, LoadObserver, LoadOptions, LoadStats,
};
use cricket_analytics::DataError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<String>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, error: &DataError) {
        self.failures.lock().unwrap().push(error.to_string());
    }
}

#[test]
fn observer_receives_shape_stats_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
    };

    let table = load_deliveries_with("tests/fixtures/deliveries.csv", &opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![LoadStats {
            deliveries: table.len(),
            seasons: 2,
            teams: 4,
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_on_missing_source() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
    };

    let _ = load_deliveries_with("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    assert!(obs.successes.lock().unwrap().is_empty());
    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures.len(), 1);
}
