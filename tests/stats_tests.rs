// Host-side tests for frame-cost statistics.

use field_core::FrameStats;
use std::time::Duration;

#[test]
fn reports_once_per_interval() {
    let mut stats = FrameStats::new(3);
    assert!(stats.record(Duration::from_millis(1), 10).is_none());
    assert!(stats.record(Duration::from_millis(2), 20).is_none());
    let report = stats
        .record(Duration::from_millis(3), 30)
        .expect("third frame reports");
    assert_eq!(report.frames, 3);
    assert_eq!(report.mean, Duration::from_millis(2));
    assert_eq!(report.worst, Duration::from_millis(3));
    assert!((report.mean_links - 20.0).abs() < 1e-6);

    // Counters start over after a report
    assert!(stats.record(Duration::from_millis(9), 0).is_none());
}

#[test]
fn budget_check_uses_mean() {
    let mut stats = FrameStats::new(2);
    stats.record(Duration::from_millis(1), 0);
    let report = stats.record(Duration::from_millis(7), 0).expect("report");
    assert!(report.over_budget(Duration::from_millis(3)));
    assert!(!report.over_budget(Duration::from_millis(4)));
}

#[test]
fn zero_interval_reports_every_frame() {
    let mut stats = FrameStats::new(0);
    assert!(stats.record(Duration::from_micros(500), 1).is_some());
}
