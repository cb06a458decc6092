//! Unit tests for perf module.

use inkboard::perf::{self, OperationStats, ScopedTimer};

#[test]
fn test_scoped_timer_creation() {
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_empty_stats() {
    let stats = OperationStats::default();
    assert_eq!(stats.count(), 0);
    assert_eq!(stats.average(), 0.0);
    assert_eq!(stats.p95(), 0.0);
}

#[test]
fn test_p95_picks_the_tail() {
    let mut stats = OperationStats::default();
    for ms in 1..=20 {
        stats.record(ms as f64);
    }
    assert_eq!(stats.count(), 20);
    assert_eq!(stats.p95(), 20.0);
    assert!((stats.average() - 10.5).abs() < 1e-9);
}

#[test]
fn test_timers_record_when_profiling_is_enabled() {
    let was_enabled = perf::is_profiling_enabled();
    perf::set_profiling_enabled(true);
    perf::reset_operation_stats();

    for _ in 0..3 {
        let _timer = ScopedTimer::new("perf_tests_recorded", 1000.0);
    }
    let stats = perf::operation_stats("perf_tests_recorded").expect("timers were recorded");
    assert_eq!(stats.count(), 3);

    perf::set_profiling_enabled(was_enabled);
}
