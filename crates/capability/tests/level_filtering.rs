//! crates/capability/tests/level_filtering.rs
//! Severity filtering against the default and overridden thresholds.

use capability::{LogContext, Logger};
use model::{Level, SinkEvent};
use sink::MemorySink;

fn delivered_levels(log: &LogContext<&'static str, MemorySink<&'static str>>) -> Vec<Level> {
    log.sink().events().iter().map(SinkEvent::level).collect()
}

#[test]
fn default_threshold_admits_info_and_above() {
    let mut log = LogContext::new(MemorySink::new());
    log.log(Level::Error, "error").unwrap();
    log.log(Level::Warn, "warn").unwrap();
    log.log(Level::Info, "info").unwrap();
    log.log(Level::Debug, "debug").unwrap();

    assert_eq!(
        delivered_levels(&log),
        [Level::Error, Level::Warn, Level::Info]
    );
}

#[test]
fn quiet_threshold_suppresses_everything() {
    let mut log = LogContext::new(MemorySink::new());
    log.with_level(Level::Quiet, |log| {
        log.log(Level::Error, "even errors").unwrap();
        log.log(Level::Info, "and info").unwrap();
    });

    assert!(log.sink().is_empty());
}

#[test]
fn debug_threshold_admits_everything_below_quiet() {
    let mut log = LogContext::new(MemorySink::new());
    log.with_level(Level::Debug, |log| {
        log.log(Level::Debug, "now visible").unwrap();
        log.log(Level::Quiet, "still never emitted").unwrap();
    });

    assert_eq!(delivered_levels(&log), [Level::Debug]);
}

#[test]
fn threshold_override_ends_with_the_region() {
    let mut log = LogContext::new(MemorySink::new());
    log.with_level(Level::Error, |log| {
        log.log(Level::Warn, "filtered inside").unwrap();
    });
    log.log(Level::Warn, "visible outside").unwrap();

    assert_eq!(delivered_levels(&log), [Level::Warn]);
}

#[test]
fn nested_overrides_restore_in_stack_order() {
    let mut log = LogContext::new(MemorySink::<&'static str>::new());
    log.with_level(Level::Debug, |log| {
        log.with_level(Level::Error, |log| {
            assert_eq!(log.threshold(), Level::Error);
        });
        assert_eq!(log.threshold(), Level::Debug);
    });
    assert_eq!(log.threshold(), Level::Info);
}

#[test]
fn filtered_events_leave_no_trace_in_the_sink() {
    let mut log = LogContext::new(MemorySink::with_capacity(1));
    log.log(Level::Debug, "filtered").unwrap();
    log.log(Level::Info, "kept").unwrap();

    // The filtered event did not consume the single slot.
    assert_eq!(log.sink().len(), 1);
}
