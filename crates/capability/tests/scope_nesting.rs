//! crates/capability/tests/scope_nesting.rs
//! Label stacks: nesting, innermost-first reads, and derived scopes.

use capability::{LogContext, Logger};
use model::{Label, Level, Scope};
use sink::MemorySink;

#[test]
fn labels_nest_innermost_first() {
    let mut log = LogContext::new(MemorySink::new());
    log.with_label(Label::new("user", "42"), |log| {
        log.with_label(Label::new("req", "1"), |log| {
            log.log(Level::Info, "nested").unwrap();
        });
    });

    let scope = log.sink().events()[0].scope().clone();
    let labels: Vec<&Label> = scope.iter().collect();
    assert_eq!(labels, [&Label::new("req", "1"), &Label::new("user", "42")]);
    assert_eq!(scope.head(), Some(&Label::new("req", "1")));
}

#[test]
fn scope_renders_innermost_first() {
    let mut log = LogContext::new(MemorySink::new());
    log.with_label(Label::new("user", "42"), |log| {
        log.with_label(Label::new("req", "1"), |log| {
            log.log(Level::Info, "rendered").unwrap();
        });
    });

    let rendered = log.sink().events()[0].scope().to_string();
    assert_eq!(rendered, "req=1 user=42");
}

#[test]
fn label_override_ends_with_the_region() {
    let mut log = LogContext::new(MemorySink::new());
    log.with_label(Label::new("req", "1"), |log| {
        assert_eq!(log.scope().head(), Some(&Label::new("req", "1")));
    });

    assert!(log.scope().is_empty());
    log.log(Level::Info, "unscoped").unwrap();
    assert!(log.sink().events()[0].scope().is_empty());
}

#[test]
fn with_scope_installs_a_derived_stack() {
    let mut log = LogContext::new(MemorySink::new());
    log.with_label(Label::new("user", "42"), |log| {
        // Replace rather than extend the current stack.
        log.with_scope(
            |_| Scope::new().child(Label::new("job", "reindex")),
            |log| {
                log.log(Level::Info, "rebased").unwrap();
            },
        );
        assert_eq!(log.scope().head(), Some(&Label::new("user", "42")));
    });

    let scope = log.sink().events()[0].scope();
    assert_eq!(scope.head(), Some(&Label::new("job", "reindex")));
    assert_eq!(scope.iter().count(), 1);
}

#[test]
fn events_snapshot_the_scope_at_emission_time() {
    let mut log = LogContext::new(MemorySink::new());
    log.with_label(Label::new("req", "1"), |log| {
        log.log(Level::Info, "inside").unwrap();
    });
    log.log(Level::Info, "outside").unwrap();

    let events = log.sink().events();
    assert_eq!(events[0].scope().to_string(), "req=1");
    assert!(events[1].scope().is_empty());
}
