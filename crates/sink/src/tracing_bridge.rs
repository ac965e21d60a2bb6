//! crates/sink/src/tracing_bridge.rs
//! Forwarding sink that emits events through the tracing ecosystem.

use std::fmt::Display;

use capability::{Sink, SinkFull};
use model::{Level, SinkEvent};

/// Sink that forwards every event to the [`tracing`] macros.
///
/// Severity maps one-to-one onto tracing's levels; the event's scope is
/// attached as a `scope` field rendered innermost-first, and system
/// diagnostics are flagged with a `system` field. The sink never reports
/// congestion: the active subscriber decides what to do with the event.
///
/// Available behind the `tracing` cargo feature.
///
/// # Examples
///
/// ```
/// use capability::{LogContext, Logger};
/// use model::{Label, Level};
/// use sink::TracingSink;
///
/// let mut log = LogContext::new(TracingSink::new());
/// log.with_label(Label::new("req", "1"), |log| {
///     log.log(Level::Info, "handled")
/// })?;
/// # Ok::<(), model::CongestionError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a forwarding sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn forward<P: Display>(event: &SinkEvent<P>) {
    let scope = event.scope().to_string();
    let system = event.is_system();
    let message = match event {
        SinkEvent::System(record) => record.payload().clone(),
        SinkEvent::User(record) => record.payload().to_string(),
    };
    match event.level() {
        Level::Error => tracing::error!(target: "scopelog", scope = %scope, system, "{message}"),
        Level::Warn => tracing::warn!(target: "scopelog", scope = %scope, system, "{message}"),
        Level::Info => tracing::info!(target: "scopelog", scope = %scope, system, "{message}"),
        Level::Debug => tracing::debug!(target: "scopelog", scope = %scope, system, "{message}"),
        // Events are never tagged quiet; nothing to forward if one is.
        Level::Quiet => {}
    }
}

impl<P: Display> Sink<P> for TracingSink {
    fn offer(&mut self, event: SinkEvent<P>) -> Result<(), SinkFull<P>> {
        forward(&event);
        Ok(())
    }

    fn deliver(&mut self, event: SinkEvent<P>) {
        forward(&event);
    }
}
