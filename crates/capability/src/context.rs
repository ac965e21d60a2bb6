//! crates/capability/src/context.rs
//! The concrete context carrier binding a sink to the capability.

use std::marker::PhantomData;

use model::{CongestionError, Level, Policy, Record, Scope, SinkEvent};

use crate::config::LogConfig;
use crate::logger::Logger;
use crate::sink::Sink;

/// Context carrier: the current threshold, scope, and policy of a logging
/// session together with the sink bound underneath it.
///
/// One carrier is created per logical session (program start, request, or
/// test) and read on every [`log`](Logger::log) call. Scoped overrides
/// replace one field for the duration of a nested region and restore it on
/// exit; nothing in the carrier is shared or global, so concurrent carriers
/// never observe each other's overrides.
///
/// The sink is held by value and is a type parameter, so substituting a
/// capture sink for a real transport never touches call sites.
///
/// # Examples
///
/// ```
/// use capability::{LogContext, Logger};
/// use model::Level;
/// use sink::MemorySink;
///
/// let mut log = LogContext::new(MemorySink::new());
/// log.log(Level::Info, "starting")?;
/// log.log(Level::Debug, "filtered: below the info threshold")?;
///
/// assert_eq!(log.sink().events().len(), 1);
/// # Ok::<(), model::CongestionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct LogContext<P, S> {
    threshold: Level,
    scope: Scope,
    policy: Policy,
    sink: S,
    _payload: PhantomData<fn(P)>,
}

impl<P, S: Sink<P>> LogContext<P, S> {
    /// Creates a carrier with the default configuration: threshold
    /// [`Level::Info`], empty scope, policy [`Policy::Block`].
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::from_config(&LogConfig::default(), sink)
    }

    /// Creates a carrier from a configuration surface.
    ///
    /// # Examples
    ///
    /// ```
    /// use capability::{LogConfig, LogContext, Logger};
    /// use model::{Label, Level, Policy};
    /// use sink::MemorySink;
    ///
    /// let config = LogConfig {
    ///     threshold: Level::Debug,
    ///     labels: vec![Label::new("service", "sync")],
    ///     policy: Policy::Discard,
    /// };
    /// let log: LogContext<&str, _> = LogContext::from_config(&config, MemorySink::new());
    ///
    /// assert_eq!(log.threshold(), Level::Debug);
    /// assert_eq!(log.scope().head().unwrap().key(), "service");
    /// assert_eq!(log.policy(), Policy::Discard);
    /// ```
    #[must_use]
    pub fn from_config(config: &LogConfig, sink: S) -> Self {
        Self {
            threshold: config.threshold,
            scope: config.initial_scope(),
            policy: config.policy,
            sink,
            _payload: PhantomData,
        }
    }

    /// Routes a diagnostic about the logging machinery itself through the
    /// same threshold filter and policy path as user events.
    pub fn log_system(
        &mut self,
        level: Level,
        text: impl Into<String>,
    ) -> Result<(), CongestionError> {
        if !level.passes(self.threshold) {
            return Ok(());
        }
        self.dispatch(SinkEvent::system(level, text))
    }

    /// Hands an already-filtered event to the sink under the active policy.
    fn dispatch(&mut self, event: SinkEvent<P>) -> Result<(), CongestionError> {
        match self.policy {
            Policy::Block => {
                self.sink.deliver(event);
                Ok(())
            }
            Policy::Discard => {
                // Intentionally unreported data loss.
                let _ = self.sink.offer(event);
                Ok(())
            }
            Policy::Raise => self.sink.offer(event).map_err(|full| {
                let refused = full.into_event();
                CongestionError::new(refused.level(), refused.scope().clone())
            }),
        }
    }
}

impl<P, S> LogContext<P, S> {
    /// Borrows the bound sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the bound sink.
    #[must_use]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the carrier and returns the bound sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<P, S: Sink<P>> Logger<P> for LogContext<P, S> {
    fn log(&mut self, level: Level, payload: P) -> Result<(), CongestionError> {
        if !level.passes(self.threshold) {
            return Ok(());
        }
        let record = Record::new(level, payload, self.scope.clone());
        self.dispatch(SinkEvent::user(record))
    }

    fn threshold(&self) -> Level {
        self.threshold
    }

    fn policy(&self) -> Policy {
        self.policy
    }

    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn swap_threshold(&mut self, threshold: Level) -> Level {
        std::mem::replace(&mut self.threshold, threshold)
    }

    fn swap_scope(&mut self, scope: Scope) -> Scope {
        std::mem::replace(&mut self.scope, scope)
    }

    fn swap_policy(&mut self, policy: Policy) -> Policy {
        std::mem::replace(&mut self.policy, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::CaptureSink;
    use model::Label;

    type VecSink = CaptureSink<&'static str>;

    #[test]
    fn default_carrier_uses_info_threshold_and_block_policy() {
        let log = LogContext::<&str, _>::new(VecSink::new());
        assert_eq!(log.threshold(), Level::Info);
        assert_eq!(log.policy(), Policy::Block);
        assert!(log.scope().is_empty());
    }

    #[test]
    fn log_filters_below_threshold() {
        let mut log = LogContext::new(VecSink::new());
        log.log(Level::Debug, "dropped").unwrap();
        log.log(Level::Info, "kept").unwrap();
        log.log(Level::Error, "kept").unwrap();

        let levels: Vec<Level> = log.sink().events.iter().map(SinkEvent::level).collect();
        assert_eq!(levels, [Level::Info, Level::Error]);
    }

    #[test]
    fn log_at_quiet_is_always_suppressed() {
        let mut log = LogContext::new(VecSink::new());
        log.swap_threshold(Level::Debug);
        log.log(Level::Quiet, "never delivered").unwrap();
        assert!(log.sink().events.is_empty());
    }

    #[test]
    fn accepted_event_captures_current_scope() {
        let mut log = LogContext::new(VecSink::new());
        log.swap_scope(Scope::new().child(Label::new("req", "1")));
        log.log(Level::Warn, "scoped").unwrap();

        let event = &log.sink().events[0];
        assert_eq!(event.scope().head().unwrap(), &Label::new("req", "1"));
    }

    #[test]
    fn raise_policy_maps_refusal_to_congestion_error() {
        let mut log = LogContext::new(VecSink::refusing());
        log.swap_policy(Policy::Raise);
        log.swap_scope(Scope::new().child(Label::new("req", "1")));

        let err = log.log(Level::Error, "refused").unwrap_err();
        assert_eq!(err.level(), Level::Error);
        assert_eq!(err.scope().head().unwrap().key(), "req");
        assert!(log.sink().events.is_empty());
    }

    #[test]
    fn discard_policy_swallows_refusal() {
        let mut log = LogContext::new(VecSink::refusing());
        log.swap_policy(Policy::Discard);

        log.log(Level::Error, "silently dropped").unwrap();
        assert!(log.sink().events.is_empty());
    }

    #[test]
    fn filtered_event_never_reaches_a_congested_sink() {
        let mut log = LogContext::new(VecSink::refusing());
        log.swap_policy(Policy::Raise);

        // Below threshold, so the refusing sink is never consulted.
        log.log(Level::Debug, "filtered first").unwrap();
    }

    #[test]
    fn log_system_routes_through_policy_path() {
        let mut log = LogContext::<&str, _>::new(VecSink::new());
        log.log_system(Level::Error, "queue full").unwrap();

        let event = &log.sink().events[0];
        assert!(event.is_system());
        assert_eq!(event.as_system().unwrap().payload(), "queue full");
    }

    #[test]
    fn log_system_is_filtered_by_threshold() {
        let mut log = LogContext::<&str, _>::new(VecSink::new());
        log.log_system(Level::Debug, "below threshold").unwrap();
        assert!(log.sink().events.is_empty());
    }

    #[test]
    fn into_sink_returns_captured_events() {
        let mut log = LogContext::new(VecSink::new());
        log.log(Level::Info, "one").unwrap();
        let sink = log.into_sink();
        assert_eq!(sink.events.len(), 1);
    }
}
