//! crates/capability/src/sink.rs
//! The delivery contract a backend must satisfy.

use model::SinkEvent;

/// Back-pressure hand-back: the event a sink refused to accept.
///
/// Returned by [`Sink::offer`] so the caller can retry, discard, or report
/// the event without it having been cloned. This is a hand-back value, not
/// an error type; the capability translates it into a
/// [`CongestionError`](model::CongestionError) only under the raise policy.
#[derive(Debug)]
pub struct SinkFull<P>(SinkEvent<P>);

impl<P> SinkFull<P> {
    /// Wraps a refused event.
    #[must_use]
    pub fn new(event: SinkEvent<P>) -> Self {
        Self(event)
    }

    /// Borrows the refused event.
    #[must_use]
    pub fn event(&self) -> &SinkEvent<P> {
        &self.0
    }

    /// Consumes the hand-back and returns the refused event.
    #[must_use]
    pub fn into_event(self) -> SinkEvent<P> {
        self.0
    }
}

/// A delivery backend for [`SinkEvent`]s.
///
/// This trait is the sole boundary between the logging capability and the
/// delivery subsystem; rendering, transport, and queue mechanics all live
/// behind it. A sink never sees thresholds or policies: the capability
/// decides which of the two entry points to use and how to interpret a
/// refusal.
///
/// # Contract
///
/// - [`offer`](Self::offer) must not block. On congestion it hands the
///   event back unmodified inside [`SinkFull`].
/// - [`deliver`](Self::deliver) may block for as long as it takes to hand
///   the event over, and returns only once it has done so.
/// - Internal failures of the sink (I/O errors in a real transport) are the
///   sink's own concern and must not surface through this trait.
///
/// # Examples
///
/// A capture sink that accepts everything:
///
/// ```
/// use capability::{Sink, SinkFull};
/// use model::SinkEvent;
///
/// struct Capture(Vec<SinkEvent<String>>);
///
/// impl Sink<String> for Capture {
///     fn offer(&mut self, event: SinkEvent<String>) -> Result<(), SinkFull<String>> {
///         self.0.push(event);
///         Ok(())
///     }
///
///     fn deliver(&mut self, event: SinkEvent<String>) {
///         self.0.push(event);
///     }
/// }
/// ```
pub trait Sink<P> {
    /// Attempts to hand over an event without blocking.
    fn offer(&mut self, event: SinkEvent<P>) -> Result<(), SinkFull<P>>;

    /// Hands over an event, blocking until the sink accepts it.
    fn deliver(&mut self, event: SinkEvent<P>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Level, Record, Scope};

    #[test]
    fn sink_full_returns_event_unmodified() {
        let record = Record::new(Level::Warn, "payload", Scope::new());
        let full = SinkFull::new(SinkEvent::user(record.clone()));

        assert_eq!(full.event().level(), Level::Warn);
        assert_eq!(full.into_event().as_user().unwrap(), &record);
    }
}
