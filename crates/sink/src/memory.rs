//! crates/sink/src/memory.rs
//! In-memory capture sink.

use capability::{Sink, SinkFull};
use model::SinkEvent;

/// Sink that captures events in memory, primarily for tests and embedding.
///
/// An optional capacity turns [`offer`](Sink::offer) refusals on once the
/// buffer is full, which lets tests exercise the congestion dispositions
/// without a real queue. [`deliver`](Sink::deliver) always accepts; the
/// capacity models a momentarily full queue, not a hard storage bound.
///
/// # Examples
///
/// ```
/// use capability::{LogContext, Logger};
/// use model::Level;
/// use sink::MemorySink;
///
/// let mut log = LogContext::new(MemorySink::new());
/// log.log(Level::Warn, "vanished")?;
///
/// let sink = log.into_sink();
/// assert_eq!(sink.events().len(), 1);
/// assert_eq!(*sink.events()[0].as_user().unwrap().payload(), "vanished");
/// # Ok::<(), model::CongestionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MemorySink<P> {
    events: Vec<SinkEvent<P>>,
    capacity: Option<usize>,
}

impl<P> MemorySink<P> {
    /// Creates an unbounded capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            capacity: None,
        }
    }

    /// Creates a capture sink that refuses offers once `capacity` events
    /// are held.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Borrows the captured events in delivery order.
    #[must_use]
    pub fn events(&self) -> &[SinkEvent<P>] {
        &self.events
    }

    /// Consumes the sink and returns the captured events.
    #[must_use]
    pub fn into_events(self) -> Vec<SinkEvent<P>> {
        self.events
    }

    /// Returns the number of captured events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` when nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<P> Default for MemorySink<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Sink<P> for MemorySink<P> {
    fn offer(&mut self, event: SinkEvent<P>) -> Result<(), SinkFull<P>> {
        match self.capacity {
            Some(capacity) if self.events.len() >= capacity => Err(SinkFull::new(event)),
            _ => {
                self.events.push(event);
                Ok(())
            }
        }
    }

    fn deliver(&mut self, event: SinkEvent<P>) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Level, Record, Scope};

    fn user_event(level: Level) -> SinkEvent<&'static str> {
        SinkEvent::user(Record::new(level, "payload", Scope::new()))
    }

    #[test]
    fn unbounded_sink_accepts_offers() {
        let mut sink = MemorySink::new();
        assert!(sink.offer(user_event(Level::Info)).is_ok());
        assert!(sink.offer(user_event(Level::Warn)).is_ok());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn full_sink_refuses_offers_but_accepts_delivery() {
        let mut sink = MemorySink::with_capacity(1);
        assert!(sink.offer(user_event(Level::Info)).is_ok());

        let refused = sink.offer(user_event(Level::Warn)).unwrap_err();
        assert_eq!(refused.event().level(), Level::Warn);
        assert_eq!(sink.len(), 1);

        sink.deliver(user_event(Level::Error));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn into_events_preserves_delivery_order() {
        let mut sink = MemorySink::new();
        sink.deliver(user_event(Level::Info));
        sink.deliver(user_event(Level::Error));

        let levels: Vec<Level> = sink.into_events().iter().map(SinkEvent::level).collect();
        assert_eq!(levels, [Level::Info, Level::Error]);
    }
}
