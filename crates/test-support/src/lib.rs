//! crates/test-support/src/lib.rs
//! Sink doubles shared by the workspace test suites.
//!
//! Two backends cover the congestion paths that real sinks make awkward to
//! exercise deterministically:
//!
//! - [`RefusingSink`] rejects every non-blocking offer, for driving the
//!   discard and raise dispositions.
//! - [`GatedSink`] refuses offers and parks blocking deliveries until the
//!   test opens the gate, for observing the block disposition from another
//!   thread.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::marker::PhantomData;
use std::sync::{Arc, Condvar, Mutex};

use capability::{Sink, SinkFull};
use model::SinkEvent;

/// Sink that refuses every offer and counts how many it turned away.
///
/// Blocking delivery panics: a test wiring this sink under the block
/// disposition has taken a wrong turn, and hanging would hide it.
#[derive(Debug, Default)]
pub struct RefusingSink<P> {
    refused: usize,
    _payload: PhantomData<fn(P)>,
}

impl<P> RefusingSink<P> {
    /// Creates a sink with no refusals recorded yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            refused: 0,
            _payload: PhantomData,
        }
    }

    /// Number of offers refused so far.
    #[must_use]
    pub const fn refused(&self) -> usize {
        self.refused
    }
}

impl<P> Sink<P> for RefusingSink<P> {
    fn offer(&mut self, event: SinkEvent<P>) -> Result<(), SinkFull<P>> {
        self.refused += 1;
        Err(SinkFull::new(event))
    }

    fn deliver(&mut self, _event: SinkEvent<P>) {
        panic!("blocking delivery reached a sink that never accepts");
    }
}

#[derive(Debug)]
struct Gated<P> {
    open: bool,
    events: Vec<SinkEvent<P>>,
}

/// Sink whose acceptance is controlled by the test.
///
/// While the gate is closed, [`Sink::offer`] refuses and [`Sink::deliver`]
/// blocks the calling thread. [`GatedSink::open`] releases every parked
/// delivery. Handles are cheap clones of one shared gate, so a test can
/// hand one copy to a logging thread and keep another to open the gate
/// and inspect what arrived.
#[derive(Debug)]
pub struct GatedSink<P> {
    shared: Arc<(Mutex<Gated<P>>, Condvar)>,
}

impl<P> Clone for GatedSink<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P> GatedSink<P> {
    /// Creates a sink with the gate closed.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            shared: Arc::new((
                Mutex::new(Gated {
                    open: false,
                    events: Vec::new(),
                }),
                Condvar::new(),
            )),
        }
    }

    /// Opens the gate, waking every blocked delivery.
    pub fn open(&self) {
        let (lock, notify) = &*self.shared;
        let mut gated = lock.lock().expect("gate lock poisoned");
        gated.open = true;
        notify.notify_all();
    }

    /// Number of events accepted so far.
    #[must_use]
    pub fn delivered(&self) -> usize {
        let (lock, _) = &*self.shared;
        lock.lock().expect("gate lock poisoned").events.len()
    }

    /// Removes and returns every accepted event, in arrival order.
    #[must_use]
    pub fn take_events(&self) -> Vec<SinkEvent<P>> {
        let (lock, _) = &*self.shared;
        let mut gated = lock.lock().expect("gate lock poisoned");
        std::mem::take(&mut gated.events)
    }
}

impl<P> Sink<P> for GatedSink<P> {
    fn offer(&mut self, event: SinkEvent<P>) -> Result<(), SinkFull<P>> {
        let (lock, _) = &*self.shared;
        let mut gated = lock.lock().expect("gate lock poisoned");
        if gated.open {
            gated.events.push(event);
            Ok(())
        } else {
            Err(SinkFull::new(event))
        }
    }

    fn deliver(&mut self, event: SinkEvent<P>) {
        let (lock, notify) = &*self.shared;
        let mut gated = lock.lock().expect("gate lock poisoned");
        while !gated.open {
            gated = notify.wait(gated).expect("gate lock poisoned");
        }
        gated.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Level, Record, Scope};

    fn event(text: &'static str) -> SinkEvent<&'static str> {
        SinkEvent::user(Record::new(Level::Info, text, Scope::new()))
    }

    #[test]
    fn refusing_sink_hands_the_event_back() {
        let mut sink = RefusingSink::new();
        let full = sink.offer(event("turned away")).unwrap_err();
        let SinkEvent::User(record) = full.into_event() else {
            panic!("expected the offered event back");
        };
        assert_eq!(*record.payload(), "turned away");
        assert_eq!(sink.refused(), 1);
    }

    #[test]
    fn gated_sink_refuses_offers_until_opened() {
        let mut sink = GatedSink::closed();
        assert!(sink.offer(event("too early")).is_err());
        sink.open();
        assert!(sink.offer(event("in time")).is_ok());
        assert_eq!(sink.delivered(), 1);
    }

    #[test]
    fn gated_sink_parks_delivery_until_opened() {
        let sink = GatedSink::closed();
        let mut worker_handle = sink.clone();
        let worker = std::thread::spawn(move || {
            worker_handle.deliver(event("held"));
        });

        // The worker cannot have delivered while the gate is closed.
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(sink.delivered(), 0);

        sink.open();
        worker.join().expect("delivery thread panicked");
        assert_eq!(sink.delivered(), 1);
    }
}
