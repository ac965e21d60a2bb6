//! crates/capability/src/test_util.rs
//! Capture sink shared by this crate's unit tests.

use model::SinkEvent;

use crate::sink::{Sink, SinkFull};

#[derive(Debug)]
pub(crate) struct CaptureSink<P> {
    pub(crate) events: Vec<SinkEvent<P>>,
    pub(crate) accepting: bool,
}

impl<P> CaptureSink<P> {
    pub(crate) fn new() -> Self {
        Self {
            events: Vec::new(),
            accepting: true,
        }
    }

    pub(crate) fn refusing() -> Self {
        Self {
            events: Vec::new(),
            accepting: false,
        }
    }
}

impl<P> Sink<P> for CaptureSink<P> {
    fn offer(&mut self, event: SinkEvent<P>) -> Result<(), SinkFull<P>> {
        if self.accepting {
            self.events.push(event);
            Ok(())
        } else {
            Err(SinkFull::new(event))
        }
    }

    fn deliver(&mut self, event: SinkEvent<P>) {
        self.events.push(event);
    }
}
