//! crates/sink/src/queue.rs
//! Bounded delivery queue backed by a crossbeam channel.

use std::thread;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

use capability::{Sink, SinkFull};
use model::{Level, SinkEvent};

/// Producer half of a bounded delivery queue.
///
/// [`offer`](Sink::offer) maps to a non-blocking `try_send` and
/// [`deliver`](Sink::deliver) to a blocking `send`, so the queue reflects
/// every congestion disposition the capability can apply. The consumer half
/// is a plain [`Receiver`]; pair it with [`drain`] to feed events to a
/// worker thread.
///
/// The sink counts events it could not enqueue and, before the next
/// successful hand-off, first enqueues a system record announcing how many
/// were lost, so downstream consumers learn about the gap from the stream
/// itself. A disconnected consumer counts as congestion.
///
/// # Examples
///
/// ```
/// use capability::{LogContext, Logger};
/// use model::Level;
/// use sink::{QueueSink, drain};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let (queue, receiver) = QueueSink::bounded(8);
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// let worker = drain(receiver, move |_event| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let mut log = LogContext::new(queue);
/// log.log(Level::Info, "queued")?;
///
/// drop(log); // Closes the channel so the worker finishes.
/// worker.join().unwrap();
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// # Ok::<(), model::CongestionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct QueueSink<P> {
    sender: Sender<SinkEvent<P>>,
    overflowed: u64,
}

impl<P> QueueSink<P> {
    /// Creates a queue holding at most `capacity` in-flight events and
    /// returns the producer sink together with the consumer half.
    #[must_use]
    pub fn bounded(capacity: usize) -> (Self, Receiver<SinkEvent<P>>) {
        let (sender, receiver) = bounded(capacity);
        (
            Self {
                sender,
                overflowed: 0,
            },
            receiver,
        )
    }

    /// Returns the number of events lost since the last overflow notice.
    #[must_use]
    pub fn overflowed(&self) -> u64 {
        self.overflowed
    }

    /// Tries to enqueue a pending overflow notice ahead of new events.
    fn flush_overflow_notice(&mut self) {
        if self.overflowed == 0 {
            return;
        }
        let notice = SinkEvent::system(
            Level::Error,
            format!(
                "log queue overflowed; {} events were not enqueued",
                self.overflowed
            ),
        );
        if self.sender.try_send(notice).is_ok() {
            self.overflowed = 0;
        }
    }
}

impl<P> Sink<P> for QueueSink<P> {
    fn offer(&mut self, event: SinkEvent<P>) -> Result<(), SinkFull<P>> {
        self.flush_overflow_notice();
        match self.sender.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(event) | TrySendError::Disconnected(event)) => {
                self.overflowed += 1;
                Err(SinkFull::new(event))
            }
        }
    }

    fn deliver(&mut self, event: SinkEvent<P>) {
        self.flush_overflow_notice();
        if self.sender.send(event).is_err() {
            // Consumer is gone; nothing can ever accept this event.
            self.overflowed += 1;
        }
    }
}

/// Spawns a worker thread that feeds every queued event to `consume` until
/// all producer sinks are dropped.
pub fn drain<P, F>(receiver: Receiver<SinkEvent<P>>, mut consume: F) -> thread::JoinHandle<()>
where
    P: Send + 'static,
    F: FnMut(SinkEvent<P>) + Send + 'static,
{
    thread::spawn(move || {
        for event in receiver {
            consume(event);
        }
    })
}
