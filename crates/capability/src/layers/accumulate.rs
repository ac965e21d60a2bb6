//! crates/capability/src/layers/accumulate.rs
//! Value accumulation layer.

use model::{CongestionError, Level, Policy, Scope};

use crate::logger::Logger;

/// Accumulator layer: collects values of type `T` alongside an inner
/// logger.
///
/// The computation records items as it goes and retrieves them, in order,
/// when the layer is dismantled. Logging passes straight through to the
/// inner logger.
///
/// # Examples
///
/// ```
/// use capability::{Accumulating, LogContext, Logger};
/// use model::Level;
/// use sink::MemorySink;
///
/// let mut layer = Accumulating::new(LogContext::new(MemorySink::new()));
///
/// layer.record("first finding");
/// layer.log(Level::Info, "still logging normally").unwrap();
/// layer.record("second finding");
///
/// let (log, findings) = layer.into_parts();
/// assert_eq!(findings, ["first finding", "second finding"]);
/// assert_eq!(log.sink().events().len(), 1);
/// ```
#[derive(Debug)]
pub struct Accumulating<L, T> {
    inner: L,
    items: Vec<T>,
}

impl<L, T> Accumulating<L, T> {
    /// Wraps a logger with an empty accumulator.
    #[must_use]
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            items: Vec::new(),
        }
    }

    /// Appends one item to the accumulator.
    pub fn record(&mut self, item: T) {
        self.items.push(item);
    }

    /// Borrows the accumulated items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the layer and returns the inner logger and the accumulated
    /// items.
    #[must_use]
    pub fn into_parts(self) -> (L, Vec<T>) {
        (self.inner, self.items)
    }
}

impl<P, L: Logger<P>, T> Logger<P> for Accumulating<L, T> {
    fn log(&mut self, level: Level, payload: P) -> Result<(), CongestionError> {
        self.inner.log(level, payload)
    }

    fn threshold(&self) -> Level {
        self.inner.threshold()
    }

    fn policy(&self) -> Policy {
        self.inner.policy()
    }

    fn scope(&self) -> &Scope {
        self.inner.scope()
    }

    fn swap_threshold(&mut self, threshold: Level) -> Level {
        self.inner.swap_threshold(threshold)
    }

    fn swap_scope(&mut self, scope: Scope) -> Scope {
        self.inner.swap_scope(scope)
    }

    fn swap_policy(&mut self, policy: Policy) -> Policy {
        self.inner.swap_policy(policy)
    }
}
