//! crates/capability/src/layers/stateful.rs
//! Mutable-state threading layer.

use model::{CongestionError, Level, Policy, Scope};

use crate::logger::Logger;

/// State-threading layer: carries a mutable value of type `S` alongside an
/// inner logger.
///
/// The state travels with the logger through a computation instead of being
/// passed as a separate argument at every call site. Logging passes
/// straight through to the inner logger.
///
/// # Examples
///
/// ```
/// use capability::{LogContext, Logger, Stateful};
/// use model::Level;
/// use sink::MemorySink;
///
/// let mut layer = Stateful::new(LogContext::new(MemorySink::new()), 0_u32);
///
/// layer.modify(|count| *count += 1);
/// layer.log(Level::Info, "one step done").unwrap();
/// layer.modify(|count| *count += 1);
///
/// let (log, count) = layer.into_parts();
/// assert_eq!(count, 2);
/// assert_eq!(log.sink().events().len(), 1);
/// ```
#[derive(Debug)]
pub struct Stateful<L, S> {
    inner: L,
    state: S,
}

impl<L, S> Stateful<L, S> {
    /// Wraps a logger together with an initial state.
    #[must_use]
    pub fn new(inner: L, state: S) -> Self {
        Self { inner, state }
    }

    /// Borrows the threaded state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutably borrows the threaded state.
    #[must_use]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Applies a mutation to the threaded state.
    pub fn modify(&mut self, f: impl FnOnce(&mut S)) {
        f(&mut self.state);
    }

    /// Consumes the layer and returns the inner logger and the final state.
    #[must_use]
    pub fn into_parts(self) -> (L, S) {
        (self.inner, self.state)
    }
}

impl<P, L: Logger<P>, S> Logger<P> for Stateful<L, S> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LogContext;
    use crate::test_util::CaptureSink;

    #[test]
    fn state_is_threaded_through_mutations() {
        let mut layer = Stateful::new(LogContext::<&str, _>::new(CaptureSink::new()), vec![1]);

        layer.modify(|v| v.push(2));
        layer.state_mut().push(3);

        assert_eq!(layer.state(), &[1, 2, 3]);
    }

    #[test]
    fn logging_and_state_are_independent() {
        let mut layer = Stateful::new(LogContext::new(CaptureSink::new()), 0_u32);

        layer.log(Level::Error, "failed once").unwrap();
        layer.modify(|count| *count += 1);

        let (log, count) = layer.into_parts();
        assert_eq!(count, 1);
        assert_eq!(log.sink().events.len(), 1);
    }

    #[test]
    fn override_through_layer_is_restored() {
        let mut layer = Stateful::new(LogContext::<&str, _>::new(CaptureSink::new()), ());

        layer.with_level(Level::Debug, |layer| {
            assert_eq!(layer.threshold(), Level::Debug);
        });

        assert_eq!(layer.threshold(), Level::Info);
    }
}
