//! crates/capability/src/layers/fallible.rs
//! Error short-circuit layer.

use model::{CongestionError, Level, Policy, Scope};

use crate::logger::Logger;

/// Error-propagating layer: latches the first failure and skips every step
/// after it.
///
/// Steps are submitted through [`run`](Self::run) and may fail with `E`.
/// Once a step has failed, later steps are not executed at all, mirroring
/// `?`-style short-circuiting across a sequence of operations that share
/// one logger. Logging inside a step behaves exactly as it would against
/// the inner logger.
///
/// # Examples
///
/// ```
/// use capability::{Fallible, LogContext, Logger};
/// use model::Level;
/// use sink::MemorySink;
///
/// let mut layer = Fallible::new(LogContext::new(MemorySink::new()));
///
/// layer.run(|log| {
///     log.log(Level::Info, "step one").unwrap();
///     Err::<(), _>("step one failed")
/// });
/// // Short-circuited: this step never runs.
/// let skipped = layer.run(|log| {
///     log.log(Level::Info, "step two").unwrap();
///     Ok(())
/// });
///
/// assert!(skipped.is_none());
/// let (log, failure) = layer.into_parts();
/// assert_eq!(failure, Some("step one failed"));
/// assert_eq!(log.sink().events().len(), 1);
/// ```
#[derive(Debug)]
pub struct Fallible<L, E> {
    inner: L,
    failure: Option<E>,
}

impl<L, E> Fallible<L, E> {
    /// Wraps a logger in a fresh, not-yet-failed layer.
    #[must_use]
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            failure: None,
        }
    }

    /// Returns `true` once a step has failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Borrows the latched failure, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&E> {
        self.failure.as_ref()
    }

    /// Executes one fallible step unless the layer has already failed.
    ///
    /// Returns `Some` with the step's value on success, `None` when the
    /// step failed or was skipped. A failure is latched for
    /// [`into_result`](Self::into_result).
    pub fn run<T>(&mut self, step: impl FnOnce(&mut Self) -> Result<T, E>) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }
        match step(self) {
            Ok(value) => Some(value),
            Err(error) => {
                self.failure = Some(error);
                None
            }
        }
    }

    /// Consumes the layer: the inner logger on success, the latched failure
    /// otherwise.
    pub fn into_result(self) -> Result<L, E> {
        match self.failure {
            Some(error) => Err(error),
            None => Ok(self.inner),
        }
    }

    /// Consumes the layer and returns the inner logger together with the
    /// latched failure, if any.
    #[must_use]
    pub fn into_parts(self) -> (L, Option<E>) {
        (self.inner, self.failure)
    }
}

impl<P, L: Logger<P>, E> Logger<P> for Fallible<L, E> {
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
