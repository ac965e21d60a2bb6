//! crates/capability/src/layers/selective.rs
//! Two-outcome layer.

use model::{CongestionError, Level, Policy, Scope};

use crate::logger::Logger;

/// Result of one step submitted to a [`Selective`] layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome<T> {
    /// The step produced a value; the computation continues.
    Chosen(T),
    /// The step declined; the computation takes the alternate path.
    Declined,
}

/// Two-outcome layer: each step either produces a value or declines, and
/// the first declined step short-circuits those after it.
///
/// This is the success/alternate counterpart of [`Fallible`]: there is no
/// error value, only the fact that the alternate outcome was taken.
/// Logging inside a step passes straight through to the inner logger.
///
/// [`Fallible`]: crate::Fallible
///
/// # Examples
///
/// ```
/// use capability::{LogContext, Logger, Outcome, Selective};
/// use model::Level;
/// use sink::MemorySink;
///
/// let mut layer = Selective::new(LogContext::new(MemorySink::new()));
///
/// let found = layer.run(|log| {
///     log.log(Level::Info, "cache miss").unwrap();
///     Outcome::<u32>::Declined
/// });
/// // Short-circuited after the decline.
/// let skipped = layer.run(|_| Outcome::Chosen(7));
///
/// assert_eq!(found, None);
/// assert_eq!(skipped, None);
/// assert!(layer.declined());
/// ```
#[derive(Debug)]
pub struct Selective<L> {
    inner: L,
    declined: bool,
}

impl<L> Selective<L> {
    /// Wraps a logger in a layer still on its primary path.
    #[must_use]
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            declined: false,
        }
    }

    /// Returns `true` once a step has declined.
    #[must_use]
    pub fn declined(&self) -> bool {
        self.declined
    }

    /// Executes one step unless the alternate path has been taken.
    ///
    /// Returns `Some` with the chosen value, `None` when the step declined
    /// or was skipped.
    pub fn run<T>(&mut self, step: impl FnOnce(&mut Self) -> Outcome<T>) -> Option<T> {
        if self.declined {
            return None;
        }
        match step(self) {
            Outcome::Chosen(value) => Some(value),
            Outcome::Declined => {
                self.declined = true;
                None
            }
        }
    }

    /// Consumes the layer and returns the inner logger.
    #[must_use]
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<P, L: Logger<P>> Logger<P> for Selective<L> {
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
