//! crates/capability/src/layers/traced.rs
//! Instrumentation layer.

use model::{CongestionError, Label, Level, Policy, Scope};

use crate::guard::{PolicyGuard, ScopeGuard, ThresholdGuard};
use crate::logger::Logger;

/// One step recorded by a [`Traced`] layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TraceStep {
    /// A `log` call was made at this level (delivered or filtered).
    Message {
        /// Level the call was tagged with.
        level: Level,
    },
    /// A threshold region was entered.
    EnterLevel {
        /// The override installed for the region.
        threshold: Level,
    },
    /// A threshold region exited normally.
    ExitLevel,
    /// A label region was entered.
    EnterLabel {
        /// The label pushed for the region.
        label: Label,
    },
    /// A label region exited normally.
    ExitLabel,
    /// A policy region was entered.
    EnterPolicy {
        /// The override installed for the region.
        policy: Policy,
    },
    /// A policy region exited normally.
    ExitPolicy,
}

/// Tracing layer: records every capability operation while delegating it.
///
/// Each `log` call and each scoped region is appended to an in-memory trace
/// that can be inspected afterwards. Exit steps are recorded only when a
/// region finishes normally; an unwinding region leaves its enter step
/// unmatched, though the override itself is still restored by the guard.
///
/// # Examples
///
/// ```
/// use capability::{LogContext, Logger, TraceStep, Traced};
/// use model::Level;
/// use sink::MemorySink;
///
/// let mut layer = Traced::new(LogContext::new(MemorySink::new()));
///
/// layer.with_level(Level::Debug, |layer| {
///     layer.log(Level::Debug, "probing").unwrap();
/// });
///
/// let (_, steps) = layer.into_parts();
/// assert_eq!(
///     steps,
///     [
///         TraceStep::EnterLevel { threshold: Level::Debug },
///         TraceStep::Message { level: Level::Debug },
///         TraceStep::ExitLevel,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Traced<L> {
    inner: L,
    steps: Vec<TraceStep>,
}

impl<L> Traced<L> {
    /// Wraps a logger with an empty trace.
    #[must_use]
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            steps: Vec::new(),
        }
    }

    /// Borrows the recorded steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Consumes the layer and returns the inner logger and the trace.
    #[must_use]
    pub fn into_parts(self) -> (L, Vec<TraceStep>) {
        (self.inner, self.steps)
    }
}

impl<P, L: Logger<P>> Logger<P> for Traced<L> {
    fn log(&mut self, level: Level, payload: P) -> Result<(), CongestionError> {
        self.steps.push(TraceStep::Message { level });
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

    fn with_level<R>(&mut self, threshold: Level, body: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.steps.push(TraceStep::EnterLevel { threshold });
        let prior = self.swap_threshold(threshold);
        let result = {
            let mut guard = ThresholdGuard::new(self, prior);
            body(guard.logger())
        };
        self.steps.push(TraceStep::ExitLevel);
        result
    }

    fn with_label<R>(&mut self, label: Label, body: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.steps.push(TraceStep::EnterLabel {
            label: label.clone(),
        });
        let next = self.scope().child(label);
        let prior = self.swap_scope(next);
        let result = {
            let mut guard = ScopeGuard::new(self, prior);
            body(guard.logger())
        };
        self.steps.push(TraceStep::ExitLabel);
        result
    }

    fn with_policy<R>(&mut self, policy: Policy, body: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.steps.push(TraceStep::EnterPolicy { policy });
        let prior = self.swap_policy(policy);
        let result = {
            let mut guard = PolicyGuard::new(self, prior);
            body(guard.logger())
        };
        self.steps.push(TraceStep::ExitPolicy);
        result
    }
}
