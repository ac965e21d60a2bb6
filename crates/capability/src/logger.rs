//! crates/capability/src/logger.rs
//! The operation set application code programs against.

use model::{CongestionError, Label, Level, Policy, Scope};

use crate::guard::{PolicyGuard, ScopeGuard, ThresholdGuard};

/// Scoped, leveled, labeled logging over payloads of type `P`.
///
/// The four public operations are [`log`](Self::log) and the three scoped
/// overrides [`with_level`](Self::with_level),
/// [`with_label`](Self::with_label), and [`with_policy`](Self::with_policy).
/// The remaining methods are the override points a carrier (or a delegating
/// layer) implements: read accessors for the current threshold, scope, and
/// policy, and `swap_*` primitives that replace one of them and return the
/// prior value.
///
/// # Scoping semantics
///
/// Every `with_*` operation installs exactly one override by swapping in the
/// new value, runs the region body, and restores the prior value through an
/// RAII guard. Restoration is unconditional: it happens whether the body
/// returns normally, propagates an error through its return value, or
/// unwinds. Layer adapters delegate the `swap_*` primitives to their inner
/// logger, so no matter how many layers are stacked, the single
/// install/restore pair lands on the innermost carrier.
///
/// # Examples
///
/// ```
/// use capability::{LogContext, Logger};
/// use model::{Label, Level};
/// use sink::MemorySink;
///
/// let mut log = LogContext::new(MemorySink::new());
///
/// log.with_level(Level::Debug, |log| {
///     log.with_label(Label::new("req", "1"), |log| {
///         log.log(Level::Debug, "resolving target")
///     })
/// })?;
///
/// // The override ended with the region.
/// assert_eq!(log.threshold(), Level::Info);
/// assert_eq!(log.sink().events().len(), 1);
/// # Ok::<(), model::CongestionError>(())
/// ```
pub trait Logger<P> {
    /// Logs `payload` at `level`.
    ///
    /// When `level` passes the current threshold, an immutable record
    /// carrying the payload, level, and current scope is handed to the
    /// bound sink synchronously; `log` returns only after the sink does.
    /// What a congested sink means for the caller is decided by the active
    /// policy: `discard` swallows the event and returns `Ok`, `raise`
    /// returns a [`CongestionError`], and `block` waits for the sink to
    /// accept. A filtered event has no effect at all.
    fn log(&mut self, level: Level, payload: P) -> Result<(), CongestionError>;

    /// Returns the active severity threshold.
    fn threshold(&self) -> Level;

    /// Returns the active congestion policy.
    fn policy(&self) -> Policy;

    /// Returns the active scope stack.
    fn scope(&self) -> &Scope;

    /// Replaces the threshold, returning the prior value.
    ///
    /// This is an override point; application code should prefer
    /// [`with_level`](Self::with_level), which guarantees restoration.
    fn swap_threshold(&mut self, threshold: Level) -> Level;

    /// Replaces the scope stack, returning the prior value.
    fn swap_scope(&mut self, scope: Scope) -> Scope;

    /// Replaces the congestion policy, returning the prior value.
    fn swap_policy(&mut self, policy: Policy) -> Policy;

    /// Runs `body` with the threshold temporarily replaced by `threshold`.
    ///
    /// The prior threshold is restored when `body` finishes, whether it
    /// finishes normally or by unwinding. Returns whatever `body` returns.
    fn with_level<R>(&mut self, threshold: Level, body: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        let prior = self.swap_threshold(threshold);
        let mut guard = ThresholdGuard::new(self, prior);
        body(guard.logger())
    }

    /// Runs `body` with `label` pushed onto the scope stack.
    ///
    /// Inside the region the label is the innermost scope entry; on exit the
    /// prior stack is restored under the same guarantee as
    /// [`with_level`](Self::with_level).
    fn with_label<R>(&mut self, label: Label, body: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.with_scope(|scope| scope.child(label), body)
    }

    /// Runs `body` with the scope replaced by `f` applied to the current
    /// scope.
    ///
    /// This is the general form of [`with_label`](Self::with_label); the
    /// derived scope exists only for the duration of the region.
    fn with_scope<R>(
        &mut self,
        f: impl FnOnce(&Scope) -> Scope,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R
    where
        Self: Sized,
    {
        let next = f(self.scope());
        let prior = self.swap_scope(next);
        let mut guard = ScopeGuard::new(self, prior);
        body(guard.logger())
    }

    /// Runs `body` with the congestion policy temporarily replaced.
    fn with_policy<R>(&mut self, policy: Policy, body: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        let prior = self.swap_policy(policy);
        let mut guard = PolicyGuard::new(self, prior);
        body(guard.logger())
    }
}
