//! crates/capability/src/guard.rs
//! RAII guards that undo a scoped override when the region exits.
//!
//! Each guard pairs a borrowed logger with the value that was current before
//! the override was installed. Dropping the guard swaps the prior value back
//! in, so restoration happens on every exit path of the wrapped region:
//! normal return, early return propagated through the region's result, and
//! unwinding. The `with_*` operations on [`Logger`] create exactly one guard
//! per call, which is what guarantees the one-install/one-restore property
//! across stacked adapters.

use std::marker::PhantomData;

use model::{Level, Policy, Scope};

use crate::logger::Logger;

/// Restores a threshold override on drop.
pub(crate) struct ThresholdGuard<'a, L, P>
where
    L: Logger<P> + ?Sized,
{
    logger: &'a mut L,
    prior: Level,
    _payload: PhantomData<fn(P)>,
}

impl<'a, L, P> ThresholdGuard<'a, L, P>
where
    L: Logger<P> + ?Sized,
{
    pub(crate) fn new(logger: &'a mut L, prior: Level) -> Self {
        Self {
            logger,
            prior,
            _payload: PhantomData,
        }
    }

    /// Reborrows the guarded logger for the duration of the region body.
    pub(crate) fn logger(&mut self) -> &mut L {
        self.logger
    }
}

impl<L, P> Drop for ThresholdGuard<'_, L, P>
where
    L: Logger<P> + ?Sized,
{
    fn drop(&mut self) {
        let _ = self.logger.swap_threshold(self.prior);
    }
}

/// Restores a scope override on drop.
pub(crate) struct ScopeGuard<'a, L, P>
where
    L: Logger<P> + ?Sized,
{
    logger: &'a mut L,
    prior: Option<Scope>,
    _payload: PhantomData<fn(P)>,
}

impl<'a, L, P> ScopeGuard<'a, L, P>
where
    L: Logger<P> + ?Sized,
{
    pub(crate) fn new(logger: &'a mut L, prior: Scope) -> Self {
        Self {
            logger,
            prior: Some(prior),
            _payload: PhantomData,
        }
    }

    pub(crate) fn logger(&mut self) -> &mut L {
        self.logger
    }
}

impl<L, P> Drop for ScopeGuard<'_, L, P>
where
    L: Logger<P> + ?Sized,
{
    fn drop(&mut self) {
        if let Some(prior) = self.prior.take() {
            let _ = self.logger.swap_scope(prior);
        }
    }
}

/// Restores a policy override on drop.
pub(crate) struct PolicyGuard<'a, L, P>
where
    L: Logger<P> + ?Sized,
{
    logger: &'a mut L,
    prior: Policy,
    _payload: PhantomData<fn(P)>,
}

impl<'a, L, P> PolicyGuard<'a, L, P>
where
    L: Logger<P> + ?Sized,
{
    pub(crate) fn new(logger: &'a mut L, prior: Policy) -> Self {
        Self {
            logger,
            prior,
            _payload: PhantomData,
        }
    }

    pub(crate) fn logger(&mut self) -> &mut L {
        self.logger
    }
}

impl<L, P> Drop for PolicyGuard<'_, L, P>
where
    L: Logger<P> + ?Sized,
{
    fn drop(&mut self) {
        let _ = self.logger.swap_policy(self.prior);
    }
}
