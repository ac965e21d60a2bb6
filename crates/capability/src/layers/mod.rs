//! crates/capability/src/layers/mod.rs
//! Delegating adapters that make the capability usable inside composed
//! execution contexts.
//!
//! Application code rarely runs against a bare carrier: it is wrapped in
//! layers added for other purposes, such as error short-circuiting, value
//! accumulation, state threading, instrumentation, or two-outcome
//! selection. Each adapter here implements [`Logger`](crate::Logger) by
//! forwarding `log` and the three `swap_*` override points to its inner
//! logger, so the scoped `with_*` operations behave identically at any
//! stacking depth: exactly one override is installed at the innermost
//! carrier and exactly one restoration occurs when the region exits.
//!
//! The adapters compose freely; a `Fallible<Accumulating<Stateful<
//! LogContext<..>>>>` stack logs with the same filtering, scope capture,
//! and sink invocation as the unwrapped carrier.

mod accumulate;
mod fallible;
mod selective;
mod stateful;
mod traced;

pub use accumulate::Accumulating;
pub use fallible::Fallible;
pub use selective::{Outcome, Selective};
pub use stateful::Stateful;
pub use traced::{TraceStep, Traced};
