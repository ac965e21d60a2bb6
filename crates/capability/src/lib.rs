#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `capability` is the scoped structured-logging front end of the scopelog
//! workspace. Application code programs against the [`Logger`] trait, whose
//! four public operations are `log` plus the scoped overrides `with_level`,
//! `with_label`, and `with_policy`. The concrete [`LogContext`] carrier
//! binds a [`Sink`] underneath the capability, and the [`layer
//! adapters`](crate::layers) make the same operations available unchanged
//! inside error-propagating, accumulating, state-threading, tracing, and
//! two-outcome execution contexts.
//!
//! # Design
//!
//! Scoped overrides are dynamic scoping without global mutable state: each
//! `with_*` call swaps a new value into the carrier, runs the region body,
//! and restores the prior value through an RAII guard. The guard fires on
//! every exit path, including unwinding, so the restoration invariant never
//! depends on the body's success. The carrier is a plain value; concurrent
//! sessions hold independent carriers and cannot observe each other's
//! overrides.
//!
//! Layer adapters delegate `log` and the three swap primitives to their
//! inner logger and add nothing else to the delivery path, so a stack of
//! adapters installs exactly one override per `with_*` call, at the
//! carrier.
//!
//! # Invariants
//!
//! - One install and one restoration per `with_*` call, on every exit path.
//! - `log` is synchronous: it returns only after the sink has accepted,
//!   refused, or (under the block policy) finally accepted the event.
//! - A filtered event never reaches the sink and has no observable effect.
//!
//! # Examples
//!
//! ```
//! use capability::{LogContext, Logger};
//! use model::{Label, Level};
//! use sink::MemorySink;
//!
//! let mut log = LogContext::new(MemorySink::new());
//!
//! log.with_label(Label::new("req", "1"), |log| {
//!     log.with_label(Label::new("user", "42"), |log| {
//!         log.log(Level::Warn, "quota exceeded")
//!     })
//! })?;
//!
//! let events = log.sink().events();
//! let scope = events[0].scope();
//! assert_eq!(scope.head().unwrap().key(), "user");
//! assert_eq!(scope.to_string(), "user=42 req=1");
//! # Ok::<(), model::CongestionError>(())
//! ```

mod config;
mod context;
mod guard;
pub mod layers;
mod logger;
mod sink;
#[cfg(test)]
mod test_util;

pub use config::LogConfig;
pub use context::LogContext;
pub use layers::{Accumulating, Fallible, Outcome, Selective, Stateful, TraceStep, Traced};
pub use logger::Logger;
pub use sink::{Sink, SinkFull};
