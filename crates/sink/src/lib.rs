//! crates/sink/src/lib.rs
//! Ready-made sink backends for the scopelog capability layer.
//!
//! # Overview
//!
//! The capability crate defines the [`capability::Sink`] contract but ships
//! no backend of its own. This crate provides the stock implementations:
//!
//! - [`MemorySink`] buffers events in process memory, optionally bounded.
//!   Useful for tests and for tools that inspect their own log output.
//! - [`QueueSink`] hands events to a bounded channel consumed by another
//!   thread, reporting any overflow it caused as a system diagnostic once
//!   capacity returns.
//! - [`TracingSink`] forwards events into the `tracing` ecosystem (behind
//!   the `tracing` cargo feature).
//!
//! # Design
//!
//! Backends never apply severity filtering or congestion policy; both are
//! resolved by the carrier before a sink sees the event. A sink only
//! answers one question per call: accepted now, or not.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod memory;
mod queue;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use memory::MemorySink;
pub use queue::{QueueSink, drain};
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingSink;
