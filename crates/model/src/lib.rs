#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `model` defines the data vocabulary shared across the scopelog
//! workspace: the severity [`Level`] ordering used for threshold filtering,
//! the congestion [`Policy`] vocabulary, the [`Label`]/[`Scope`] stack that
//! names the nesting context of an event, and the immutable [`Record`] /
//! [`SinkEvent`] types that cross the sink boundary.
//!
//! # Design
//!
//! Both enumerations are closed and round-trip through fixed lowercase
//! vocabularies (`quiet|error|warn|info|debug` and `discard|raise|block`).
//! Parsing is case-insensitive and rejects anything else with an error that
//! names the offending input and lists the accepted tokens, so the types can
//! back configuration files and command-line flags directly.
//!
//! # Invariants
//!
//! - `Level` is totally ordered `Quiet < Error < Warn < Info < Debug`;
//!   an event passes a threshold iff its level is no more verbose than the
//!   threshold, and no event is ever tagged `Quiet`.
//! - [`Record`] values are never mutated after construction; a new record is
//!   the unit of delivery.
//! - [`Scope`] observes strict innermost-first ordering so nesting can be
//!   reconstructed from any event.
//!
//! # Examples
//!
//! ```
//! use model::{Label, Level, Record, Scope};
//!
//! let threshold: Level = "warn".parse()?;
//! let scope = Scope::new().child(Label::new("req", "1"));
//!
//! assert!(Level::Error.passes(threshold));
//! assert!(!Level::Debug.passes(threshold));
//!
//! let record = Record::new(Level::Error, "resolve failed", scope);
//! assert_eq!(record.scope().head().unwrap().key(), "req");
//! # Ok::<(), model::ParseLevelError>(())
//! ```

mod error;
mod level;
mod policy;
mod record;
mod scope;

pub use error::CongestionError;
pub use level::{Level, ParseLevelError};
pub use policy::{ParsePolicyError, Policy};
pub use record::{Record, SinkEvent};
pub use scope::{Label, Scope};
