//! crates/model/src/record.rs
//! Immutable event records and the tagged union delivered to sinks.

use crate::level::Level;
use crate::scope::Scope;

/// An immutable log event.
///
/// A record is constructed once, at the `log` call site, and is the unit of
/// delivery to a sink. It captures the payload together with the level it
/// was tagged with and the scope stack that was active when it was logged.
///
/// # Examples
///
/// ```
/// use model::{Level, Record, Scope};
///
/// let record = Record::new(Level::Info, "transfer complete", Scope::new());
/// assert_eq!(record.level(), Level::Info);
/// assert!(record.scope().is_empty());
/// assert_eq!(*record.payload(), "transfer complete");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record<P> {
    payload: P,
    level: Level,
    scope: Scope,
}

impl<P> Record<P> {
    /// Creates a record from a level, payload, and captured scope.
    #[must_use]
    pub fn new(level: Level, payload: P, scope: Scope) -> Self {
        Self {
            payload,
            level,
            scope,
        }
    }

    /// Returns the level the event was tagged with.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the payload.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the scope stack captured at the `log` call.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Consumes the record and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Consumes the record and returns its level, payload, and scope.
    #[must_use]
    pub fn into_parts(self) -> (Level, P, Scope) {
        (self.level, self.payload, self.scope)
    }
}

/// Event handed to a sink: either an application event or a diagnostic the
/// logging machinery emits about itself.
///
/// System events carry a fixed textual payload independent of the
/// application payload type, so a sink can report conditions such as queue
/// overflow through the same delivery path it uses for user events.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SinkEvent<P> {
    /// Diagnostic emitted by the logging machinery about itself.
    System(Record<String>),
    /// Event logged by application code.
    User(Record<P>),
}

impl<P> SinkEvent<P> {
    /// Creates a system diagnostic event with an empty scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use model::{Level, SinkEvent};
    ///
    /// let event: SinkEvent<u32> = SinkEvent::system(Level::Error, "queue full");
    /// assert!(event.is_system());
    /// assert_eq!(event.level(), Level::Error);
    /// ```
    #[must_use]
    pub fn system(level: Level, text: impl Into<String>) -> Self {
        Self::System(Record::new(level, text.into(), Scope::new()))
    }

    /// Wraps an application record.
    #[must_use]
    pub fn user(record: Record<P>) -> Self {
        Self::User(record)
    }

    /// Returns `true` for system diagnostics.
    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System(_))
    }

    /// Returns the level of either variant.
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::System(record) => record.level(),
            Self::User(record) => record.level(),
        }
    }

    /// Returns the scope of either variant.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        match self {
            Self::System(record) => record.scope(),
            Self::User(record) => record.scope(),
        }
    }

    /// Returns the application record, if this is a user event.
    #[must_use]
    pub fn as_user(&self) -> Option<&Record<P>> {
        match self {
            Self::User(record) => Some(record),
            Self::System(_) => None,
        }
    }

    /// Returns the diagnostic record, if this is a system event.
    #[must_use]
    pub fn as_system(&self) -> Option<&Record<String>> {
        match self {
            Self::System(record) => Some(record),
            Self::User(_) => None,
        }
    }
}
