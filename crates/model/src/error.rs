//! crates/model/src/error.rs
//! Congestion error surfaced by `log` under the raise policy.

use thiserror::Error;

use crate::level::Level;
use crate::scope::Scope;

/// Error raised when a sink refuses an event and the active policy is
/// [`Policy::Raise`](crate::Policy::Raise).
///
/// The error identifies the dropped event by its level and scope, enough
/// for the caller to report or retry, without forwarding the payload
/// itself.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("log sink congested: {level} event dropped (scope: {scope})")]
pub struct CongestionError {
    level: Level,
    scope: Scope,
}

impl CongestionError {
    /// Creates a congestion error for the dropped event.
    #[must_use]
    pub fn new(level: Level, scope: Scope) -> Self {
        Self { level, scope }
    }

    /// Returns the level of the dropped event.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the scope of the dropped event.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::Label;

    #[test]
    fn accessors_return_dropped_event_identity() {
        let scope = Scope::new().child(Label::new("req", "1"));
        let err = CongestionError::new(Level::Warn, scope.clone());

        assert_eq!(err.level(), Level::Warn);
        assert_eq!(err.scope(), &scope);
    }

    #[test]
    fn display_names_level_and_scope() {
        let scope = Scope::new().child(Label::new("req", "1"));
        let err = CongestionError::new(Level::Error, scope);

        let rendered = err.to_string();
        assert!(rendered.contains("error"));
        assert!(rendered.contains("req=1"));
    }
}
