//! crates/capability/src/config.rs
//! Configuration surface consumed when a carrier is constructed.

use model::{Label, Level, Policy, Scope};

/// Initial state for a [`LogContext`](crate::LogContext).
///
/// External collaborators (command-line parsing, configuration files) own
/// how these values are obtained; this type only fixes their shape. All
/// fields are public so configuration loaders can assemble it directly.
///
/// # Examples
///
/// ```
/// use capability::LogConfig;
/// use model::{Level, Policy};
///
/// let config = LogConfig {
///     threshold: "warn".parse::<Level>().unwrap(),
///     policy: "discard".parse::<Policy>().unwrap(),
///     ..LogConfig::default()
/// };
/// assert_eq!(config.threshold, Level::Warn);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Severity threshold events must pass to be delivered.
    pub threshold: Level,
    /// Initial label stack, outermost-first. Commonly empty.
    pub labels: Vec<Label>,
    /// Congestion policy applied when the sink cannot accept an event.
    pub policy: Policy,
}

impl LogConfig {
    /// Builds the initial scope stack from the configured labels.
    #[must_use]
    pub fn initial_scope(&self) -> Scope {
        Scope::from_outermost(self.labels.clone())
    }
}

impl Default for LogConfig {
    /// Threshold `info`, empty label stack, policy `block`.
    fn default() -> Self {
        Self {
            threshold: Level::Info,
            labels: Vec::new(),
            policy: Policy::Block,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_info_empty_block() {
        let config = LogConfig::default();
        assert_eq!(config.threshold, Level::Info);
        assert!(config.labels.is_empty());
        assert_eq!(config.policy, Policy::Block);
    }

    #[test]
    fn initial_scope_preserves_label_order() {
        let config = LogConfig {
            labels: vec![Label::new("service", "sync"), Label::new("node", "a")],
            ..LogConfig::default()
        };

        let scope = config.initial_scope();
        let keys: Vec<&str> = scope.iter().map(Label::key).collect();
        assert_eq!(keys, ["node", "service"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = LogConfig {
            threshold: Level::Debug,
            labels: vec![Label::new("req", "1")],
            policy: Policy::Raise,
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: LogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
