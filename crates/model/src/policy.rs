//! crates/model/src/policy.rs
//! Congestion policy vocabulary.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Disposition applied when a sink cannot accept an event immediately.
///
/// This module only carries the vocabulary and its text encoding; the
/// dispositions are enforced by the logging capability and the sinks it is
/// bound to.
///
/// # Examples
///
/// ```
/// use model::Policy;
///
/// assert_eq!(Policy::Block.as_str(), "block");
/// assert_eq!("RAISE".parse::<Policy>().unwrap(), Policy::Raise);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Policy {
    /// Drop the event silently.
    Discard,
    /// Surface a congestion error to the caller.
    Raise,
    /// Block the caller until the sink accepts the event.
    Block,
}

impl Policy {
    /// All policies in canonical order.
    pub const ALL: [Self; 3] = [Self::Discard, Self::Raise, Self::Block];

    /// Returns the canonical lowercase token for this policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Raise => "raise",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Policy`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown congestion policy \"{input}\"; expected one of: discard, raise, block")]
pub struct ParsePolicyError {
    input: String,
}

impl ParsePolicyError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    /// Parses a policy token case-insensitively.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "discard" => Ok(Self::Discard),
            "raise" => Ok(Self::Raise),
            "block" => Ok(Self::Block),
            _ => Err(ParsePolicyError::new(input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_policy() {
        assert_eq!(Policy::ALL, [Policy::Discard, Policy::Raise, Policy::Block]);
    }

    #[test]
    fn display_matches_as_str() {
        for policy in Policy::ALL {
            assert_eq!(format!("{policy}"), policy.as_str());
        }
    }

    #[test]
    fn parse_round_trips_canonical_tokens() {
        for policy in Policy::ALL {
            assert_eq!(policy.as_str().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Discard".parse::<Policy>().unwrap(), Policy::Discard);
        assert_eq!("BLOCK".parse::<Policy>().unwrap(), Policy::Block);
    }

    #[test]
    fn parse_rejects_unknown_token() {
        let err = "drop".parse::<Policy>().unwrap_err();
        assert_eq!(err.input(), "drop");
        let rendered = err.to_string();
        assert!(rendered.contains("\"drop\""));
        for token in ["discard", "raise", "block"] {
            assert!(rendered.contains(token));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Policy::Raise).unwrap();
        let back: Policy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Policy::Raise);
    }
}
