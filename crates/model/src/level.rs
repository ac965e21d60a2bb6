//! crates/model/src/level.rs
//! Severity vocabulary and the threshold comparison used for filtering.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log event or threshold of a logging context.
///
/// The vocabulary is closed and totally ordered from most restrictive to
/// most verbose: `Quiet < Error < Warn < Info < Debug`. `Quiet` exists only
/// as a threshold value; no event is ever tagged `Quiet`, so a `Quiet`
/// threshold suppresses everything.
///
/// # Examples
///
/// ```
/// use model::Level;
///
/// assert!(Level::Error < Level::Debug);
/// assert_eq!(Level::Warn.as_str(), "warn");
/// assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Threshold that suppresses every event.
    Quiet,
    /// Failure that the application should surface.
    Error,
    /// Recoverable or suspicious condition.
    Warn,
    /// Routine informational output.
    Info,
    /// Verbose diagnostic output.
    Debug,
}

impl Level {
    /// All levels in ascending order of verbosity.
    ///
    /// # Examples
    ///
    /// ```
    /// use model::Level;
    ///
    /// let tokens: Vec<&str> = Level::ALL.into_iter().map(Level::as_str).collect();
    /// assert_eq!(tokens, ["quiet", "error", "warn", "info", "debug"]);
    /// ```
    pub const ALL: [Self; 5] = [
        Self::Quiet,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the canonical lowercase token for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns `true` when an event tagged with this level passes the given
    /// threshold.
    ///
    /// An event passes when its level is no more verbose than the threshold.
    /// Events tagged `Quiet` never pass because `Quiet` is reserved for
    /// thresholds, and a `Quiet` threshold therefore rejects every event.
    ///
    /// # Examples
    ///
    /// ```
    /// use model::Level;
    ///
    /// assert!(Level::Error.passes(Level::Warn));
    /// assert!(Level::Warn.passes(Level::Warn));
    /// assert!(!Level::Info.passes(Level::Warn));
    /// assert!(!Level::Error.passes(Level::Quiet));
    /// ```
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        self != Self::Quiet && self <= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
///
/// The message names the rejected input and lists the accepted vocabulary so
/// configuration errors are self-explanatory.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level \"{input}\"; expected one of: quiet, error, warn, info, debug")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
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

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level token case-insensitively.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError::new(input)),
        }
    }
}
