//! crates/model/src/scope.rs
//! Labels and the nested label stack attached to every event.

use std::fmt;
use std::slice;

/// A single `key=value` naming label.
///
/// # Examples
///
/// ```
/// use model::Label;
///
/// let label = Label::new("req", "1");
/// assert_eq!(label.key(), "req");
/// assert_eq!(label.value(), "1");
/// assert_eq!(label.to_string(), "req=1");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    key: String,
    value: String,
}

impl Label {
    /// Creates a label from a key and a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the label key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the label value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered stack of [`Label`]s describing the nesting context of an event.
///
/// The head of the stack is the most recently entered (innermost) label.
/// Iteration, [`head`](Self::head), and [`Display`] all observe
/// innermost-first order, which reconstructs the nesting from the inside
/// out.
///
/// # Examples
///
/// ```
/// use model::{Label, Scope};
///
/// let scope = Scope::new()
///     .child(Label::new("req", "1"))
///     .child(Label::new("user", "42"));
///
/// assert_eq!(scope.head().unwrap().key(), "user");
/// assert_eq!(scope.to_string(), "user=42 req=1");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scope {
    // Innermost label stored last; iteration reverses.
    labels: Vec<Label>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub const fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Builds a scope from labels listed outermost-first, as configuration
    /// surfaces supply them.
    ///
    /// # Examples
    ///
    /// ```
    /// use model::{Label, Scope};
    ///
    /// let scope = Scope::from_outermost(vec![
    ///     Label::new("req", "1"),
    ///     Label::new("user", "42"),
    /// ]);
    /// assert_eq!(scope.head().unwrap().key(), "user");
    /// ```
    #[must_use]
    pub fn from_outermost(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Returns `true` when no label has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of entered labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns the innermost label, if any.
    #[must_use]
    pub fn head(&self) -> Option<&Label> {
        self.labels.last()
    }

    /// Pushes a new innermost label in place.
    pub fn push(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Returns a copy of this scope with `label` as its new innermost entry.
    ///
    /// The original scope is untouched; scoped overrides derive a child and
    /// restore the parent afterwards.
    #[must_use]
    pub fn child(&self, label: Label) -> Self {
        let mut child = self.clone();
        child.push(label);
        child
    }

    /// Iterates the labels innermost-first.
    pub fn iter(&self) -> std::iter::Rev<slice::Iter<'_, Label>> {
        self.labels.iter().rev()
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = &'a Label;
    type IntoIter = std::iter::Rev<slice::Iter<'a, Label>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Scope {
    /// Renders the labels innermost-first, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for label in self {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{label}")?;
            first = false;
        }
        Ok(())
    }
}
