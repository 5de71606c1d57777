//! Per-repository operation results.

/// Result of an operation that must not abort the run.
///
/// A failure still carries a usable value: whatever was gathered before the
/// error (stack detection) or an empty default (issue fetching).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation completed.
    Success(T),

    /// The operation failed part-way.
    Failure {
        /// Data gathered before the failure.
        partial: T,
        /// Error message.
        reason: String,
    },
}

impl<T> Outcome<T> {
    /// Returns true if the operation completed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { reason, .. } => Some(reason),
        }
    }

    /// Borrows the carried value.
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) | Self::Failure { partial: value, .. } => value,
        }
    }

    /// Consumes the outcome, returning the carried value either way.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) | Self::Failure { partial: value, .. } => value,
        }
    }
}
