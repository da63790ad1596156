use chrono::NaiveDate;
use serde::Serialize;

/// Why an otherwise valid request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardReason {
    /// A board always keeps at least one column.
    LastColumn,
    /// Deadlines cannot be set before today.
    DeadlineInPast,
}

impl std::fmt::Display for GuardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastColumn => write!(f, "the last column cannot be deleted"),
            Self::DeadlineInPast => write!(f, "the deadline cannot be in the past"),
        }
    }
}

/// Outcome of an operation that can be legitimately refused. Refusals are
/// expected states, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Guarded<T> {
    Accepted(T),
    Rejected(GuardReason),
}

impl<T> Guarded<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Guarded<U> {
        match self {
            Self::Accepted(value) => Guarded::Accepted(f(value)),
            Self::Rejected(reason) => Guarded::Rejected(reason),
        }
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }
}

/// A deadline is allowed when absent, today, or later.
pub fn deadline_allowed(deadline: Option<NaiveDate>, today: NaiveDate) -> bool {
    deadline.is_none_or(|d| d >= today)
}
