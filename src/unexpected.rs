//! A failure reason for errors nobody anticipated.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

use crate::reason::{Describable, FailureReason};
use crate::throwing::Throwable;

/// Wraps an arbitrary raised error as a [`FailureReason`].
///
/// The synopsis is always [`Unexpected::SYNOPSIS`], the description is the
/// wrapped error's message, and unexpected failures always ask to be
/// reported.
///
/// # Example
///
/// ```rust
/// use outcome::{Describable, FailureReason, Unexpected};
///
/// let unknown = Unexpected::new(std::io::Error::other("disk on fire"));
/// assert_eq!(unknown.synopsis(), "An unknown exception has occurred.");
/// assert_eq!(unknown.description(), "disk on fire");
/// assert!(unknown.report_issue());
/// ```
#[derive(Debug)]
pub struct Unexpected {
    throwable: Throwable,
}

impl Unexpected {
    /// Synopsis shared by every unexpected failure.
    pub const SYNOPSIS: &'static str = "An unknown exception has occurred.";

    /// Wrap a raised error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            throwable: Throwable::new(error),
        }
    }

    /// The wrapped error.
    pub fn throwable(&self) -> &Throwable {
        &self.throwable
    }

    /// Consume and return the wrapped error.
    pub fn into_inner(self) -> Throwable {
        self.throwable
    }
}

impl From<Throwable> for Unexpected {
    fn from(throwable: Throwable) -> Self {
        Self { throwable }
    }
}

impl Describable for Unexpected {
    fn synopsis(&self) -> String {
        Self::SYNOPSIS.to_string()
    }

    fn description(&self) -> String {
        self.throwable.to_string()
    }
}

impl FailureReason for Unexpected {
    fn stack_trace(&self) -> Option<&Backtrace> {
        let backtrace = self.throwable.backtrace();
        match backtrace.status() {
            BacktraceStatus::Captured => Some(backtrace),
            _ => None,
        }
    }

    fn report_issue(&self) -> bool {
        true
    }
}

impl fmt::Display for Unexpected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::SYNOPSIS, self.throwable)
    }
}
