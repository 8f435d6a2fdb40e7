//! Human-readable failure reasons.
//!
//! Any failure payload may implement [`FailureReason`] to describe itself.
//! The capability is split in two layers:
//!
//! - [`Describable`] supplies a one-line synopsis and a full description.
//! - [`FailureReason`] adds an optional captured backtrace, a flag telling
//!   whether the failure should be reported upstream, and a conversion into
//!   the failure variant of [`Outcome`].
//!
//! Error types that double as their own failure reason implement
//! [`FailureThrowable`] instead; a blanket implementation derives the rest
//! from the error's `Display` text.
//!
//! # Example
//!
//! ```rust
//! use outcome::{Describable, FailureReason, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! struct OutOfStock {
//!     sku: &'static str,
//! }
//!
//! impl Describable for OutOfStock {
//!     fn synopsis(&self) -> String {
//!         "Item is out of stock.".to_string()
//!     }
//!
//!     fn description(&self) -> String {
//!         format!("No units of {} are left in the warehouse.", self.sku)
//!     }
//! }
//!
//! impl FailureReason for OutOfStock {}
//!
//! let outcome: Outcome<u32, OutOfStock> = OutOfStock { sku: "A-1" }.to_failure();
//! assert!(outcome.is_failure());
//! assert!(!outcome.reason().is_some_and(FailureReason::report_issue));
//! ```

use std::backtrace::Backtrace;
use std::error::Error as StdError;

use crate::Outcome;

/// Something that can describe itself to a human.
pub trait Describable {
    /// A short, single line summary.
    fn synopsis(&self) -> String;

    /// The full description.
    fn description(&self) -> String;
}

/// A describable failure payload.
pub trait FailureReason: Describable {
    /// The backtrace captured where the failure originated, if any.
    fn stack_trace(&self) -> Option<&Backtrace> {
        None
    }

    /// Whether the failure should be reported as an issue.
    fn report_issue(&self) -> bool {
        false
    }

    /// Wrap this reason into a failed [`Outcome`] with any success type.
    fn to_failure<S>(self) -> Outcome<S, Self>
    where
        Self: Sized,
    {
        Outcome::Failure(self)
    }
}

/// An error type that is its own failure reason.
///
/// The synopsis is the error's `Display` text. Implementors provide the
/// description and may expose a backtrace or request reporting.
///
/// ```rust
/// use outcome::{Describable, FailureReason, FailureThrowable};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("Quota exceeded.")]
/// struct QuotaExceeded;
///
/// impl FailureThrowable for QuotaExceeded {
///     fn description(&self) -> String {
///         "The tenant used up its monthly quota.".to_string()
///     }
/// }
///
/// assert_eq!(QuotaExceeded.synopsis(), "Quota exceeded.");
/// assert!(QuotaExceeded.stack_trace().is_none());
/// ```
pub trait FailureThrowable: StdError {
    /// The full description.
    fn description(&self) -> String;

    /// The backtrace captured when the error was created, if the type
    /// keeps one.
    fn backtrace(&self) -> Option<&Backtrace> {
        None
    }

    /// Whether the failure should be reported as an issue.
    fn report_issue(&self) -> bool {
        false
    }
}

impl<T: FailureThrowable> Describable for T {
    fn synopsis(&self) -> String {
        self.to_string()
    }

    fn description(&self) -> String {
        FailureThrowable::description(self)
    }
}

impl<T: FailureThrowable> FailureReason for T {
    fn stack_trace(&self) -> Option<&Backtrace> {
        FailureThrowable::backtrace(self)
    }

    fn report_issue(&self) -> bool {
        FailureThrowable::report_issue(self)
    }
}
