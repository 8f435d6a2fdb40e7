//! Factories running a fallible computation and capturing its result.
//!
//! Each factory runs the supplied computation exactly once. A returned
//! value becomes a `Success`; a raised error never escapes and is turned
//! into a `Failure` according to the factory:
//!
//! | factory | reason on error |
//! |---|---|
//! | [`Outcome::of`] | the fixed reason passed by the caller |
//! | [`Outcome::of_failure`] | the error itself, which is a [`FailureReason`] |
//! | [`Outcome::of_classified`] | looked up in a [`ReasonMap`], else a default |
//!
//! # Example
//!
//! ```rust
//! use outcome::classify::{ErrorClass, ReasonMap};
//! use outcome::Outcome;
//! use std::num::ParseIntError;
//!
//! let reasons = ReasonMap::new().with(ErrorClass::of::<ParseIntError>(), "bad number");
//!
//! let parsed = Outcome::of_classified(|| "12".parse::<i32>(), &reasons, "unknown");
//! assert_eq!(parsed, Outcome::Success(12));
//!
//! let parsed = Outcome::of_classified(|| "x".parse::<i32>(), &reasons, "unknown");
//! assert_eq!(parsed, Outcome::Failure("bad number"));
//! ```

use std::error::Error as StdError;

use crate::classify::ReasonMap;
use crate::reason::FailureReason;
use crate::throwing::{trace_caught, AnyThrowingSupplier, Throwable, ThrowingSupplier};
use crate::Outcome;

impl<S, F> Outcome<S, F> {
    /// Run `supplier`, replacing any raised error with `reason`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use std::io;
    ///
    /// let outcome = Outcome::of(|| Err::<i32, _>(io::Error::other("offline")), "reasonX");
    /// assert_eq!(outcome, Outcome::Failure("reasonX"));
    /// assert_eq!(outcome.map(|v| v * 2), Outcome::Failure("reasonX"));
    /// assert_eq!(outcome.recover(|_| 42), Outcome::Success(42));
    /// ```
    pub fn of<G, E>(supplier: G, reason: F) -> Self
    where
        G: FnOnce() -> Result<S, E>,
        E: Into<Throwable>,
    {
        match supplier.get_any() {
            Ok(value) => Outcome::Success(value),
            Err(error) => {
                trace_caught("of", &error);
                Outcome::Failure(reason)
            }
        }
    }

    /// Run `supplier`, whose error type describes itself as a failure
    /// reason.
    ///
    /// ```rust
    /// use outcome::{FailureThrowable, Outcome};
    ///
    /// #[derive(Debug, PartialEq, thiserror::Error)]
    /// #[error("Invalid quantity.")]
    /// struct InvalidQuantity(i32);
    ///
    /// impl FailureThrowable for InvalidQuantity {
    ///     fn description(&self) -> String {
    ///         format!("{} is not a positive quantity.", self.0)
    ///     }
    /// }
    ///
    /// let check = |q: i32| if q > 0 { Ok(q) } else { Err(InvalidQuantity(q)) };
    ///
    /// assert_eq!(Outcome::of_failure(|| check(3)), Outcome::Success(3));
    /// assert_eq!(Outcome::of_failure(|| check(-1)), Outcome::Failure(InvalidQuantity(-1)));
    /// ```
    pub fn of_failure<G>(supplier: G) -> Self
    where
        G: FnOnce() -> Result<S, F>,
        F: FailureReason,
    {
        match supplier.get() {
            Ok(value) => Outcome::Success(value),
            Err(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("of_failure caught a failure: {}", reason.synopsis());
                reason.to_failure()
            }
        }
    }

    /// Run `supplier`, classifying any raised error through `reasons`.
    ///
    /// The reason is resolved by [`ReasonMap::classify`]: an exact match on
    /// the error's cause, then an exact match on the error itself, then the
    /// first class assignable from the error in insertion order. When
    /// nothing matches, `missing` is used.
    pub fn of_classified<G, E>(supplier: G, reasons: &ReasonMap<F>, missing: F) -> Self
    where
        G: FnOnce() -> Result<S, E>,
        E: Into<Throwable>,
        F: Clone,
    {
        match supplier.get_any() {
            Ok(value) => Outcome::Success(value),
            Err(error) => {
                trace_caught("of_classified", &error);
                let raised: &(dyn StdError + 'static) = &*error;
                Outcome::Failure(reasons.classify(raised).cloned().unwrap_or(missing))
            }
        }
    }
}
